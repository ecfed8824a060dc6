//! Listing fetched over HTTP.

use super::{ListingFailure, ListingOutcome, ListingSource, error_chain, parse_listing};
use crate::config::PopulatorConfig;
use crate::error::{DropdownError, DropdownResult};
use url::Url;

/// Plain GET against the listing endpoint: no custom headers, no retries.
#[derive(Debug, Clone)]
pub struct HttpListingSource {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpListingSource {
    pub fn new(config: &PopulatorConfig) -> DropdownResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| DropdownError::HttpClient(error_chain(&e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn transport_failure(error: &reqwest::Error) -> ListingFailure {
    if error.is_timeout() {
        ListingFailure::timeout(error_chain(error))
    } else {
        ListingFailure::error(error_chain(error))
    }
}

impl ListingSource for HttpListingSource {
    async fn fetch(&self) -> ListingOutcome {
        log::debug!(
            target: "test_name_dropdown::listing",
            "GET {}",
            self.endpoint
        );

        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| transport_failure(&e))?;

        let status = response.status();
        if !status.is_success() {
            let reason = status
                .canonical_reason()
                .map(String::from)
                .unwrap_or_else(|| status.as_u16().to_string());
            return Err(ListingFailure::error(reason));
        }

        let body = response.text().await.map_err(|e| transport_failure(&e))?;
        parse_listing(&body)
    }
}
