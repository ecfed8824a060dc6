//! Directory listing: where the dropdown items come from.
//!
//! A [`ListingSource`] resolves exactly once to a [`ListingOutcome`]. The
//! outcome is then turned into the item sequence every dropdown receives by
//! [`dropdown_items`].

pub mod file;
pub mod http;

pub use file::FileListingSource;
pub use http::HttpListingSource;

use crate::config::PopulatorConfig;
use serde::Deserialize;
use std::future::Future;

pub const STATUS_ERROR: &str = "error";
pub const STATUS_TIMEOUT: &str = "timeout";
pub const STATUS_PARSE_ERROR: &str = "parsererror";

/// Response body of the listing endpoint. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListingResponse {
    pub values: Vec<String>,
}

/// Why the listing could not be obtained.
///
/// `status` is a short category (`error`, `timeout`, `parsererror`) and
/// `description` the detail, e.g. an HTTP reason phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingFailure {
    pub status: String,
    pub description: String,
}

impl ListingFailure {
    pub fn new(status: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            description: description.into(),
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self::new(STATUS_ERROR, description)
    }

    pub fn timeout(description: impl Into<String>) -> Self {
        Self::new(STATUS_TIMEOUT, description)
    }

    pub fn parse_error(description: impl Into<String>) -> Self {
        Self::new(STATUS_PARSE_ERROR, description)
    }

    /// Single-line `"<status>: <description>"`.
    ///
    /// Each `\n` and `\r` becomes one space.
    pub fn message(&self) -> String {
        format!("{}: {}", self.status, self.description).replace(['\n', '\r'], " ")
    }
}

impl std::fmt::Display for ListingFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

pub type ListingOutcome = Result<Vec<String>, ListingFailure>;

pub trait ListingSource {
    /// Issue the request. Resolves exactly once.
    fn fetch(&self) -> impl Future<Output = ListingOutcome> + Send;
}

/// Parse a listing body. A non-JSON body or a missing `values` array is a
/// `parsererror` failure.
pub fn parse_listing(body: &str) -> ListingOutcome {
    serde_json::from_str::<ListingResponse>(body)
        .map(|response| response.values)
        .map_err(|e| ListingFailure::parse_error(e.to_string()))
}

/// Keep the entries containing the configured filter substring, in order.
///
/// With no match the result is the placeholder alone. With
/// `prepend_placeholder` the placeholder always leads.
pub fn filter_listing(values: &[String], config: &PopulatorConfig) -> Vec<String> {
    let matches = values
        .iter()
        .filter(|value| value.contains(config.filter.as_str()))
        .cloned();

    if config.prepend_placeholder {
        return std::iter::once(config.placeholder.clone())
            .chain(matches)
            .collect();
    }

    let matches: Vec<String> = matches.collect();
    if matches.is_empty() {
        vec![config.placeholder.clone()]
    } else {
        matches
    }
}

/// The item sequence every dropdown receives for this outcome.
pub fn dropdown_items(outcome: &ListingOutcome, config: &PopulatorConfig) -> Vec<String> {
    match outcome {
        Ok(values) => filter_listing(values, config),
        Err(failure) => vec![failure.message()],
    }
}

/// Render an error and its sources as `outer: inner: innermost`.
pub(crate) fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(inner) = source {
        let text = inner.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = inner.source();
    }
    message
}
