pub mod defaults;
pub mod settings;
pub mod user;

pub use settings::DropdownSettings;
pub use user::{load_settings_file, load_user_config, user_config_path};

use crate::error::{DropdownError, DropdownResult};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Merge two DropdownSettings, preferring values from `primary` over `fallback`
pub fn merge_settings(
    fallback: Option<DropdownSettings>,
    primary: Option<DropdownSettings>,
) -> Option<DropdownSettings> {
    match (fallback, primary) {
        (None, None) => None,
        (Some(settings), None) => Some(settings),
        (None, Some(settings)) => Some(settings),
        (Some(fallback), Some(primary)) => Some(DropdownSettings {
            endpoint: primary.endpoint.or(fallback.endpoint),
            marker_attribute: primary.marker_attribute.or(fallback.marker_attribute),
            marker: primary.marker.or(fallback.marker),
            filter: primary.filter.or(fallback.filter),
            placeholder: primary.placeholder.or(fallback.placeholder),
            loading_label: primary.loading_label.or(fallback.loading_label),
            prepend_placeholder: primary.prepend_placeholder.or(fallback.prepend_placeholder),
            timeout_secs: primary.timeout_secs.or(fallback.timeout_secs),
        }),
    }
}

/// Fully resolved configuration for one populator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopulatorConfig {
    pub endpoint: Url,
    pub marker_attribute: String,
    pub marker: String,
    pub filter: String,
    pub placeholder: String,
    pub loading_label: String,
    pub prepend_placeholder: bool,
    pub timeout: Option<Duration>,
}

impl PopulatorConfig {
    /// Fill unset fields from [`defaults`] and validate the endpoint.
    ///
    /// A `timeout_secs` of 0 means no timeout.
    pub fn from_settings(merged: DropdownSettings) -> DropdownResult<Self> {
        let endpoint_text = merged
            .endpoint
            .unwrap_or_else(|| defaults::DEFAULT_ENDPOINT.to_string());

        Ok(Self {
            endpoint: parse_endpoint(&endpoint_text)?,
            marker_attribute: merged
                .marker_attribute
                .unwrap_or_else(|| defaults::DEFAULT_MARKER_ATTRIBUTE.to_string()),
            marker: merged
                .marker
                .unwrap_or_else(|| defaults::DEFAULT_MARKER.to_string()),
            filter: merged
                .filter
                .unwrap_or_else(|| defaults::DEFAULT_FILTER.to_string()),
            placeholder: merged
                .placeholder
                .unwrap_or_else(|| defaults::DEFAULT_PLACEHOLDER.to_string()),
            loading_label: merged
                .loading_label
                .unwrap_or_else(|| defaults::DEFAULT_LOADING_LABEL.to_string()),
            prepend_placeholder: merged.prepend_placeholder.unwrap_or(false),
            timeout: merged
                .timeout_secs
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        })
    }
}

impl Default for PopulatorConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(defaults::DEFAULT_ENDPOINT).expect("valid default endpoint"),
            marker_attribute: defaults::DEFAULT_MARKER_ATTRIBUTE.to_string(),
            marker: defaults::DEFAULT_MARKER.to_string(),
            filter: defaults::DEFAULT_FILTER.to_string(),
            placeholder: defaults::DEFAULT_PLACEHOLDER.to_string(),
            loading_label: defaults::DEFAULT_LOADING_LABEL.to_string(),
            prepend_placeholder: false,
            timeout: None,
        }
    }
}

/// Parse an endpoint, accepting only absolute http(s) URLs.
pub fn parse_endpoint(endpoint: &str) -> DropdownResult<Url> {
    let url =
        Url::parse(endpoint).map_err(|e| DropdownError::invalid_endpoint(endpoint, e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(DropdownError::invalid_endpoint(
            endpoint,
            format!("unsupported scheme '{}'", other),
        )),
    }
}

/// Load configuration: defaults, then the user-wide file, then `explicit`.
///
/// `overrides` (typically from the command line) win over both files.
pub fn load_config(
    explicit: Option<&Path>,
    overrides: DropdownSettings,
) -> DropdownResult<PopulatorConfig> {
    let user = load_user_config()?;
    let file = explicit.map(load_settings_file).transpose()?;

    let layered = merge_settings(merge_settings(user, file), Some(overrides)).unwrap_or_default();
    PopulatorConfig::from_settings(layered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_settings_with_none() {
        assert!(merge_settings(None, None).is_none());
    }

    #[test]
    fn test_merge_settings_fallback_only() {
        let fallback = DropdownSettings {
            filter: Some(".cpp".to_string()),
            ..Default::default()
        };
        let result = merge_settings(Some(fallback), None).unwrap();
        assert_eq!(result.filter.as_deref(), Some(".cpp"));
    }

    #[test]
    fn test_merge_settings_prefer_primary() {
        let fallback = DropdownSettings {
            endpoint: Some("http://fallback/".to_string()),
            marker: Some("Fallback".to_string()),
            ..Default::default()
        };
        let primary = DropdownSettings {
            endpoint: Some("http://primary/".to_string()),
            ..Default::default()
        };

        let result = merge_settings(Some(fallback), Some(primary)).unwrap();
        assert_eq!(result.endpoint.as_deref(), Some("http://primary/"));
        // Unset in primary, so the fallback survives
        assert_eq!(result.marker.as_deref(), Some("Fallback"));
    }

    #[test]
    fn test_from_settings_fills_defaults() {
        let config = PopulatorConfig::from_settings(DropdownSettings::default()).unwrap();
        assert_eq!(config, PopulatorConfig::default());
    }

    #[test]
    fn test_from_settings_applies_timeout_and_placeholder_mode() {
        let config = PopulatorConfig::from_settings(DropdownSettings {
            prepend_placeholder: Some(true),
            timeout_secs: Some(5),
            ..Default::default()
        })
        .unwrap();
        assert!(config.prepend_placeholder);
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_from_settings_zero_timeout_disables_timeout() {
        let config = PopulatorConfig::from_settings(DropdownSettings {
            timeout_secs: Some(0),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_parse_endpoint_rejects_non_http() {
        let err = parse_endpoint("file:///etc/passwd").unwrap_err();
        assert!(matches!(err, DropdownError::InvalidEndpoint { .. }));

        let err = parse_endpoint("not a url").unwrap_err();
        assert!(matches!(err, DropdownError::InvalidEndpoint { .. }));

        assert!(parse_endpoint("http://127.0.0.1:9/listing").is_ok());
    }
}
