use serde::{Deserialize, Serialize};

/// Settings as they appear in a TOML config file.
///
/// Every field is optional so that a user-wide file and an explicit file can
/// be layered with [`super::merge_settings`]; unset fields fall back to
/// [`super::defaults`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DropdownSettings {
    /// Directory listing endpoint returning `{ "values": [...] }`.
    pub endpoint: Option<String>,
    /// Attribute that marks inputs to be replaced.
    pub marker_attribute: Option<String>,
    /// Required value of the marker attribute.
    pub marker: Option<String>,
    /// Substring a listing entry must contain to become an option.
    pub filter: Option<String>,
    /// Sole item shown when nothing in the listing matches the filter.
    pub placeholder: Option<String>,
    /// Label of the disabled option shown while the listing is in flight.
    pub loading_label: Option<String>,
    /// Always put the placeholder first, followed by the matching entries.
    pub prepend_placeholder: Option<bool>,
    /// Request timeout. Unset or 0 means wait indefinitely.
    pub timeout_secs: Option<u64>,
}
