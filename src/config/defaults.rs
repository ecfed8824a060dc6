//! Default configuration values for test-name-dropdown.

pub const DEFAULT_ENDPOINT: &str = "https://api.bitbucket.org/1.0/repositories/Niam/libdodo/directory";
pub const DEFAULT_MARKER_ATTRIBUTE: &str = "data-test-id";
pub const DEFAULT_MARKER: &str = "CustomTestName";
pub const DEFAULT_FILTER: &str = ".cc";
pub const DEFAULT_PLACEHOLDER: &str = "Select a test";
pub const DEFAULT_LOADING_LABEL: &str = "Loading...";
