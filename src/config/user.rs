//! User configuration loading for test-name-dropdown.
//!
//! User config location: $XDG_CONFIG_HOME/test-name-dropdown/test-name-dropdown.toml
//! Fallback: the platform config directory reported by `dirs`.

use super::settings::DropdownSettings;
use crate::error::{DropdownError, DropdownResult};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "test-name-dropdown";
const CONFIG_FILE: &str = "test-name-dropdown.toml";

/// Returns the path to the user configuration file.
///
/// Returns None if neither $XDG_CONFIG_HOME nor a platform config directory
/// is available.
pub fn user_config_path() -> Option<PathBuf> {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return Some(PathBuf::from(xdg_config).join(APP_DIR).join(CONFIG_FILE));
    }

    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Read and parse a settings file.
pub fn load_settings_file(path: &Path) -> DropdownResult<DropdownSettings> {
    let content = std::fs::read_to_string(path).map_err(|source| DropdownError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|e| DropdownError::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the user-wide settings file if it exists.
///
/// A missing file is not an error; an unreadable or malformed one is.
pub fn load_user_config() -> DropdownResult<Option<DropdownSettings>> {
    let Some(path) = user_config_path() else {
        return Ok(None);
    };

    if !path.exists() {
        log::debug!(
            target: "test_name_dropdown::config",
            "No user config at {}",
            path.display()
        );
        return Ok(None);
    }

    load_settings_file(&path).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn user_config_path_uses_xdg_config_home_when_set() {
        let original = env::var("XDG_CONFIG_HOME").ok();

        // SAFETY: env manipulation is confined to this test and restored below
        unsafe {
            env::set_var("XDG_CONFIG_HOME", "/custom/config");
        }

        let path = user_config_path();

        // SAFETY: restoring original env state
        unsafe {
            match original {
                Some(val) => env::set_var("XDG_CONFIG_HOME", val),
                None => env::remove_var("XDG_CONFIG_HOME"),
            }
        }

        assert_eq!(
            path,
            Some(PathBuf::from(
                "/custom/config/test-name-dropdown/test-name-dropdown.toml"
            )),
            "should use XDG_CONFIG_HOME/test-name-dropdown/test-name-dropdown.toml"
        );
    }

    #[test]
    fn load_settings_file_parses_partial_settings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(
            &path,
            "endpoint = \"http://localhost:8080/listing\"\nfilter = \".py\"\n",
        )
        .unwrap();

        let settings = load_settings_file(&path).unwrap();
        assert_eq!(
            settings.endpoint.as_deref(),
            Some("http://localhost:8080/listing")
        );
        assert_eq!(settings.filter.as_deref(), Some(".py"));
        assert!(settings.marker.is_none());
    }

    #[test]
    fn load_settings_file_rejects_unknown_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "endpont = \"typo\"\n").unwrap();

        let err = load_settings_file(&path).unwrap_err();
        assert!(matches!(err, DropdownError::ConfigParse { .. }));
    }

    #[test]
    fn load_settings_file_reports_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_settings_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, DropdownError::ConfigRead { .. }));
    }
}
