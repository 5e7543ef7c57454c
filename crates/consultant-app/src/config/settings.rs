//! Settings parser for config.toml

use super::types::Settings;
use consultant_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "stock-consultant";

/// Default config file location (`<config_dir>/stock-consultant/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`, or from the default location when `None`.
///
/// A missing or unreadable file yields defaults.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) => path,
            None => {
                debug!("No config directory on this platform, using defaults");
                return Settings::default();
            }
        },
    };

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config file at `path` unless one exists
pub fn init_config_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
        }
    }

    if path.exists() {
        debug!("Config file already present at {:?}", path);
        return Ok(());
    }

    let default_content = r#"# Stock Consultant Configuration

[ui]
dark_mode = false          # Start with the dark palette

[latency]
# Simulated backend delays in milliseconds (all zero with --fast)
bootstrap_ms = 1000
auth_ms = 1500
reset_password_ms = 1000
password_update_ms = 1500
search_debounce_ms = 500
analysis_ms = 3000
report_ms = 2000
payment_ms = 3000

[downloads]
# Where reports and receipts are written (defaults to the system Downloads folder)
# directory = "/path/to/downloads"
"#;
    std::fs::write(path, default_content)
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
    info!("Wrote default config to {:?}", path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_missing_file_uses_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(Some(&temp.path().join("config.toml")));

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        let config = r#"
[ui]
dark_mode = true

[latency]
auth_ms = 10
payment_ms = 20

[downloads]
directory = "/tmp/consultant"
"#;
        std::fs::write(&path, config).unwrap();

        let settings = load_settings(Some(&path));

        assert!(settings.ui.dark_mode);
        assert_eq!(settings.latency.auth_ms, 10);
        assert_eq!(settings.latency.payment_ms, 20);
        assert_eq!(settings.latency.report_ms, 2000);
        assert_eq!(
            settings.downloads.directory,
            Some(PathBuf::from("/tmp/consultant"))
        );
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[ui\ndark_mode = ").unwrap();

        let settings = load_settings(Some(&path));

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_init_config_file_round_trips_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        init_config_file(&path).unwrap();

        assert!(path.exists());
        assert_eq!(load_settings(Some(&path)), Settings::default());
    }

    #[test]
    fn test_init_config_file_keeps_existing() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[ui]\ndark_mode = true\n").unwrap();

        init_config_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "[ui]\ndark_mode = true\n");
    }
}
