//! Configuration types for Stock Consultant
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `LatencySettings` - Delays applied by the simulated backends
//! - Related sub-types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub latency: LatencySettings,

    #[serde(default)]
    pub downloads: DownloadSettings,
}

impl Settings {
    /// Settings with every simulated delay removed
    pub fn instant() -> Self {
        Self {
            latency: LatencySettings::instant(),
            ..Self::default()
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Start in dark mode
    #[serde(default)]
    pub dark_mode: bool,
}

/// Simulated backend delays, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct LatencySettings {
    /// Initial session check
    #[serde(default = "default_bootstrap_ms")]
    pub bootstrap_ms: u64,

    /// Sign-in and sign-up
    #[serde(default = "default_auth_ms")]
    pub auth_ms: u64,

    /// Sending a password-reset email
    #[serde(default = "default_reset_password_ms")]
    pub reset_password_ms: u64,

    /// Setting a new password (reset or change)
    #[serde(default = "default_password_update_ms")]
    pub password_update_ms: u64,

    /// Quiet period before a stock search runs
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,

    /// Portfolio analysis
    #[serde(default = "default_analysis_ms")]
    pub analysis_ms: u64,

    /// Report generation before download
    #[serde(default = "default_report_ms")]
    pub report_ms: u64,

    /// Payment processing
    #[serde(default = "default_payment_ms")]
    pub payment_ms: u64,
}

impl LatencySettings {
    pub fn instant() -> Self {
        Self {
            bootstrap_ms: 0,
            auth_ms: 0,
            reset_password_ms: 0,
            password_update_ms: 0,
            search_debounce_ms: 0,
            analysis_ms: 0,
            report_ms: 0,
            payment_ms: 0,
        }
    }

    pub fn bootstrap(&self) -> Duration {
        Duration::from_millis(self.bootstrap_ms)
    }

    pub fn auth(&self) -> Duration {
        Duration::from_millis(self.auth_ms)
    }

    pub fn reset_password(&self) -> Duration {
        Duration::from_millis(self.reset_password_ms)
    }

    pub fn password_update(&self) -> Duration {
        Duration::from_millis(self.password_update_ms)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn analysis(&self) -> Duration {
        Duration::from_millis(self.analysis_ms)
    }

    pub fn report(&self) -> Duration {
        Duration::from_millis(self.report_ms)
    }

    pub fn payment(&self) -> Duration {
        Duration::from_millis(self.payment_ms)
    }
}

impl Default for LatencySettings {
    fn default() -> Self {
        Self {
            bootstrap_ms: default_bootstrap_ms(),
            auth_ms: default_auth_ms(),
            reset_password_ms: default_reset_password_ms(),
            password_update_ms: default_password_update_ms(),
            search_debounce_ms: default_search_debounce_ms(),
            analysis_ms: default_analysis_ms(),
            report_ms: default_report_ms(),
            payment_ms: default_payment_ms(),
        }
    }
}

fn default_bootstrap_ms() -> u64 {
    1000
}

fn default_auth_ms() -> u64 {
    1500
}

fn default_reset_password_ms() -> u64 {
    1000
}

fn default_password_update_ms() -> u64 {
    1500
}

fn default_search_debounce_ms() -> u64 {
    500
}

fn default_analysis_ms() -> u64 {
    3000
}

fn default_report_ms() -> u64 {
    2000
}

fn default_payment_ms() -> u64 {
    3000
}

/// Where generated reports and receipts are written
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DownloadSettings {
    /// Target directory; the platform download directory when unset
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl DownloadSettings {
    /// Resolve the effective download directory
    pub fn resolve_dir(&self) -> PathBuf {
        self.directory
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
