//! User configuration
//!
//! Stored at `~/.macsep/config.toml` (see [`paths`](crate::paths)). A missing
//! or unreadable file means defaults.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::services::{ReportOptions, is_valid_format};
use crate::paths;

/// macsep configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Report header
    #[serde(default)]
    pub report: ReportConfig,
    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
}

/// Report header settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// First line of the report
    #[serde(default = "default_title")]
    pub title: String,
    /// chrono format string for the date line
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// chrono format string for the time line
    #[serde(default = "default_time_format")]
    pub time_format: String,
}

fn default_title() -> String {
    ReportOptions::default().title
}

fn default_date_format() -> String {
    ReportOptions::default().date_format
}

fn default_time_format() -> String {
    ReportOptions::default().time_format
}

impl ReportConfig {
    /// Replace date or time formats that cannot render with the defaults
    fn check_formats(&mut self) {
        if !is_valid_format(&self.date_format) {
            log::warn!("Invalid report date_format {:?}, using the default", self.date_format);
            self.date_format = default_date_format();
        }
        if !is_valid_format(&self.time_format) {
            log::warn!("Invalid report time_format {:?}, using the default", self.time_format);
            self.time_format = default_time_format();
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            date_format: default_date_format(),
            time_format: default_time_format(),
        }
    }
}

/// Output preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Emit JSON without `--json`
    #[serde(default)]
    pub json: bool,
    /// Unmatched MACs listed in the human summary before "... and N more"
    #[serde(default = "default_preview_limit")]
    pub preview_limit: usize,
}

const fn default_preview_limit() -> usize {
    5
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json: false,
            preview_limit: default_preview_limit(),
        }
    }
}

impl Config {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::config_file()
    }

    /// Load config from disk, or defaults if it is missing or malformed
    ///
    /// Report formats that cannot render fall back to their defaults.
    #[must_use]
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }
        let parsed = fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|content| toml::from_str::<Self>(&content).map_err(|e| e.to_string()));
        match parsed {
            Ok(mut config) => {
                config.report.check_formats();
                config
            },
            Err(e) => {
                log::warn!("Ignoring {}: {e}", path.display());
                Self::default()
            },
        }
    }

    /// Save config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        fs::create_dir_all(paths::config_dir())?;
        let content = toml::to_string_pretty(self)?;
        fs::write(Self::config_path(), content)?;
        Ok(())
    }

    /// Report header as the renderer takes it
    #[must_use]
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            title: self.report.title.clone(),
            date_format: self.report.date_format.clone(),
            time_format: self.report.time_format.clone(),
        }
    }
}
