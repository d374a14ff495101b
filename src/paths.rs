//! Centralized path definitions for macsep
//!
//! ## Layout
//!
//! ```text
//! ~/.macsep/
//! └── config.toml               # Report header, output preferences
//! ```
//!
//! Set `MACSEP_CONFIG_DIR` to use another directory.

use std::env;
use std::path::PathBuf;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "MACSEP_CONFIG_DIR";

/// Default config directory name under the home directory
const CONFIG_DIR: &str = ".macsep";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Get the macsep config directory.
///
/// Returns `$MACSEP_CONFIG_DIR` when set and non-empty, `~/.macsep/`
/// otherwise.
#[must_use]
pub fn config_dir() -> PathBuf {
    match env::var_os(CONFIG_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(CONFIG_DIR),
    }
}

/// Get the config file path.
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}
