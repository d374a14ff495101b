//! Show or create the configuration file

use macsep::config::Config;
use macsep::output::{OperationResult, OutputMode};

use crate::cli::app::ConfigAction;

/// Run a `config` subcommand
pub fn config(action: ConfigAction, current: &Config, mode: OutputMode) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            if mode == OutputMode::Json {
                println!("{}", serde_json::to_string_pretty(current)?);
            } else {
                print!("{}", toml::to_string_pretty(current)?);
            }
        },
        ConfigAction::Path => {
            let path = Config::config_path();
            if mode == OutputMode::Json {
                println!("{}", serde_json::json!({ "path": path }));
            } else {
                println!("{}", path.display());
            }
        },
        ConfigAction::Init { force } => {
            let path = Config::config_path();
            let result = if path.exists() && !force {
                OperationResult {
                    success: false,
                    message: format!(
                        "Config already exists at {}. Use --force to overwrite.",
                        path.display()
                    ),
                }
            } else {
                Config::default().save()?;
                OperationResult {
                    success: true,
                    message: format!("Wrote default config to {}", path.display()),
                }
            };
            result.render(mode);
        },
    }
    Ok(())
}
