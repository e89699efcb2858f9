//! The `postwright config` command for configuration management.

use clap::{Args, Subcommand};
use console::style;
use postwright_core::Config;

/// Arguments for the `config` command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Subcommands for configuration management.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display current configuration with secrets masked
    Show,

    /// Show config file path
    Path,

    /// Initialize a new config file with defaults
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Execute the config command.
pub async fn execute(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let config = Config::load()?;
            println!("{}", render(&config)?);
            for warning in unset_secret_warnings(&config) {
                eprintln!("{} {warning}", style("!").yellow().bold());
            }
        }

        ConfigCommand::Path => {
            println!("{}", Config::default_path().display());
        }

        ConfigCommand::Init { force } => {
            let path = Config::default_path();

            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at: {}\nUse --force to overwrite.",
                    path.display()
                );
            }

            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = Config::default().to_toml()?;
            std::fs::write(&path, toml)?;

            tracing::info!("Config file created at: {}", path.display());
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

/// TOML view of `config` that never shows a literal secret.
fn render(config: &Config) -> anyhow::Result<String> {
    Ok(config.redacted().to_toml()?)
}

/// One line per `${VAR}` reference that will fail to resolve at run time.
fn unset_secret_warnings(config: &Config) -> Vec<String> {
    config
        .unset_secrets()
        .into_iter()
        .map(|name| format!("{name} is referenced but not set; `post` and `caption` will fail."))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_masks_literal_api_key() {
        let mut config = Config::default();
        config.caption.api_key = "AIzaSy-do-not-print".to_string();

        let shown = render(&config).unwrap();
        assert!(!shown.contains("AIzaSy-do-not-print"));
        assert!(shown.contains("api_key"));
    }

    #[test]
    fn test_show_warns_about_unset_reference() {
        let mut config = Config::default();
        config.caption.api_key = "${POSTWRIGHT_UNSET_KEY_FOR_TESTS}".to_string();

        let warnings = unset_secret_warnings(&config);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("POSTWRIGHT_UNSET_KEY_FOR_TESTS"));
        assert!(render(&config)
            .unwrap()
            .contains("${POSTWRIGHT_UNSET_KEY_FOR_TESTS}"));
    }
}
