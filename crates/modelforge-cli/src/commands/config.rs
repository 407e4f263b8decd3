//! `modelforge config`: inspect the effective configuration.

use std::path::Path;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    explicit: Option<&Path>,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            output.data(&get_config_value(&config, &key)?)?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).with_cli_context(|| "Failed to serialise config")?;
            output.data(&serialised)?;
        }

        ConfigCommands::Path => {
            output.data(&AppConfig::active_path(explicit).display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Look up a dotted key in the effective config.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let value = match key {
        "defaults.database" => config.defaults.database.clone(),
        "defaults.font_family" => config.defaults.font_family.clone(),
        "defaults.primary_color" => config.defaults.primary_color.clone(),
        "output.no_color" => config.output.no_color.to_string(),
        "output.tree_format" => match config.output.tree_format {
            crate::cli::TreeFormat::Tree => "tree".into(),
            crate::cli::TreeFormat::Json => "json".into(),
        },
        "export.output_dir" => config.export.output_dir.display().to_string(),
        "export.force" => config.export.force.to_string(),
        _ => {
            return Err(CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            });
        }
    };
    Ok(value)
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_keys() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "defaults.database").unwrap(), "postgresql");
        assert_eq!(get_config_value(&cfg, "output.tree_format").unwrap(), "tree");
        assert_eq!(get_config_value(&cfg, "export.output_dir").unwrap(), "generated");
        assert_eq!(get_config_value(&cfg, "export.force").unwrap(), "false");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }
}
