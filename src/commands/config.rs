//! Config command - show the configuration file and its contents

use crate::TagcalcError;
use crate::cli::ConfigCommands;
use crate::config::TagcalcConfig;
use crate::ui::OutputWriter;
use std::path::Path;

type Result<T> = std::result::Result<T, TagcalcError>;

/// Execute the config command
///
/// `path` is the file the configuration was loaded from.
///
/// # Errors
/// Returns an error if the configuration cannot be rendered as TOML.
pub fn execute(
    config: &TagcalcConfig,
    path: &Path,
    command: &ConfigCommands,
    output: &dyn OutputWriter,
) -> Result<()> {
    match command {
        ConfigCommands::Path => {
            output.write(&path.display().to_string());
            if !path.exists() {
                output.warning("File does not exist; built-in defaults are in use");
            }
        }
        ConfigCommands::Show => {
            output.info(&format!("# {}", path.display()));
            output.write(config.to_toml()?.trim_end());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{BufferedWriter, MessageLevel};
    use tempfile::TempDir;

    #[test]
    fn test_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let output = BufferedWriter::new();

        let config = TagcalcConfig::default();
        execute(&config, &path, &ConfigCommands::Path, &output).unwrap();

        assert_eq!(
            output.lines(MessageLevel::Normal),
            [path.display().to_string()]
        );
        assert_eq!(output.lines(MessageLevel::Warning).len(), 1);
    }

    #[test]
    fn test_show_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let config = TagcalcConfig {
            message_ttl_secs: 9,
            ..TagcalcConfig::default()
        };
        let output = BufferedWriter::new();

        execute(&config, &path, &ConfigCommands::Show, &output).unwrap();

        let shown = output.lines(MessageLevel::Normal).join("\n");
        assert!(shown.contains("message_ttl_secs = 9"));
        assert!(shown.contains("[[catalog]]"));

        std::fs::write(&path, shown).unwrap();
        assert_eq!(TagcalcConfig::load_from(&path).unwrap(), config);
    }
}
