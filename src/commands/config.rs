use clap::{Args, Subcommand};
use serde::Serialize;

use filename_randomizer::defaults::{self, OptionOverrides};
use filename_randomizer::RandomizeOptions;

use crate::commands::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show the defaults file contents and the options they produce
    Show,
    /// Print where the defaults file is read from
    Path,
}

#[derive(Debug, Serialize)]
#[serde(tag = "command")]
pub enum ConfigOutput {
    #[serde(rename = "config.show")]
    Show {
        path: String,
        exists: bool,
        defaults: OptionOverrides,
        effective: RandomizeOptions,
    },
    #[serde(rename = "config.path")]
    Path { path: String, exists: bool },
}

pub fn run(args: ConfigArgs, global: &GlobalArgs) -> CmdResult<ConfigOutput> {
    match args.command {
        ConfigCommand::Show => show(global),
        ConfigCommand::Path => path(global),
    }
}

fn show(global: &GlobalArgs) -> CmdResult<ConfigOutput> {
    let loaded = defaults::load(global.config_file.as_deref())?;
    let effective = loaded.effective_options();

    Ok((
        ConfigOutput::Show {
            path: loaded.path.to_string_lossy().to_string(),
            exists: loaded.exists,
            defaults: loaded.config.defaults,
            effective,
        },
        0,
    ))
}

fn path(global: &GlobalArgs) -> CmdResult<ConfigOutput> {
    let path = defaults::config_path(global.config_file.as_deref())?;

    Ok((
        ConfigOutput::Path {
            exists: path.is_file(),
            path: path.to_string_lossy().to_string(),
        },
        0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_reports_file_layer_and_effective_options() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("config.json");
        std::fs::write(&file, r#"{"defaults": {"preserve_extensions": false}}"#).unwrap();
        let global = GlobalArgs {
            config_file: Some(file),
        };

        let (output, _) = show(&global).unwrap();
        let value = serde_json::to_value(output).unwrap();

        assert_eq!(value["command"], "config.show");
        assert_eq!(value["exists"], true);
        assert_eq!(value["defaults"], serde_json::json!({"preserve_extensions": false}));
        assert_eq!(value["effective"]["preserve_extensions"], false);
        assert_eq!(value["effective"]["length"], 8);
    }

    #[test]
    fn path_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let global = GlobalArgs {
            config_file: Some(dir.path().join("none.json")),
        };

        let (output, _) = path(&global).unwrap();
        let value = serde_json::to_value(output).unwrap();

        assert_eq!(value["exists"], false);
    }
}
