use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use commands::{config, randomize, GlobalArgs};
use filename_randomizer::output;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "filename-randomizer")]
#[command(version = VERSION)]
#[command(about = "Rename every file in a directory to a random hex name")]
struct Cli {
    /// Read default options from this file instead of the per-user config.json
    #[arg(long, global = true, value_name = "PATH")]
    config_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rename files to random names (use --dry-run to preview)
    Randomize(randomize::RandomizeArgs),
    /// Inspect the defaults file
    Config(config::ConfigArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let global = GlobalArgs {
        config_file: cli.config_file,
    };

    let (json_result, exit_code) = commands::run_json(cli.command, &global);

    if let Err(err) = output::print_json_result(json_result) {
        eprintln!("{}", err);
        return std::process::ExitCode::from(1);
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
