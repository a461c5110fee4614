use std::path::PathBuf;

use filename_randomizer::output::map_cmd_result_to_json;

pub type CmdResult<T> = filename_randomizer::Result<(T, i32)>;

pub(crate) struct GlobalArgs {
    /// Defaults file to read instead of the per-user one.
    pub config_file: Option<PathBuf>,
}

pub mod config;
pub mod randomize;

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (filename_randomizer::Result<serde_json::Value>, i32) {
    match command {
        crate::Commands::Randomize(args) => map_cmd_result_to_json(randomize::run(args, global)),
        crate::Commands::Config(args) => map_cmd_result_to_json(config::run(args, global)),
    }
}
