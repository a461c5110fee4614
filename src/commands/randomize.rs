use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use filename_randomizer::defaults::{self, OptionOverrides};
use filename_randomizer::{RandomizeOptions, RenameRecord, Renamer};

use crate::commands::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct RandomizeArgs {
    /// Directory whose files get random names
    pub directory: PathBuf,

    /// Process files in subdirectories as well
    #[arg(short, long)]
    pub recursive: bool,

    /// Show what would be renamed without renaming anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Drop file extensions from the new names
    #[arg(long)]
    pub no_preserve_extensions: bool,

    /// Also rename hidden files (names starting with '.')
    #[arg(long)]
    pub include_hidden: bool,

    /// Random bytes per name; the hex name is twice as long (default: 8)
    #[arg(short, long, value_name = "BYTES")]
    pub length: Option<usize>,

    /// Options as JSON (inline, @file, or - for stdin); flags take precedence
    #[arg(long, value_name = "JSON")]
    pub json: Option<String>,
}

impl RandomizeArgs {
    /// Flags only override when given, so unset flags never mask file or JSON values.
    fn flag_overrides(&self) -> OptionOverrides {
        OptionOverrides {
            recursive: self.recursive.then_some(true),
            dry_run: self.dry_run.then_some(true),
            preserve_extensions: self.no_preserve_extensions.then_some(false),
            include_hidden: self.include_hidden.then_some(true),
            length: self.length,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "command")]
pub enum RandomizeOutput {
    #[serde(rename = "randomize")]
    Randomize {
        directory: String,
        options: RandomizeOptions,
        total_files: usize,
        renames: Vec<RenameSummary>,
        applied: bool,
    },
}

#[derive(Debug, Serialize)]
pub struct RenameSummary {
    pub old: String,
    pub new: String,
}

impl From<&RenameRecord> for RenameSummary {
    fn from(record: &RenameRecord) -> Self {
        Self {
            old: record.old_path.to_string_lossy().to_string(),
            new: record.new_path.to_string_lossy().to_string(),
        }
    }
}

pub fn run(args: RandomizeArgs, global: &GlobalArgs) -> CmdResult<RandomizeOutput> {
    let loaded = defaults::load(global.config_file.as_deref())?;

    let mut overrides = loaded.config.defaults.clone();
    if let Some(spec) = args.json.as_deref() {
        overrides = overrides.merge(defaults::parse_overrides(spec)?);
    }
    overrides = overrides.merge(args.flag_overrides());

    let options = overrides.apply_to(RandomizeOptions::default());
    let renamer = Renamer::new(&args.directory, options)?;
    let records = renamer.randomize()?;

    Ok((
        RandomizeOutput::Randomize {
            directory: renamer.directory().to_string_lossy().to_string(),
            options,
            total_files: records.len(),
            renames: records.iter().map(RenameSummary::from).collect(),
            applied: !options.dry_run && !records.is_empty(),
        },
        0,
    ))
}
