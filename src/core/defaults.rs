use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::{json, paths};
use crate::error::{Error, Result};
use crate::randomizer::RandomizeOptions;
use crate::utils::io;

/// Root configuration structure for config.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RandomizerConfig {
    #[serde(default)]
    pub defaults: OptionOverrides,
}

/// Partial options. Unset fields fall through to the layer below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recursive: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preserve_extensions: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_hidden: Option<bool>,

    #[serde(default, alias = "name_length", skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
}

impl OptionOverrides {
    /// Layer `higher` on top of `self`; fields set in `higher` win.
    pub fn merge(self, higher: OptionOverrides) -> OptionOverrides {
        OptionOverrides {
            recursive: higher.recursive.or(self.recursive),
            dry_run: higher.dry_run.or(self.dry_run),
            preserve_extensions: higher.preserve_extensions.or(self.preserve_extensions),
            include_hidden: higher.include_hidden.or(self.include_hidden),
            length: higher.length.or(self.length),
        }
    }

    pub fn apply_to(&self, base: RandomizeOptions) -> RandomizeOptions {
        RandomizeOptions {
            recursive: self.recursive.unwrap_or(base.recursive),
            dry_run: self.dry_run.unwrap_or(base.dry_run),
            preserve_extensions: self.preserve_extensions.unwrap_or(base.preserve_extensions),
            include_hidden: self.include_hidden.unwrap_or(base.include_hidden),
            length: self.length.unwrap_or(base.length),
        }
    }
}

/// A config file together with where it was looked for.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub exists: bool,
    pub config: RandomizerConfig,
}

impl LoadedConfig {
    pub fn effective_options(&self) -> RandomizeOptions {
        self.config.defaults.apply_to(RandomizeOptions::default())
    }
}

/// Path of the defaults file, honoring an explicit override.
pub fn config_path(path_override: Option<&Path>) -> Result<PathBuf> {
    match path_override {
        Some(path) => Ok(path.to_path_buf()),
        None => paths::config_json(),
    }
}

/// Load the defaults file. A missing file yields built-in defaults.
pub fn load(path_override: Option<&Path>) -> Result<LoadedConfig> {
    load_from(&config_path(path_override)?)
}

pub fn load_from(path: &Path) -> Result<LoadedConfig> {
    let Some(content) = io::read_file_if_exists(path, "read config")? else {
        return Ok(LoadedConfig {
            path: path.to_path_buf(),
            exists: false,
            config: RandomizerConfig::default(),
        });
    };

    let config: RandomizerConfig = serde_json::from_str(&content)
        .map_err(|e| Error::config_invalid_json(path.display().to_string(), e))?;

    if let Some(length) = config.defaults.length {
        if length == 0 {
            return Err(Error::config_invalid_value(
                "defaults.length",
                Some(length.to_string()),
                "Name length must be at least 1",
            ));
        }
    }

    log_status!("config", "Loaded defaults from {}", path.display());

    Ok(LoadedConfig {
        path: path.to_path_buf(),
        exists: true,
        config,
    })
}

/// Parse an options spec (inline JSON, `@file`, or `-` for stdin).
pub fn parse_overrides(spec: &str) -> Result<OptionOverrides> {
    let raw = json::read_json_spec_to_string(spec)?;
    json::from_str(&raw, "parse options spec")
}
