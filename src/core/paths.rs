use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "filename-randomizer";

/// Base config directory (~/.config/filename-randomizer/ on Unix-like systems)
pub fn config_dir() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::internal_unexpected(
                "APPDATA environment variable not set on Windows".to_string(),
            )
        })?;
        Ok(PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::internal_unexpected(
                "HOME environment variable not set on Unix-like system".to_string(),
            )
        })?;
        Ok(PathBuf::from(home).join(".config").join(APP_DIR))
    }
}

/// Global defaults file path
pub fn config_json() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}
