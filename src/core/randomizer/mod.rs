//! Randomizer engine: give every file in a directory a random hex name.
//!
//! A run is a linear pipeline:
//! 1. Validate the options and the target directory
//! 2. Collect regular files (top level, or the whole subtree)
//! 3. Draw a collision-free random name for each file
//! 4. Rename in place, or only record the plan in dry-run mode

mod collect;
mod names;

use crate::error::{Error, Result};
use crate::local_files::{self, FileSystem};
use crate::utils::path;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Types
// ============================================================================

pub const DEFAULT_NAME_LENGTH: usize = 8;

/// Longest name length whose hex form (254 chars) fits a 255-byte filename.
pub const MAX_NAME_LENGTH: usize = 127;

/// Draws per file before giving up on finding a free name.
pub const MAX_NAME_ATTEMPTS: usize = 1000;

/// How a directory gets randomized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomizeOptions {
    /// Walk subdirectories too.
    pub recursive: bool,
    /// Plan the renames without touching the filesystem.
    pub dry_run: bool,
    /// Carry the original extension over to the new name.
    pub preserve_extensions: bool,
    /// Include entries whose name starts with `.`.
    pub include_hidden: bool,
    /// Random bytes per name; the hex base name is twice as long.
    #[serde(alias = "name_length")]
    pub length: usize,
}

impl Default for RandomizeOptions {
    fn default() -> Self {
        Self {
            recursive: false,
            dry_run: false,
            preserve_extensions: true,
            include_hidden: false,
            length: DEFAULT_NAME_LENGTH,
        }
    }
}

impl RandomizeOptions {
    pub fn validate(&self) -> Result<()> {
        if self.length == 0 || self.length > MAX_NAME_LENGTH {
            return Err(Error::validation_invalid_argument(
                "length",
                format!("Name length must be between 1 and {} bytes", MAX_NAME_LENGTH),
                Some(self.length.to_string()),
            ));
        }
        Ok(())
    }
}

/// One file's old and new location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRecord {
    pub old_path: PathBuf,
    pub new_path: PathBuf,
}

/// Renames the files of one directory.
#[derive(Debug, Clone)]
pub struct Renamer {
    directory: PathBuf,
    options: RandomizeOptions,
}

// ============================================================================
// Renamer
// ============================================================================

impl Renamer {
    /// Resolve `directory` to an absolute path. The directory is only checked
    /// when a run starts.
    pub fn new(directory: impl AsRef<Path>, options: RandomizeOptions) -> Result<Self> {
        Ok(Self {
            directory: path::resolve_absolute(directory.as_ref())?,
            options,
        })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn options(&self) -> &RandomizeOptions {
        &self.options
    }

    /// Randomize using the OS random source and the local filesystem.
    pub fn randomize(&self) -> Result<Vec<RenameRecord>> {
        self.randomize_with(&mut OsRng, &local_files::local())
    }

    /// Randomize with an explicit random source and filesystem.
    ///
    /// On failure nothing is rolled back. The error details list the renames
    /// that completed before it under `completed`.
    pub fn randomize_with<R, F>(&self, rng: &mut R, fs: &F) -> Result<Vec<RenameRecord>>
    where
        R: RngCore + ?Sized,
        F: FileSystem + ?Sized,
    {
        self.validate()?;

        let files = self.collect_files()?;
        if files.is_empty() {
            log_status!("randomize", "No files found in {}", self.directory.display());
            return Ok(Vec::new());
        }

        log_status!("randomize", "Found {} file(s) to randomize", files.len());
        if self.options.dry_run {
            log_status!("randomize", "Running in DRY RUN mode - no files will be renamed");
        }

        let mut records: Vec<RenameRecord> = Vec::with_capacity(files.len());
        // Dry runs move nothing, so names planned earlier in the run are tracked here.
        let mut planned: HashSet<PathBuf> = HashSet::new();

        for old_path in files {
            let new_path = self.choose_new_path(&old_path, rng, fs, &planned, &records)?;

            if self.options.dry_run {
                log_status!(
                    "randomize",
                    "Would rename: {} -> {}",
                    old_path.display(),
                    new_path.display()
                );
                planned.insert(new_path.clone());
            } else {
                fs.rename(&old_path, &new_path).map_err(|e| {
                    Error::rename_failed(
                        old_path.display().to_string(),
                        new_path.display().to_string(),
                        &e,
                        &records,
                    )
                })?;
                log_status!(
                    "randomize",
                    "Renamed: {} -> {}",
                    display_name(&old_path),
                    display_name(&new_path)
                );
            }

            records.push(RenameRecord { old_path, new_path });
        }

        Ok(records)
    }

    /// Files a run would process, in processing order.
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        collect::collect_files(
            &self.directory,
            self.options.recursive,
            self.options.include_hidden,
        )
    }

    /// Draw one random replacement name for `original`.
    pub fn generate_name<R: RngCore + ?Sized>(&self, original: &OsStr, rng: &mut R) -> Result<OsString> {
        names::generate_name(original, &self.options, rng)
    }

    fn validate(&self) -> Result<()> {
        self.options.validate()?;

        let display = self.directory.display().to_string();
        match fs::metadata(&self.directory) {
            Ok(metadata) if metadata.is_dir() => Ok(()),
            Ok(_) => Err(Error::not_a_directory(display)),
            Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => Err(
                Error::internal_io(e.to_string(), Some(format!("inspect {}", display))),
            ),
            Err(_) => Err(Error::directory_not_found(display)),
        }
    }

    fn choose_new_path<R, F>(
        &self,
        old_path: &Path,
        rng: &mut R,
        fs: &F,
        planned: &HashSet<PathBuf>,
        completed: &[RenameRecord],
    ) -> Result<PathBuf>
    where
        R: RngCore + ?Sized,
        F: FileSystem + ?Sized,
    {
        let parent = old_path.parent().unwrap_or(&self.directory);
        let original = old_path.file_name().unwrap_or_default();

        for _ in 0..MAX_NAME_ATTEMPTS {
            let candidate = parent.join(self.generate_name(original, rng)?);
            if !fs.exists(&candidate) && !planned.contains(&candidate) {
                return Ok(candidate);
            }
        }

        Err(Error::collision_retry_exhausted(
            old_path.display().to_string(),
            parent.display().to_string(),
            MAX_NAME_ATTEMPTS,
            completed,
        ))
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

// ============================================================================
// Tests
// ============================================================================
