use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Collect the regular files under `root`.
///
/// Entries are visited in file-name order and subdirectories are walked
/// depth-first at the position they sort to, so the result is stable for a
/// given directory snapshot. Symlinks are never followed or collected, and
/// special files (sockets, FIFOs, devices) are skipped. Hidden entries are
/// skipped unless `include_hidden` is set; a hidden directory is not descended.
pub(crate) fn collect_files(
    root: &Path,
    recursive: bool,
    include_hidden: bool,
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    walk(root, recursive, include_hidden, &mut files)?;
    Ok(files)
}

fn walk(dir: &Path, recursive: bool, include_hidden: bool, files: &mut Vec<PathBuf>) -> Result<()> {
    let context = || Some(format!("read directory {}", dir.display()));

    let mut entries = fs::read_dir(dir)
        .and_then(|entries| entries.collect::<std::io::Result<Vec<_>>>())
        .map_err(|e| Error::internal_io(e.to_string(), context()))?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        if !include_hidden && is_hidden(&entry.file_name()) {
            continue;
        }

        // DirEntry::file_type does not traverse symlinks
        let file_type = entry
            .file_type()
            .map_err(|e| Error::internal_io(e.to_string(), context()))?;

        if file_type.is_file() {
            files.push(entry.path());
        } else if file_type.is_dir() && recursive {
            walk(&entry.path(), recursive, include_hidden, files)?;
        }
    }

    Ok(())
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}
