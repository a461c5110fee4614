//! Path resolution helpers.

use crate::error::{Error, Result};
use std::env;
use std::path::{Component, Path, PathBuf};

/// Resolve a user-supplied path to an absolute, normalized path.
///
/// Expands a leading `~`, anchors relative paths at the current working
/// directory, and folds `.` and `..` lexically. Nothing on disk is inspected,
/// so the path does not have to exist.
pub fn resolve_absolute(input: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(input);
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        let cwd = env::current_dir().map_err(|e| {
            Error::internal_io(e.to_string(), Some("resolve working directory".to_string()))
        })?;
        cwd.join(expanded)
    };

    Ok(normalize(&absolute))
}

fn expand_tilde(input: &Path) -> PathBuf {
    match input.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => input.to_path_buf(),
    }
}

/// Lexically remove `.` segments and resolve `..` against the preceding segment.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            // `..` at the root stays at the root
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_folds_dot_segments() {
        assert_eq!(
            normalize(Path::new("/data/photos/../music/./albums")),
            PathBuf::from("/data/music/albums")
        );
    }

    #[test]
    fn normalize_does_not_climb_above_root() {
        assert_eq!(normalize(Path::new("/../../tmp")), PathBuf::from("/tmp"));
    }

    #[test]
    fn normalize_drops_trailing_separator() {
        assert_eq!(normalize(Path::new("/tmp/dir/")), PathBuf::from("/tmp/dir"));
    }

    #[test]
    fn resolve_absolute_anchors_relative_paths_at_cwd() {
        let cwd = env::current_dir().unwrap();
        let resolved = resolve_absolute(Path::new("some/./nested/../dir")).unwrap();

        assert!(resolved.is_absolute());
        assert_eq!(resolved, normalize(&cwd.join("some/dir")));
    }

    #[test]
    fn resolve_absolute_keeps_absolute_paths() {
        let resolved = resolve_absolute(Path::new("/var/tmp/../log")).unwrap();
        assert_eq!(resolved, PathBuf::from("/var/log"));
    }
}
