use crate::error::{Error, Result};
use crate::utils::io;
use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::Path;

/// Parse JSON string into typed value.
pub(crate) fn from_str<T: DeserializeOwned>(s: &str, context: &str) -> Result<T> {
    serde_json::from_str(s).map_err(|e| Error::validation_invalid_json(e, Some(context.to_string())))
}

/// Read JSON spec from string, file (@path), or stdin (-).
pub(crate) fn read_json_spec_to_string(spec: &str) -> Result<String> {
    use std::io::IsTerminal;

    if spec.trim() == "-" {
        let mut buf = String::new();
        let mut stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(Error::validation_invalid_argument(
                "json",
                "Cannot read JSON from stdin when stdin is a TTY",
                None,
            ));
        }
        stdin
            .read_to_string(&mut buf)
            .map_err(|e| Error::internal_io(e.to_string(), Some("read stdin".to_string())))?;
        return Ok(buf);
    }

    if let Some(path) = spec.strip_prefix('@') {
        if path.trim().is_empty() {
            return Err(Error::validation_invalid_argument(
                "json",
                "Invalid JSON spec '@' (missing file path)",
                None,
            ));
        }

        return io::read_file(Path::new(path), &format!("read {}", path));
    }

    Ok(spec.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn inline_spec_is_returned_verbatim() {
        let raw = read_json_spec_to_string(r#"{"length": 4}"#).unwrap();
        assert_eq!(raw, r#"{"length": 4}"#);
    }

    #[test]
    fn at_prefix_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("opts.json");
        std::fs::write(&path, r#"{"recursive": true}"#).unwrap();

        let raw = read_json_spec_to_string(&format!("@{}", path.display())).unwrap();
        assert_eq!(raw, r#"{"recursive": true}"#);
    }

    #[test]
    fn bare_at_is_rejected() {
        let err = read_json_spec_to_string("@").unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_argument");
    }

    #[test]
    fn from_str_reports_invalid_json() {
        let err = from_str::<HashMap<String, bool>>("{nope", "parse options").unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_json");
        assert_eq!(err.details["context"], "parse options");
    }
}
