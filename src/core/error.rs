use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::randomizer::RenameRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigInvalidJson,
    ConfigInvalidValue,

    ValidationInvalidArgument,
    ValidationInvalidJson,

    DirectoryNotFound,
    NotADirectory,

    RenameFailed,
    CollisionRetryExhausted,

    InternalIoError,
    InternalJsonError,
    InternalUnexpected,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ConfigInvalidJson => "config.invalid_json",
            ErrorCode::ConfigInvalidValue => "config.invalid_value",

            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",
            ErrorCode::ValidationInvalidJson => "validation.invalid_json",

            ErrorCode::DirectoryNotFound => "target.directory_not_found",
            ErrorCode::NotADirectory => "target.not_a_directory",

            ErrorCode::RenameFailed => "rename.failed",
            ErrorCode::CollisionRetryExhausted => "rename.collision_retry_exhausted",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
            ErrorCode::InternalUnexpected => "internal.unexpected",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInvalidJsonDetails {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInvalidValueDetails {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub problem: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetDetails {
    pub path: String,
}

/// A rename that finished before the run stopped.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedRename {
    pub old_path: String,
    pub new_path: String,
}

impl From<&RenameRecord> for CompletedRename {
    fn from(record: &RenameRecord) -> Self {
        Self {
            old_path: record.old_path.to_string_lossy().to_string(),
            new_path: record.new_path.to_string_lossy().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameFailedDetails {
    pub old_path: String,
    pub new_path: String,
    pub error: String,
    pub completed: Vec<CompletedRename>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollisionRetryExhaustedDetails {
    pub old_path: String,
    pub directory: String,
    pub attempts: usize,
    pub completed: Vec<CompletedRename>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalJsonErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
    pub retryable: Option<bool>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

fn to_details<T: Serialize>(details: T) -> Value {
    serde_json::to_value(details).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
            retryable: None,
        }
    }

    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        let details = to_details(InvalidArgumentDetails {
            field: field.into(),
            problem: problem.into(),
            value,
        });

        Self::new(
            ErrorCode::ValidationInvalidArgument,
            "Invalid argument",
            details,
        )
    }

    pub fn validation_invalid_json(err: serde_json::Error, context: Option<String>) -> Self {
        let details = serde_json::json!({
            "error": err.to_string(),
            "context": context,
        });

        Self::new(ErrorCode::ValidationInvalidJson, "Invalid JSON", details)
    }

    pub fn config_invalid_json(path: impl Into<String>, err: serde_json::Error) -> Self {
        let details = to_details(ConfigInvalidJsonDetails {
            path: path.into(),
            error: err.to_string(),
        });

        Self::new(
            ErrorCode::ConfigInvalidJson,
            "Invalid JSON in configuration",
            details,
        )
    }

    pub fn config_invalid_value(
        key: impl Into<String>,
        value: Option<String>,
        problem: impl Into<String>,
    ) -> Self {
        let details = to_details(ConfigInvalidValueDetails {
            key: key.into(),
            value,
            problem: problem.into(),
        });

        Self::new(
            ErrorCode::ConfigInvalidValue,
            "Invalid configuration value",
            details,
        )
    }

    pub fn directory_not_found(path: impl Into<String>) -> Self {
        let path = path.into();
        Self::new(
            ErrorCode::DirectoryNotFound,
            format!("Directory does not exist: {}", path),
            to_details(TargetDetails { path }),
        )
        .with_hint("Check the path, or pass an absolute path to the directory")
    }

    pub fn not_a_directory(path: impl Into<String>) -> Self {
        let path = path.into();
        Self::new(
            ErrorCode::NotADirectory,
            format!("Path is not a directory: {}", path),
            to_details(TargetDetails { path }),
        )
    }

    pub fn rename_failed(
        old_path: impl Into<String>,
        new_path: impl Into<String>,
        cause: &std::io::Error,
        completed: &[RenameRecord],
    ) -> Self {
        let old_path = old_path.into();
        let message = format!("Failed to rename {}: {}", old_path, cause);
        let details = to_details(RenameFailedDetails {
            old_path,
            new_path: new_path.into(),
            error: cause.to_string(),
            completed: completed.iter().map(CompletedRename::from).collect(),
        });

        let mut err = Self::new(ErrorCode::RenameFailed, message, details);
        if !completed.is_empty() {
            err = err.with_hint(format!(
                "{} file(s) were renamed before the failure and keep their new names",
                completed.len()
            ));
        }
        err
    }

    pub fn collision_retry_exhausted(
        old_path: impl Into<String>,
        directory: impl Into<String>,
        attempts: usize,
        completed: &[RenameRecord],
    ) -> Self {
        let old_path = old_path.into();
        let message = format!(
            "No free name found for {} after {} attempts",
            old_path, attempts
        );
        let details = to_details(CollisionRetryExhaustedDetails {
            old_path,
            directory: directory.into(),
            attempts,
            completed: completed.iter().map(CompletedRename::from).collect(),
        });

        Self::new(ErrorCode::CollisionRetryExhausted, message, details)
            .with_hint("Increase --length to widen the name space")
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let details = to_details(InternalIoErrorDetails {
            error: error.into(),
            context,
        });

        Self::new(ErrorCode::InternalIoError, "IO error", details)
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        let details = to_details(InternalJsonErrorDetails {
            error: error.into(),
            context,
        });

        Self::new(ErrorCode::InternalJsonError, "JSON error", details)
    }

    pub fn internal_unexpected(error: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InternalUnexpected,
            "Unexpected error",
            serde_json::json!({ "error": error.into() }),
        )
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}
