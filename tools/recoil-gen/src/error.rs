//! Error types for the recoil table compiler

use std::path::PathBuf;

/// Result alias used throughout the library
pub type Result<T, E = RecoilError> = std::result::Result<T, E>;

/// Everything that can stop a header from being generated
#[derive(Debug, thiserror::Error)]
pub enum RecoilError {
    /// Input JSON missing or unreadable
    #[error("failed to read recoil specs from {}", .path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not valid JSON
    #[error("recoil specs are not valid JSON")]
    MalformedInput(#[source] serde_json::Error),

    /// Top-level JSON value is something other than an array
    #[error("recoil specs must be a JSON array, found {found}")]
    NotAnArray { found: &'static str },

    /// A profile is missing a field, has a mistyped field, or has no magazines
    #[error("recoil profile #{index}{}: {reason}", name_suffix(.name))]
    SchemaViolation {
        index: usize,
        name: Option<String>,
        reason: String,
    },

    /// The array contains no profiles, so there is no max length
    #[error("recoil specs contain no profiles")]
    EmptyTable,

    /// Destination header could not be written
    #[error("failed to write header to {}", .path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Echoing the header to the console failed
    #[error("failed to write to console")]
    Console(#[source] std::io::Error),

    /// Formatting into the header buffer failed
    #[error("failed to render header")]
    Render(#[from] std::fmt::Error),
}

fn name_suffix(name: &Option<String>) -> String {
    match name {
        Some(name) => format!(" ({name})"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_violation_message_includes_name_when_known() {
        let err = RecoilError::SchemaViolation {
            index: 2,
            name: Some("AK".to_string()),
            reason: "mags is empty".to_string(),
        };
        assert_eq!(err.to_string(), "recoil profile #2 (AK): mags is empty");

        let err = RecoilError::SchemaViolation {
            index: 0,
            name: None,
            reason: "missing field `name`".to_string(),
        };
        assert_eq!(err.to_string(), "recoil profile #0: missing field `name`");
    }
}
