//! Structured error types for the ZenResume engine.
//!
//! The layout pipeline itself is total: it performs no I/O and cannot
//! fail. Errors only arise at the boundaries: parsing a document snapshot
//! and loading/saving one through a [`DocumentStore`](crate::store::DocumentStore).

use thiserror::Error;

/// The unified error type returned by all public API functions.
#[derive(Debug, Error)]
pub enum ResumeError {
    /// JSON input failed to parse as a résumé document. `hint` is empty or
    /// starts with a newline so the message reads cleanly either way.
    #[error("Failed to parse document: {source}{hint}")]
    Parse {
        source: serde_json::Error,
        hint: String,
    },

    /// The document store could not be read or written.
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
}

impl From<serde_json::Error> for ResumeError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "\n  Hint: Check for trailing commas, missing quotes, or unescaped characters."
            }
            serde_json::error::Category::Data => {
                "\n  Hint: The JSON is valid but doesn't match the résumé snapshot schema. Check field names and types."
            }
            serde_json::error::Category::Eof => {
                "\n  Hint: Unexpected end of input — is the JSON truncated?"
            }
            serde_json::error::Category::Io => "",
        };
        ResumeError::Parse {
            source: e,
            hint: hint.to_string(),
        }
    }
}
