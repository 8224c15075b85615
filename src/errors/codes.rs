use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Stable identifier of an error class.
///
/// `code` is what callers match on programmatically and must not change
/// between releases; `title` is a short human label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode {
    pub code: String,
    pub title: String,
}

/// Reasons an [`ErrorCode`] is not fit for publishing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorCodeViolation {
    #[error("error code is empty")]
    EmptyCode,

    #[error("error code `{0}` has an empty title")]
    EmptyTitle(String),

    #[error("error code `{0}` contains whitespace")]
    WhitespaceInCode(String),
}

impl ErrorCode {
    pub fn new(code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
        }
    }

    /// Check the code against publishing rules.
    ///
    /// Construction never enforces these; services call this from their
    /// own registries or tests.
    pub fn validate(&self) -> Result<(), ErrorCodeViolation> {
        if self.code.is_empty() {
            return Err(ErrorCodeViolation::EmptyCode);
        }
        if self.code.chars().any(char::is_whitespace) {
            return Err(ErrorCodeViolation::WhitespaceInCode(self.code.clone()));
        }
        if self.title.trim().is_empty() {
            return Err(ErrorCodeViolation::EmptyTitle(self.code.clone()));
        }
        Ok(())
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}
