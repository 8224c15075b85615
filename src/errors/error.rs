use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

use super::{CodedError, ErrorCode, Meta};

type Cause = Arc<dyn StdError + Send + Sync + 'static>;

/// Error raised inside this process.
#[derive(Debug, Clone)]
pub struct ErrCodeError {
    pub id: String,
    pub error_code: ErrorCode,
    pub detail: String,
    pub meta: Option<Meta>,
    cause: Option<Cause>,
}

impl ErrCodeError {
    /// Create an error with a freshly generated id.
    pub fn new(error_code: ErrorCode, detail: impl Into<String>, meta: Option<Meta>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            error_code,
            detail: detail.into(),
            meta,
            cause: None,
        }
    }

    /// Replace the generated id, e.g. with a request id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_cause<E>(mut self, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.cause = Some(Arc::new(cause));
        self
    }
}

impl fmt::Display for ErrCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_code.title, self.detail)
    }
}

impl StdError for ErrCodeError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn StdError + 'static))
    }
}

impl CodedError for ErrCodeError {
    fn id(&self) -> &str {
        &self.id
    }

    fn error_code(&self) -> &ErrorCode {
        &self.error_code
    }

    fn detail(&self) -> &str {
        &self.detail
    }

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}
