use serde_json::Value;
use std::error::Error as StdError;
use std::fmt;

use super::{CodedError, ErrorCode, Meta};

/// A single failure reported by another process.
///
/// `status` keeps absence distinct from any numeric value, including zero.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteErrCodeError {
    pub id: String,
    pub error_code: ErrorCode,
    pub detail: String,
    pub meta: Option<Meta>,
    pub status: Option<u16>,
    pub source: Option<Value>,
}

impl RemoteErrCodeError {
    pub fn new(
        id: impl Into<String>,
        error_code: ErrorCode,
        detail: impl Into<String>,
        meta: Option<Meta>,
        status: Option<u16>,
        source: Option<Value>,
    ) -> Self {
        Self {
            id: id.into(),
            error_code,
            detail: detail.into(),
            meta,
            status,
            source,
        }
    }
}

impl fmt::Display for RemoteErrCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_code.title, self.detail)
    }
}

impl StdError for RemoteErrCodeError {}

impl CodedError for RemoteErrCodeError {
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

    fn status(&self) -> Option<u16> {
        self.status
    }

    fn origin(&self) -> Option<&Value> {
        self.source.as_ref()
    }
}

/// A remote failure that aggregates several independent remote failures.
///
/// Causes are always leaves, so the structure is at most two levels deep.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteMultiCauseError {
    pub error: RemoteErrCodeError,
    pub causes: Vec<RemoteErrCodeError>,
}

impl RemoteMultiCauseError {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        error_code: ErrorCode,
        detail: impl Into<String>,
        meta: Option<Meta>,
        status: Option<u16>,
        source: Option<Value>,
        causes: Vec<RemoteErrCodeError>,
    ) -> Self {
        Self {
            error: RemoteErrCodeError::new(id, error_code, detail, meta, status, source),
            causes,
        }
    }

    pub fn from_parts(error: RemoteErrCodeError, causes: Vec<RemoteErrCodeError>) -> Self {
        Self { error, causes }
    }
}

impl fmt::Display for RemoteMultiCauseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl StdError for RemoteMultiCauseError {}

impl CodedError for RemoteMultiCauseError {
    fn id(&self) -> &str {
        &self.error.id
    }

    fn error_code(&self) -> &ErrorCode {
        &self.error.error_code
    }

    fn detail(&self) -> &str {
        &self.error.detail
    }

    fn meta(&self) -> Option<&Meta> {
        self.error.meta.as_ref()
    }

    fn status(&self) -> Option<u16> {
        self.error.status
    }

    fn origin(&self) -> Option<&Value> {
        self.error.source.as_ref()
    }

    fn causes(&self) -> &[RemoteErrCodeError] {
        &self.causes
    }
}

/// Either shape a remote error can take after ingestion.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteError {
    Leaf(RemoteErrCodeError),
    MultiCause(RemoteMultiCauseError),
}

impl RemoteError {
    pub fn as_leaf(&self) -> Option<&RemoteErrCodeError> {
        match self {
            Self::Leaf(err) => Some(err),
            Self::MultiCause(_) => None,
        }
    }

    pub fn as_multi_cause(&self) -> Option<&RemoteMultiCauseError> {
        match self {
            Self::Leaf(_) => None,
            Self::MultiCause(err) => Some(err),
        }
    }

    fn head(&self) -> &RemoteErrCodeError {
        match self {
            Self::Leaf(err) => err,
            Self::MultiCause(err) => &err.error,
        }
    }
}

impl From<RemoteErrCodeError> for RemoteError {
    fn from(err: RemoteErrCodeError) -> Self {
        Self::Leaf(err)
    }
}

impl From<RemoteMultiCauseError> for RemoteError {
    fn from(err: RemoteMultiCauseError) -> Self {
        Self::MultiCause(err)
    }
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.head(), f)
    }
}

impl StdError for RemoteError {}

impl CodedError for RemoteError {
    fn id(&self) -> &str {
        &self.head().id
    }

    fn error_code(&self) -> &ErrorCode {
        &self.head().error_code
    }

    fn detail(&self) -> &str {
        &self.head().detail
    }

    fn meta(&self) -> Option<&Meta> {
        self.head().meta.as_ref()
    }

    fn status(&self) -> Option<u16> {
        self.head().status
    }

    fn origin(&self) -> Option<&Value> {
        self.head().source.as_ref()
    }

    fn causes(&self) -> &[RemoteErrCodeError] {
        match self {
            Self::Leaf(_) => &[],
            Self::MultiCause(err) => &err.causes,
        }
    }
}
