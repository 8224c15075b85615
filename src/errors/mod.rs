//! Structured error model: codes, local and remote errors, trace rendering

pub mod codes;
pub mod error;
pub mod logging;
pub mod remote;
pub mod trace;

use serde_json::Value;
use std::collections::HashMap;

pub use codes::{ErrorCode, ErrorCodeViolation};
pub use error::ErrCodeError;
pub use logging::{log_error, to_log_format, to_log_format_without_stack_trace};
pub use remote::{RemoteErrCodeError, RemoteError, RemoteMultiCauseError};

/// Free-form metadata attached to an error. Values are opaque JSON.
pub type Meta = HashMap<String, Value>;

/// Capabilities shared by every error in this crate.
///
/// `Display` is the short form; [`CodedError::stack_trace`] is the long
/// form with causes expanded.
pub trait CodedError: std::error::Error + Send + Sync {
    fn id(&self) -> &str;

    fn error_code(&self) -> &ErrorCode;

    fn detail(&self) -> &str;

    fn meta(&self) -> Option<&Meta>;

    /// Transport status, if the error crossed a boundary with one.
    fn status(&self) -> Option<u16> {
        None
    }

    /// Identifier of the origin of a remote error.
    fn origin(&self) -> Option<&Value> {
        None
    }

    /// Remote sub-causes, in the order they were reported.
    fn causes(&self) -> &[RemoteErrCodeError] {
        &[]
    }

    fn stack_trace(&self) -> String {
        trace::stack_trace(self)
    }
}
