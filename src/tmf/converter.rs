use serde_json::Value;
use tracing::{debug, warn};

use super::response::{ErrorDetail, Response, ResponseType};
use crate::config::ResponseConfig;
use crate::errors::{
    CodedError, ErrorCode, RemoteErrCodeError, RemoteError, RemoteMultiCauseError,
};

/// Turns an incoming error document into an internal error.
pub trait Converter {
    fn build_error_code_error(&self, response: &Response) -> RemoteError;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConverter;

impl Converter for DefaultConverter {
    /// A non-empty `errors` list yields a multi-cause error; an absent or
    /// empty one yields a leaf.
    fn build_error_code_error(&self, response: &Response) -> RemoteError {
        let error = RemoteErrCodeError::new(
            response.id.clone(),
            ErrorCode::new(response.code.clone(), response.reason.clone()),
            response.message.clone(),
            response.meta.clone(),
            parse_status(response.status.as_deref()),
            response.source.clone(),
        );

        match response.errors.as_deref() {
            Some(details) if !details.is_empty() => {
                debug!(
                    error_id = %response.id,
                    causes = details.len(),
                    "Building multi-cause error from response"
                );
                let causes = details.iter().map(detail_to_error).collect();
                RemoteMultiCauseError::from_parts(error, causes).into()
            }
            _ => error.into(),
        }
    }
}

fn detail_to_error(detail: &ErrorDetail) -> RemoteErrCodeError {
    RemoteErrCodeError::new(
        detail.id.clone(),
        ErrorCode::new(detail.code.clone(), detail.reason.clone()),
        detail.message.clone(),
        detail.meta.clone(),
        parse_status(detail.status.as_deref()),
        detail.source.clone(),
    )
}

/// Parse a wire status back to a number.
///
/// Decimal digits with an optional leading `+`, in 0..=65535. Surrounding
/// whitespace, a minus sign or an out-of-range value degrades to "absent".
fn parse_status(status: Option<&str>) -> Option<u16> {
    let raw = status?;
    match raw.parse() {
        Ok(status) => Some(status),
        Err(_) => {
            warn!(status = %raw, "Discarding unparsable error status");
            None
        }
    }
}

/// Render an error as an outgoing document answered with `status`.
///
/// Causes become `errors`; an error without causes leaves `errors` absent.
pub fn err_to_response<E: CodedError + ?Sized>(err: &E, status: u16) -> Response {
    let causes = err.causes();
    let errors = if causes.is_empty() {
        None
    } else {
        Some(causes.iter().map(error_to_detail).collect())
    };

    Response {
        id: err.id().to_string(),
        code: err.error_code().code.clone(),
        reason: err.error_code().title.clone(),
        message: err.detail().to_string(),
        status: Some(status.to_string()),
        source: err.origin().cloned(),
        response_type: ResponseType::V1_0,
        meta: err.meta().cloned(),
        errors,
    }
}

fn error_to_detail(err: &RemoteErrCodeError) -> ErrorDetail {
    ErrorDetail {
        id: err.id.clone(),
        code: err.error_code.code.clone(),
        reason: err.error_code.title.clone(),
        message: err.detail.clone(),
        status: err.status.map(|s| s.to_string()),
        source: err.source.clone(),
        meta: err.meta.clone(),
    }
}

/// [`err_to_response`] with service defaults: the error's own status or
/// `default_status`, and the configured source when the error has none.
pub fn respond<E: CodedError + ?Sized>(err: &E, config: &ResponseConfig) -> Response {
    let mut response = err_to_response(err, err.status().unwrap_or(config.default_status));
    if response.source.is_none() {
        response.source = config.source.clone().map(Value::String);
    }
    response
}
