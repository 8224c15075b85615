//! Fluent builders for [`Response`] and [`ErrorDetail`].
//!
//! Builders are single-owner accumulators: fill one in on a single thread,
//! then share the built value. `build` borrows the builder, so it can be
//! called repeatedly; every call returns an independent value from the
//! state accumulated so far.

use serde_json::Value;

use super::response::{ErrorDetail, Response, ResponseType};
use crate::errors::Meta;

#[derive(Debug, Clone, Default)]
pub struct ResponseBuilder {
    id: String,
    code: String,
    reason: String,
    message: String,
    status: Option<u16>,
    source: Option<Value>,
    meta: Option<Meta>,
    errors: Option<Vec<ErrorDetail>>,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn source(mut self, source: impl Into<Value>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn meta(mut self, meta: Meta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Replace the sub-errors with `errors`.
    pub fn errors(mut self, errors: impl IntoIterator<Item = ErrorDetail>) -> Self {
        self.errors = Some(errors.into_iter().collect());
        self
    }

    /// Append one sub-error built from `error`.
    pub fn error(mut self, error: &ErrorBuilder) -> Self {
        self.errors.get_or_insert_with(Vec::new).push(error.build());
        self
    }

    pub fn build(&self) -> Response {
        Response {
            id: self.id.clone(),
            code: self.code.clone(),
            reason: self.reason.clone(),
            message: self.message.clone(),
            status: self.status.map(|s| s.to_string()),
            source: self.source.clone(),
            response_type: ResponseType::V1_0,
            meta: self.meta.clone(),
            errors: self.errors.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ErrorBuilder {
    id: String,
    code: String,
    reason: String,
    message: String,
    status: Option<u16>,
    source: Option<Value>,
    meta: Option<Meta>,
}

impl ErrorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn source(mut self, source: impl Into<Value>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn meta(mut self, meta: Meta) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn build(&self) -> ErrorDetail {
        ErrorDetail {
            id: self.id.clone(),
            code: self.code.clone(),
            reason: self.reason.clone(),
            message: self.message.clone(),
            status: self.status.map(|s| s.to_string()),
            source: self.source.clone(),
            meta: self.meta.clone(),
        }
    }
}
