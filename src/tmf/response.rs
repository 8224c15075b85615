use axum::{
    http::StatusCode,
    response::{IntoResponse, Response as HttpResponse},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::errors::Meta;

/// Schema version tag carried by every response
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ResponseType {
    #[default]
    #[serde(rename = "v1.0")]
    V1_0,
}

impl ResponseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V1_0 => "v1.0",
        }
    }
}

/// TMF-style error document exchanged between services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Response {
    /// Unique id of this error occurrence
    pub id: String,
    /// Stable error code for programmatic handling
    pub code: String,
    /// Short human-readable title of the error class
    pub reason: String,
    /// Detailed human-readable message
    pub message: String,
    /// Decimal HTTP-like status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Identifier of the origin of the error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub source: Option<Value>,
    /// Schema version
    #[serde(rename = "type", default)]
    pub response_type: ResponseType,
    /// Additional context
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub meta: Option<Meta>,
    /// Underlying errors, omitted when there are none
    #[serde(default, skip_serializing_if = "is_absent_or_empty")]
    pub errors: Option<Vec<ErrorDetail>>,
}

/// One underlying error inside a [`Response`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    pub id: String,
    pub code: String,
    pub reason: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub source: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub meta: Option<Meta>,
}

fn is_absent_or_empty(errors: &Option<Vec<ErrorDetail>>) -> bool {
    errors.as_ref().map_or(true, Vec::is_empty)
}

impl Response {
    /// HTTP status to answer with; 500 when absent or not a valid status.
    pub fn http_status(&self) -> StatusCode {
        self.status
            .as_deref()
            .and_then(|s| s.parse::<u16>().ok())
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for Response {
    fn into_response(self) -> HttpResponse {
        let status = self.http_status();

        (status, Json(self)).into_response()
    }
}
