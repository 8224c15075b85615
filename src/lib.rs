//! Structured service errors and their TMF-style wire representation.
//!
//! Errors carry a stable [`errors::ErrorCode`], a detail message, optional
//! metadata and, once they have crossed a process boundary, a status, an
//! origin and an ordered list of leaf causes. [`tmf`] converts them to and
//! from the [`tmf::Response`] document other services exchange.

pub mod config;
pub mod errors;
pub mod openapi;
pub mod tmf;

pub use errors::{
    CodedError, ErrCodeError, ErrorCode, Meta, RemoteErrCodeError, RemoteError,
    RemoteMultiCauseError,
};
pub use tmf::{err_to_response, Converter, DefaultConverter, Response};
