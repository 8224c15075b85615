//! TMF-style error documents and their conversion to and from internal errors

pub mod builder;
pub mod converter;
pub mod response;

pub use builder::{ErrorBuilder, ResponseBuilder};
pub use converter::{err_to_response, respond, Converter, DefaultConverter};
pub use response::{ErrorDetail, Response, ResponseType};
