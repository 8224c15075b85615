use utoipa::OpenApi;

use crate::tmf::{ErrorDetail, Response, ResponseType};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "TMF Error Response",
        version = "1.0",
        description = "Error document exchanged between services. A response carries a stable code, a human reason and message, an optional HTTP-like status, and optionally the list of underlying errors that caused it.",
    ),
    components(
        schemas(
            Response,
            ErrorDetail,
            ResponseType,
        )
    )
)]
pub struct ApiDoc;
