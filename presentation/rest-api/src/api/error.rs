use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body returned by every endpoint.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Error category, e.g. "OutOfStock"
    pub name: String,
    /// Code-style identifier for i18n, e.g. "cart.out_of_stock"
    pub message: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
