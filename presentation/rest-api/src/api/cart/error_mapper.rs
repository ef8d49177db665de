use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            CartError::InvalidAmount => (StatusCode::BAD_REQUEST, "ValidationError"),
            CartError::ProductNotInCart => (StatusCode::NOT_FOUND, "NotFound"),
            CartError::OutOfStock => (StatusCode::CONFLICT, "OutOfStock"),
            CartError::GatewayFailure { .. } => (StatusCode::BAD_GATEWAY, "InventoryUnavailable"),
            CartError::PersistenceFailure(_) | CartError::Snapshot(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: self.to_string(),
            }),
        )
    }
}
