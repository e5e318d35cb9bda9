use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{Error, HttpResponse};
use serde_derive::Serialize;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Handler-boundary mapping from domain outcomes to transport errors.
/// Every failure body is `{"error": <message>}`.
pub struct JsonResponse;

impl JsonResponse {
    fn status(code: StatusCode, message: impl Into<String>) -> Error {
        let message = message.into();
        let response = HttpResponse::build(code).json(ErrorBody {
            error: message.clone(),
        });
        InternalError::from_response(message, response).into()
    }

    pub(crate) fn bad_request(message: impl Into<String>) -> Error {
        Self::status(StatusCode::BAD_REQUEST, message)
    }

    pub(crate) fn unauthorized(message: impl Into<String>) -> Error {
        Self::status(StatusCode::UNAUTHORIZED, message)
    }

    pub(crate) fn forbidden(message: impl Into<String>) -> Error {
        Self::status(StatusCode::FORBIDDEN, message)
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Error {
        Self::status(StatusCode::NOT_FOUND, message)
    }

    // Duplicates ride on 400, conflated with validation on the wire.
    pub(crate) fn conflict(message: impl Into<String>) -> Error {
        Self::status(StatusCode::BAD_REQUEST, message)
    }

    /// Logs the cause server-side; the client only sees an opaque message.
    pub(crate) fn internal_server_error<E: std::fmt::Debug>(err: E) -> Error {
        tracing::error!("internal error: {:?}", err);
        Self::status(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
