//! HTTP error responses
//!
//! Errors go out as plain-text bodies carrying the error message, with the
//! status code chosen per variant.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Error returned by HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Error raised by the store or dispatcher
    #[error(transparent)]
    Core(#[from] itemhub_core::Error),

    /// Route exists but not for this method
    #[error("Método no permitido")]
    MethodNotAllowed,

    /// Request body could not be read
    #[error("Error al leer el cuerpo de la solicitud")]
    UnreadableBody,

    /// Pseudo-GraphQL body is not a valid request envelope
    #[error("JSON inválido")]
    InvalidJson,

    /// Unexpected server-side failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Status code for this error
    pub fn status_code(&self) -> StatusCode {
        use itemhub_core::Error as CoreError;

        match self {
            ApiError::Core(CoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Core(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::UnreadableBody | ApiError::InvalidJson => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itemhub_core::Error as CoreError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::from(CoreError::NotFound(1)).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(CoreError::InvalidId).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(CoreError::InvalidData).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "introspection.json");
        assert_eq!(
            ApiError::from(CoreError::from(io)).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_message_is_transparent() {
        assert_eq!(
            ApiError::from(CoreError::NotFound(3)).to_string(),
            "Item no encontrado"
        );
        assert_eq!(ApiError::MethodNotAllowed.to_string(), "Método no permitido");
    }
}
