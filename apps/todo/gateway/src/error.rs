use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tonic::Code;

/// Body of every non-2xx gateway response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// gRPC status code (numeric)
    pub code: i32,
    pub error: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("reminder field has invalid format: {0}")]
    InvalidReminder(String),

    #[error("invalid request body: {0}")]
    Body(#[from] JsonRejection),

    #[error("invalid path: {0}")]
    Path(#[from] PathRejection),

    /// Status returned by the ToDo service (or by the channel)
    #[error("{}", .0.message())]
    Rpc(#[from] tonic::Status),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

/// HTTP status for a gRPC code.
pub fn http_status(code: Code) -> StatusCode {
    match code {
        Code::Ok => StatusCode::OK,
        Code::InvalidArgument => StatusCode::BAD_REQUEST,
        Code::NotFound => StatusCode::NOT_FOUND,
        Code::Unimplemented => StatusCode::NOT_IMPLEMENTED,
        Code::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        Code::DeadlineExceeded => StatusCode::GATEWAY_TIMEOUT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl GatewayError {
    pub fn code(&self) -> Code {
        match self {
            GatewayError::InvalidReminder(_) | GatewayError::Body(_) | GatewayError::Path(_) => {
                Code::InvalidArgument
            }
            GatewayError::Rpc(status) => status.code(),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let code = self.code();
        let status = http_status(code);

        if status.is_server_error() {
            tracing::error!(grpc_code = ?code, error = %self, "Request failed");
        } else {
            tracing::info!(grpc_code = ?code, error = %self, "Request rejected");
        }

        let body = ErrorResponse {
            code: code as i32,
            error: status
                .canonical_reason()
                .unwrap_or("Unknown")
                .to_string(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_mapping() {
        let cases = [
            (Code::Unimplemented, StatusCode::NOT_IMPLEMENTED),
            (Code::InvalidArgument, StatusCode::BAD_REQUEST),
            (Code::NotFound, StatusCode::NOT_FOUND),
            (Code::Unavailable, StatusCode::SERVICE_UNAVAILABLE),
            (Code::DeadlineExceeded, StatusCode::GATEWAY_TIMEOUT),
            (Code::Unknown, StatusCode::INTERNAL_SERVER_ERROR),
            (Code::Internal, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (code, expected) in cases {
            assert_eq!(http_status(code), expected, "{:?}", code);
        }
    }

    #[test]
    fn test_rpc_error_keeps_message() {
        let err = GatewayError::from(tonic::Status::not_found("ToDo with ID='5' is not found"));
        assert_eq!(err.code(), Code::NotFound);

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_reminder_is_bad_request() {
        let err = GatewayError::InvalidReminder("'x': invalid timestamp".to_string());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
