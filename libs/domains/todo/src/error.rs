use thiserror::Error;

use crate::codec::TimestampError;
use crate::store::StoreError;

/// Failure kinds returned by the ToDo operations.
///
/// Every variant keeps the underlying cause in its message; nothing is retried.
#[derive(Debug, Error)]
pub enum ToDoError {
    #[error(
        "unsupported API version: service implements API version '{supported}', but asked for '{requested}'"
    )]
    VersionMismatch {
        supported: &'static str,
        requested: String,
    },

    #[error("{0}")]
    InvalidArgument(String),

    #[error("failed to connect to database: {0}")]
    ConnectionFailure(String),

    #[error("ToDo with ID='{0}' is not found")]
    NotFound(i64),

    #[error("found multiple ToDo rows with ID='{0}'")]
    IntegrityViolation(i64),

    #[error("{context}: {cause}")]
    Storage {
        context: &'static str,
        cause: String,
    },
}

pub type ToDoResult<T> = Result<T, ToDoError>;

impl ToDoError {
    pub fn invalid_reminder(err: TimestampError) -> Self {
        ToDoError::InvalidArgument(format!("reminder field has invalid format: {}", err))
    }

    pub fn storage(context: &'static str, cause: impl ToString) -> Self {
        ToDoError::Storage {
            context,
            cause: cause.to_string(),
        }
    }

    /// gRPC status code reported for this failure.
    pub fn code(&self) -> tonic::Code {
        match self {
            ToDoError::VersionMismatch { .. } => tonic::Code::Unimplemented,
            ToDoError::InvalidArgument(_) => tonic::Code::InvalidArgument,
            ToDoError::NotFound(_) => tonic::Code::NotFound,
            ToDoError::ConnectionFailure(_)
            | ToDoError::IntegrityViolation(_)
            | ToDoError::Storage { .. } => tonic::Code::Unknown,
        }
    }
}

impl From<StoreError> for ToDoError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(cause) => ToDoError::ConnectionFailure(cause),
            StoreError::Statement(cause) => ToDoError::Storage {
                context: "failed to execute statement",
                cause,
            },
        }
    }
}

impl From<ToDoError> for tonic::Status {
    fn from(err: ToDoError) -> Self {
        tonic::Status::new(err.code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (
                ToDoError::VersionMismatch {
                    supported: "v1",
                    requested: "v2".to_string(),
                },
                tonic::Code::Unimplemented,
            ),
            (
                ToDoError::InvalidArgument("bad".to_string()),
                tonic::Code::InvalidArgument,
            ),
            (
                ToDoError::ConnectionFailure("refused".to_string()),
                tonic::Code::Unknown,
            ),
            (ToDoError::NotFound(7), tonic::Code::NotFound),
            (ToDoError::IntegrityViolation(7), tonic::Code::Unknown),
            (
                ToDoError::storage("failed to select from ToDo", "boom"),
                tonic::Code::Unknown,
            ),
        ];

        for (err, code) in cases {
            let status: tonic::Status = err.into();
            assert_eq!(status.code(), code);
        }
    }

    #[test]
    fn test_status_keeps_cause() {
        let status: tonic::Status = ToDoError::storage("failed to insert into ToDo", "disk full").into();
        assert_eq!(status.message(), "failed to insert into ToDo: disk full");

        let status: tonic::Status = ToDoError::NotFound(42).into();
        assert_eq!(status.message(), "ToDo with ID='42' is not found");
    }

    #[test]
    fn test_store_error_mapping() {
        let err: ToDoError = StoreError::Unavailable("pool timed out".to_string()).into();
        assert!(matches!(err, ToDoError::ConnectionFailure(_)));
        assert!(err.to_string().contains("pool timed out"));

        let err: ToDoError = StoreError::Statement("syntax error".to_string()).into();
        assert_eq!(err.code(), tonic::Code::Unknown);
        assert!(err.to_string().contains("syntax error"));
    }
}
