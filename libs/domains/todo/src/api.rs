use crate::error::{ToDoError, ToDoResult};

/// API version implemented by this server.
pub const API_VERSION: &str = "v1";

/// Checks the version requested by the client.
///
/// An empty string means "whatever the server implements" and always passes.
pub fn check_api(requested: &str) -> ToDoResult<()> {
    if requested.is_empty() || requested == API_VERSION {
        return Ok(());
    }

    Err(ToDoError::VersionMismatch {
        supported: API_VERSION,
        requested: requested.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_version_passes() {
        assert!(check_api("").is_ok());
    }

    #[test]
    fn test_matching_version_passes() {
        assert!(check_api("v1").is_ok());
    }

    #[test]
    fn test_other_versions_rejected() {
        for requested in ["v2", "V1", "v1 ", "1"] {
            let err = check_api(requested).unwrap_err();
            assert_eq!(err.code(), tonic::Code::Unimplemented);

            let message = err.to_string();
            assert!(message.contains("'v1'"), "{message}");
            assert!(message.contains(&format!("'{requested}'")), "{message}");
        }
    }
}
