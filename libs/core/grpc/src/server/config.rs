//! Server configuration loaded from environment variables.

use core_config::{ConfigError, FromEnv, env_parse};
use std::net::SocketAddr;
use std::time::Duration;

/// Configuration for gRPC server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrpcServerConfig {
    /// Host to bind to (default: 0.0.0.0)
    pub host: String,
    /// Port to listen on (default: 50051)
    pub port: u16,
    /// Enable Zstd compression (default: true)
    pub enable_compression: bool,
    /// Server-wide deadline for a single request (default: 30)
    pub request_timeout_secs: u64,
}

impl Default for GrpcServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 50051,
            enable_compression: true,
            request_timeout_secs: 30,
        }
    }
}

impl FromEnv for GrpcServerConfig {
    /// Reads `GRPC_HOST`, `GRPC_PORT`, `GRPC_COMPRESSION` and
    /// `GRPC_REQUEST_TIMEOUT_SECS`.
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env_parse("GRPC_HOST", "0.0.0.0")?,
            port: env_parse("GRPC_PORT", "50051")?,
            enable_compression: env_parse("GRPC_COMPRESSION", "true")?,
            request_timeout_secs: env_parse("GRPC_REQUEST_TIMEOUT_SECS", "30")?,
        })
    }
}

impl GrpcServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_compression(mut self, enable: bool) -> Self {
        self.enable_compression = enable;
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.addr_string()
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::ParseError {
                key: "GRPC_HOST".to_string(),
                details: e.to_string(),
            })
    }

    /// `host:port`, for logging.
    pub fn addr_string(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GrpcServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 50051);
        assert!(config.enable_compression);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_builder_pattern() {
        let config = GrpcServerConfig::new()
            .with_host("127.0.0.1")
            .with_port(9090)
            .with_compression(false);

        assert_eq!(config.addr_string(), "127.0.0.1:9090");
        assert!(!config.enable_compression);
        assert_eq!(
            config.socket_addr().unwrap(),
            "127.0.0.1:9090".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_from_env_defaults() {
        temp_env::with_vars_unset(
            [
                "GRPC_HOST",
                "GRPC_PORT",
                "GRPC_COMPRESSION",
                "GRPC_REQUEST_TIMEOUT_SECS",
            ],
            || {
                let config = GrpcServerConfig::from_env().unwrap();
                assert_eq!(config, GrpcServerConfig::default());
            },
        );
    }

    #[test]
    fn test_from_env_overrides() {
        temp_env::with_vars(
            [
                ("GRPC_HOST", Some("127.0.0.1")),
                ("GRPC_PORT", Some("6000")),
                ("GRPC_COMPRESSION", Some("false")),
                ("GRPC_REQUEST_TIMEOUT_SECS", Some("5")),
            ],
            || {
                let config = GrpcServerConfig::from_env().unwrap();
                assert_eq!(config.port, 6000);
                assert!(!config.enable_compression);
                assert_eq!(config.request_timeout(), Duration::from_secs(5));
            },
        );
    }

    #[test]
    fn test_from_env_rejects_bad_port() {
        temp_env::with_var("GRPC_PORT", Some("not-a-port"), || {
            let err = GrpcServerConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("GRPC_PORT"));
        });
    }

    #[test]
    fn test_bad_host_is_parse_error() {
        let config = GrpcServerConfig::new().with_host("not a host");
        assert!(matches!(
            config.socket_addr(),
            Err(ConfigError::ParseError { .. })
        ));
    }
}
