use core_config::{ConfigError, FromEnv, ServerConfig, env_or_default};

/// Gateway settings: where to listen and where the gRPC service lives.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub server: ServerConfig,
    /// `TODO_GRPC_URL`
    pub grpc_url: String,
}

impl FromEnv for GatewayConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            grpc_url: env_or_default("TODO_GRPC_URL", "http://127.0.0.1:50051"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        temp_env::with_vars_unset(["HOST", "PORT", "TODO_GRPC_URL"], || {
            let config = GatewayConfig::from_env().unwrap();
            assert_eq!(config.server.address(), "0.0.0.0:8080");
            assert_eq!(config.grpc_url, "http://127.0.0.1:50051");
        });
    }

    #[test]
    fn test_overrides() {
        temp_env::with_vars(
            [
                ("PORT", Some("9000")),
                ("TODO_GRPC_URL", Some("http://todo-server:50051")),
            ],
            || {
                let config = GatewayConfig::from_env().unwrap();
                assert_eq!(config.server.port, 9000);
                assert_eq!(config.grpc_url, "http://todo-server:50051");
            },
        );
    }
}
