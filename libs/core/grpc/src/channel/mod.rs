pub mod config;

pub use config::{ChannelConfig, KeepAlive};

use crate::error::{GrpcError, GrpcResult};
use tonic::transport::{Channel, Endpoint};

fn endpoint(addr: &str, config: &ChannelConfig) -> GrpcResult<Endpoint> {
  let endpoint = Endpoint::from_shared(addr.to_string()).map_err(|source| {
    tracing::error!(target: "grpc_client", addr = %addr, error = ?source, "Invalid URI");
    GrpcError::InvalidUri {
      addr: addr.to_string(),
      source,
    }
  })?;

  Ok(config.apply_to_endpoint(endpoint))
}

/// Connects eagerly with the default [`ChannelConfig`].
///
/// ## Example
/// ```ignore
/// use grpc_client::create_channel;
/// use rpc::todo::v1::to_do_service_client::ToDoServiceClient;
///
/// let channel = create_channel("http://127.0.0.1:50051").await?;
/// let client = ToDoServiceClient::new(channel);
/// ```
pub async fn create_channel(addr: impl Into<String>) -> GrpcResult<Channel> {
  create_channel_with_config(addr, ChannelConfig::default()).await
}

/// Returns immediately; the connection is made on the first RPC and
/// re-established after failures.
pub fn create_channel_lazy(addr: impl Into<String>) -> GrpcResult<Channel> {
  create_channel_lazy_with_config(addr, ChannelConfig::default())
}

pub fn create_channel_lazy_with_config(
  addr: impl Into<String>,
  config: ChannelConfig,
) -> GrpcResult<Channel> {
  let addr = addr.into();
  let endpoint = endpoint(&addr, &config)?;

  tracing::debug!(target: "grpc_client", addr = %addr, "Creating lazy gRPC channel");

  Ok(endpoint.connect_lazy())
}

/// Connects eagerly, failing after `config.connect_timeout`.
pub async fn create_channel_with_config(
  addr: impl Into<String>,
  config: ChannelConfig,
) -> GrpcResult<Channel> {
  let addr = addr.into();
  let endpoint = endpoint(&addr, &config)?;

  tracing::debug!(target: "grpc_client", addr = %addr, "Creating gRPC channel");

  endpoint.connect().await.map_err(|source| {
    tracing::error!(
      target: "grpc_client",
      addr = %addr,
      error = ?source,
      "Failed to connect to gRPC service"
    );
    GrpcError::ConnectionFailed { addr, source }
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::time::Duration;

  #[test]
  fn test_invalid_uri() {
    let result = create_channel_lazy("not a valid uri");
    assert!(matches!(result, Err(GrpcError::InvalidUri { .. })));
  }

  #[tokio::test]
  async fn test_lazy_channel_does_not_connect() {
    // nothing listens on port 1
    assert!(create_channel_lazy("http://127.0.0.1:1").is_ok());
  }

  #[tokio::test]
  async fn test_connection_failed() {
    let config = ChannelConfig::new().with_connect_timeout(Duration::from_millis(200));
    let result = create_channel_with_config("http://127.0.0.1:1", config).await;
    assert!(matches!(result, Err(GrpcError::ConnectionFailed { .. })));
  }
}
