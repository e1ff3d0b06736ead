//! # gRPC Library
//!
//! Channel creation for clients and bootstrap helpers for servers.
//!
//! ## Client
//! ```ignore
//! use grpc_client::create_channel_lazy;
//! use rpc::todo::v1::to_do_service_client::ToDoServiceClient;
//!
//! let channel = create_channel_lazy("http://127.0.0.1:50051")?;
//! let client = ToDoServiceClient::new(channel);
//! ```
//!
//! ## Server
//! ```ignore
//! use grpc_client::server::{GrpcServer, GrpcServerConfig};
//!
//! let config = GrpcServerConfig::from_env()?;
//! let (health_reporter, health_service) = grpc_client::server::create_health_service();
//! GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
//! GrpcServer::log_startup(&config, SERVICE_NAME);
//! ```

pub mod channel;
pub mod error;
pub mod server;

pub use channel::{
  ChannelConfig, KeepAlive, create_channel, create_channel_lazy, create_channel_lazy_with_config,
  create_channel_with_config,
};
pub use error::{GrpcError, GrpcResult};
