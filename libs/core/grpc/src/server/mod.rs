//! gRPC server bootstrap helpers
//!
//! ```ignore
//! use grpc_client::server::{GrpcServer, GrpcServerConfig, create_health_service};
//! use rpc::todo::v1::to_do_service_server::{ToDoServiceServer, SERVICE_NAME};
//! use tonic::transport::Server;
//!
//! let config = GrpcServerConfig::from_env()?;
//! let (health_reporter, health_service) = create_health_service();
//!
//! GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
//! GrpcServer::log_startup(&config, SERVICE_NAME);
//!
//! Server::builder()
//!     .timeout(config.request_timeout())
//!     .add_service(health_service)
//!     .add_service(ToDoServiceServer::new(my_impl))
//!     .serve(config.socket_addr()?)
//!     .await?;
//! ```

mod builder;
mod config;

pub use builder::{GrpcServer, create_health_service};
pub use config::GrpcServerConfig;
