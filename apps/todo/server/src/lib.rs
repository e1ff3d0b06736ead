//! ToDo gRPC Service
//!
//! ## Architecture
//!
//! ```text
//! Client
//!   ↓ (gRPC, optional Zstd compression)
//! ToDoServiceImpl (service.rs)
//!   ↓ (ToDoError → tonic::Status)
//! ToDoService (domain layer)
//!   ↓ (one pooled connection per call)
//! PgToDoStore (sqlx)
//!   ↓
//! PostgreSQL
//! ```
//!
//! ## Modules
//!
//! - `server`: Server initialization and lifecycle
//! - `service`: gRPC service implementation (ToDoServiceImpl)

pub mod server;
pub mod service;

pub use server::{Args, run};
pub use service::{ToDoServiceImpl, grpc_service};
