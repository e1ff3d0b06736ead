//! ToDo Domain
//!
//! CRUD operations for the single `todo` entity behind the `todo.v1` gRPC API.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← Version gate, timestamp codec, error mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Store    │  ← Pooled connections (trait + Postgres / in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Storage rows
//! └─────────────┘
//! ```
//!
//! Every operation is check → acquire → act → release. The connection is an
//! RAII guard, so it goes back to the pool on every exit path, including the
//! caller dropping the request future.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_todo::{PgToDoStore, ToDoService};
//! use sqlx::postgres::PgPoolOptions;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = PgPoolOptions::new().connect("postgres://...").await?;
//!
//! let service = ToDoService::new(PgToDoStore::new(pool));
//! let all = service.read_all("v1").await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod codec;
pub mod error;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod service;
pub mod store;

pub use api::{API_VERSION, check_api};
pub use error::{ToDoError, ToDoResult};
pub use memory::InMemoryToDoStore;
pub use models::{NewToDoRow, ToDoRow};
pub use postgres::PgToDoStore;
pub use service::ToDoService;
pub use store::{StoreError, StoreResult, ToDoConnection, ToDoStore};

// Wire types used across the service surface
pub use rpc::todo::v1::ToDo;
