//! Wire types for the todo gRPC API.
//!
//! Sources under `generated/` are produced from `proto/todo/v1/todo_service.proto`
//! and committed to the tree.

pub mod generated;

pub use generated::todo;
