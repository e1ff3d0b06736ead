use async_trait::async_trait;
use thiserror::Error;

use crate::models::{NewToDoRow, ToDoRow};

#[derive(Debug, Error)]
pub enum StoreError {
    /// No connection could be obtained (pool exhausted, closed, or driver error).
    #[error("{0}")]
    Unavailable(String),

    /// A statement failed on an acquired connection.
    #[error("{0}")]
    Statement(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Statement(err.to_string())
    }
}

/// One pooled connection, held for the duration of a single request.
///
/// Implementations return the connection to their pool when dropped.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ToDoConnection: Send {
    /// Inserts a row and returns the generated id, if the store reported one.
    async fn insert(&mut self, row: NewToDoRow) -> StoreResult<Option<i64>>;

    /// Every row matching the primary key; more than one is an integrity problem
    /// the caller must detect.
    async fn select_by_id(&mut self, id: i64) -> StoreResult<Vec<ToDoRow>>;

    /// Replaces title, description and reminder; returns rows affected.
    async fn update(&mut self, row: ToDoRow) -> StoreResult<u64>;

    /// Returns rows affected.
    async fn delete(&mut self, id: i64) -> StoreResult<u64>;

    /// Every row, ordered by id ascending.
    async fn select_all(&mut self) -> StoreResult<Vec<ToDoRow>>;
}

/// Shared pool of ToDo connections.
#[cfg_attr(test, mockall::automock(type Connection = MockToDoConnection;))]
#[async_trait]
pub trait ToDoStore: Send + Sync + 'static {
    type Connection: ToDoConnection + 'static;

    /// Waits for a free connection, bounded by the pool's acquire timeout.
    async fn acquire(&self) -> StoreResult<Self::Connection>;
}
