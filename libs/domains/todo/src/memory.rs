//! In-process store with the same pooling behaviour as [`PgToDoStore`].
//!
//! Connections are semaphore permits: at most `max_connections` requests hold
//! one at a time, waiting longer than the acquire timeout is a connection
//! failure, and dropping a connection releases its permit. Used by tests and
//! local runs without a database.
//!
//! [`PgToDoStore`]: crate::PgToDoStore

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDateTime, SubsecRound};
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::models::{NewToDoRow, ToDoRow};
use crate::store::{StoreError, StoreResult, ToDoConnection, ToDoStore};

const DEFAULT_MAX_CONNECTIONS: usize = 10;
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(8);

#[derive(Default)]
struct Table {
    last_id: i64,
    rows: BTreeMap<i64, ToDoRow>,
}

#[derive(Clone)]
pub struct InMemoryToDoStore {
    table: Arc<Mutex<Table>>,
    permits: Arc<Semaphore>,
    max_connections: usize,
    acquire_timeout: Duration,
    statement_delay: Option<Duration>,
}

impl InMemoryToDoStore {
    pub fn new() -> Self {
        Self {
            table: Arc::new(Mutex::new(Table::default())),
            permits: Arc::new(Semaphore::new(DEFAULT_MAX_CONNECTIONS)),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
            statement_delay: None,
        }
    }

    pub fn with_max_connections(mut self, max_connections: usize) -> Self {
        self.permits = Arc::new(Semaphore::new(max_connections));
        self.max_connections = max_connections;
        self
    }

    pub fn with_acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    /// Every statement sleeps this long before touching the table.
    pub fn with_statement_delay(mut self, delay: Duration) -> Self {
        self.statement_delay = Some(delay);
        self
    }

    pub fn max_connections(&self) -> usize {
        self.max_connections
    }

    /// Connections not currently held by a request.
    pub fn available_connections(&self) -> usize {
        self.permits.available_permits()
    }

    /// Stops handing out connections; waiting and future acquires fail.
    pub fn close(&self) {
        self.permits.close();
    }

    pub fn len(&self) -> usize {
        self.table.lock().map(|t| t.rows.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryToDoStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToDoStore for InMemoryToDoStore {
    type Connection = InMemoryConnection;

    async fn acquire(&self) -> StoreResult<InMemoryConnection> {
        let permit = tokio::time::timeout(
            self.acquire_timeout,
            Arc::clone(&self.permits).acquire_owned(),
        )
        .await
        .map_err(|_| {
            StoreError::Unavailable(
                "pool timed out while waiting for an open connection".to_string(),
            )
        })?
        .map_err(|_| StoreError::Unavailable("attempted to acquire a connection on a closed pool".to_string()))?;

        Ok(InMemoryConnection {
            table: Arc::clone(&self.table),
            statement_delay: self.statement_delay,
            _permit: permit,
        })
    }
}

pub struct InMemoryConnection {
    table: Arc<Mutex<Table>>,
    statement_delay: Option<Duration>,
    _permit: OwnedSemaphorePermit,
}

impl InMemoryConnection {
    async fn table(&self) -> StoreResult<MutexGuard<'_, Table>> {
        if let Some(delay) = self.statement_delay {
            tokio::time::sleep(delay).await;
        }

        self.table
            .lock()
            .map_err(|_| StoreError::Statement("table lock poisoned".to_string()))
    }
}

// Postgres TIMESTAMP keeps microseconds
fn stored(reminder: NaiveDateTime) -> NaiveDateTime {
    reminder.trunc_subsecs(6)
}

#[async_trait]
impl ToDoConnection for InMemoryConnection {
    async fn insert(&mut self, mut row: NewToDoRow) -> StoreResult<Option<i64>> {
        row.reminder = stored(row.reminder);
        let mut table = self.table().await?;
        table.last_id += 1;
        let id = table.last_id;
        table.rows.insert(id, row.with_id(id));
        Ok(Some(id))
    }

    async fn select_by_id(&mut self, id: i64) -> StoreResult<Vec<ToDoRow>> {
        let table = self.table().await?;
        Ok(table.rows.get(&id).cloned().into_iter().collect())
    }

    async fn update(&mut self, mut row: ToDoRow) -> StoreResult<u64> {
        row.reminder = stored(row.reminder);
        let mut table = self.table().await?;
        match table.rows.get_mut(&row.id) {
            Some(existing) => {
                *existing = row;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&mut self, id: i64) -> StoreResult<u64> {
        let mut table = self.table().await?;
        Ok(table.rows.remove(&id).map_or(0, |_| 1))
    }

    async fn select_all(&mut self) -> StoreResult<Vec<ToDoRow>> {
        let table = self.table().await?;
        Ok(table.rows.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn new_row(title: &str) -> NewToDoRow {
        NewToDoRow {
            title: title.to_string(),
            description: format!("{title} description"),
            reminder: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        }
    }

    #[tokio::test]
    async fn test_ids_are_sequential_and_never_reused() {
        let store = InMemoryToDoStore::new();
        let mut conn = store.acquire().await.unwrap();

        assert_eq!(conn.insert(new_row("a")).await.unwrap(), Some(1));
        assert_eq!(conn.insert(new_row("b")).await.unwrap(), Some(2));
        assert_eq!(conn.delete(2).await.unwrap(), 1);
        assert_eq!(conn.insert(new_row("c")).await.unwrap(), Some(3));

        let ids: Vec<i64> = conn.select_all().await.unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_affect_nothing() {
        let store = InMemoryToDoStore::new();
        let mut conn = store.acquire().await.unwrap();

        assert_eq!(conn.update(new_row("x").with_id(99)).await.unwrap(), 0);
        assert_eq!(conn.delete(99).await.unwrap(), 0);
        assert!(conn.select_by_id(99).await.unwrap().is_empty());
        drop(conn);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_acquire_times_out_when_exhausted() {
        let store = InMemoryToDoStore::new()
            .with_max_connections(1)
            .with_acquire_timeout(Duration::from_millis(20));

        let held = store.acquire().await.unwrap();
        assert_eq!(store.available_connections(), 0);

        let err = store.acquire().await.err().unwrap();
        assert!(matches!(err, StoreError::Unavailable(_)));

        drop(held);
        assert_eq!(store.available_connections(), 1);
        assert!(store.acquire().await.is_ok());
    }

    #[tokio::test]
    async fn test_closed_pool_refuses_connections() {
        let store = InMemoryToDoStore::new();
        store.close();

        let err = store.acquire().await.err().unwrap();
        assert!(err.to_string().contains("closed pool"));
    }

    #[tokio::test]
    async fn test_reminder_truncated_to_microseconds() {
        let store = InMemoryToDoStore::new();
        let mut conn = store.acquire().await.unwrap();

        let mut row = new_row("precise");
        row.reminder = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_nano_opt(9, 0, 0, 123_456_789)
            .unwrap();
        let id = conn.insert(row).await.unwrap().unwrap();

        let stored = conn.select_by_id(id).await.unwrap().remove(0);
        assert_eq!(stored.reminder.and_utc().timestamp_subsec_nanos(), 123_456_000);
    }
}
