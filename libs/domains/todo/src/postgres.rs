use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};

use crate::models::{NewToDoRow, ToDoRow};
use crate::store::{StoreError, StoreResult, ToDoConnection, ToDoStore};

/// `todo` table store backed by a sqlx Postgres pool.
#[derive(Clone)]
pub struct PgToDoStore {
    pool: PgPool,
}

impl PgToDoStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ToDoStore for PgToDoStore {
    type Connection = PgToDoConnection;

    async fn acquire(&self) -> StoreResult<PgToDoConnection> {
        let conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Ok(PgToDoConnection { conn })
    }
}

/// Dropping this returns the underlying connection to the pool.
pub struct PgToDoConnection {
    conn: PoolConnection<Postgres>,
}

#[async_trait]
impl ToDoConnection for PgToDoConnection {
    async fn insert(&mut self, row: NewToDoRow) -> StoreResult<Option<i64>> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO todo (title, description, reminder) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(row.title)
        .bind(row.description)
        .bind(row.reminder)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(id)
    }

    async fn select_by_id(&mut self, id: i64) -> StoreResult<Vec<ToDoRow>> {
        let rows = sqlx::query_as::<_, ToDoRow>(
            "SELECT id, title, description, reminder FROM todo WHERE id = $1",
        )
        .bind(id)
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(rows)
    }

    async fn update(&mut self, row: ToDoRow) -> StoreResult<u64> {
        let result = sqlx::query(
            "UPDATE todo SET title = $1, description = $2, reminder = $3 WHERE id = $4",
        )
        .bind(row.title)
        .bind(row.description)
        .bind(row.reminder)
        .bind(row.id)
        .execute(&mut *self.conn)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&mut self, id: i64) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM todo WHERE id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected())
    }

    async fn select_all(&mut self) -> StoreResult<Vec<ToDoRow>> {
        let rows = sqlx::query_as::<_, ToDoRow>(
            "SELECT id, title, description, reminder FROM todo ORDER BY id",
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(rows)
    }
}
