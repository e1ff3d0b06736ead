use std::sync::Arc;

use tracing::{debug, instrument};

use crate::api::check_api;
use crate::codec;
use crate::error::{ToDoError, ToDoResult};
use crate::models::{NewToDoRow, ToDoRow};
use crate::store::{ToDoConnection, ToDoStore};
use rpc::todo::v1::ToDo;

/// The five ToDo operations over a pooled store.
///
/// Each call checks the API version, acquires one connection, runs its
/// statement and drops the connection before returning.
pub struct ToDoService<S: ToDoStore> {
    store: Arc<S>,
}

impl<S: ToDoStore> Clone for ToDoService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: ToDoStore> ToDoService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    async fn connect(&self) -> ToDoResult<S::Connection> {
        Ok(self.store.acquire().await?)
    }

    /// Create a new todo; any supplied id is ignored.
    #[instrument(skip(self, to_do), fields(api = %api))]
    pub async fn create(&self, api: &str, to_do: Option<ToDo>) -> ToDoResult<i64> {
        check_api(api)?;
        let mut conn = self.connect().await?;

        let to_do = to_do.ok_or_else(|| ToDoError::InvalidArgument("toDo is required".into()))?;
        let reminder =
            codec::to_storage(to_do.reminder.as_ref()).map_err(ToDoError::invalid_reminder)?;

        let id = conn
            .insert(NewToDoRow {
                title: to_do.title,
                description: to_do.description,
                reminder,
            })
            .await
            .map_err(|e| ToDoError::storage("failed to insert into ToDo", e))?
            .ok_or_else(|| {
                ToDoError::storage("failed to retrieve id for created ToDo", "no id returned")
            })?;

        debug!(todo_id = id, "Created todo");
        Ok(id)
    }

    /// Read a todo by id.
    #[instrument(skip(self), fields(api = %api, todo_id = id))]
    pub async fn read(&self, api: &str, id: i64) -> ToDoResult<ToDo> {
        check_api(api)?;
        let mut conn = self.connect().await?;

        let mut rows = conn
            .select_by_id(id)
            .await
            .map_err(|e| ToDoError::storage("failed to select from ToDo", e))?;

        match rows.len() {
            0 => Err(ToDoError::NotFound(id)),
            1 => {
                let row = rows.remove(0);
                into_wire(row)
            }
            _ => Err(ToDoError::IntegrityViolation(id)),
        }
    }

    /// Replace title, description and reminder of an existing todo.
    ///
    /// Returns the number of rows the store reports as updated.
    #[instrument(skip(self, to_do), fields(api = %api))]
    pub async fn update(&self, api: &str, to_do: Option<ToDo>) -> ToDoResult<i64> {
        check_api(api)?;
        let mut conn = self.connect().await?;

        let to_do = to_do.ok_or_else(|| ToDoError::InvalidArgument("toDo is required".into()))?;
        let reminder =
            codec::to_storage(to_do.reminder.as_ref()).map_err(ToDoError::invalid_reminder)?;
        let id = to_do.id;

        let updated = conn
            .update(ToDoRow {
                id,
                title: to_do.title,
                description: to_do.description,
                reminder,
            })
            .await
            .map_err(|e| ToDoError::storage("failed to update ToDo", e))?;

        if updated == 0 {
            return Err(ToDoError::NotFound(id));
        }

        debug!(todo_id = id, updated, "Updated todo");
        Ok(updated as i64)
    }

    /// Delete a todo by id.
    #[instrument(skip(self), fields(api = %api, todo_id = id))]
    pub async fn delete(&self, api: &str, id: i64) -> ToDoResult<i64> {
        check_api(api)?;
        let mut conn = self.connect().await?;

        let deleted = conn
            .delete(id)
            .await
            .map_err(|e| ToDoError::storage("failed to delete ToDo", e))?;

        if deleted == 0 {
            return Err(ToDoError::NotFound(id));
        }

        debug!(todo_id = id, deleted, "Deleted todo");
        Ok(deleted as i64)
    }

    /// Every todo, ordered by id.
    #[instrument(skip(self), fields(api = %api))]
    pub async fn read_all(&self, api: &str) -> ToDoResult<Vec<ToDo>> {
        check_api(api)?;
        let mut conn = self.connect().await?;

        let rows = conn
            .select_all()
            .await
            .map_err(|e| ToDoError::storage("failed to select from ToDo", e))?;

        rows.into_iter().map(into_wire).collect()
    }
}

fn into_wire(row: ToDoRow) -> ToDoResult<ToDo> {
    let reminder = codec::to_wire(row.reminder)
        .map_err(|e| ToDoError::storage("reminder field has invalid format", e))?;

    Ok(ToDo {
        id: row.id,
        title: row.title,
        description: row.description,
        reminder: Some(reminder),
    })
}
