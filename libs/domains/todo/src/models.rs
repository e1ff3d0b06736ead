use chrono::NaiveDateTime;

/// A row of the `todo` table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ToDoRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub reminder: NaiveDateTime,
}

/// Column values for an insert; `id` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewToDoRow {
    pub title: String,
    pub description: String,
    pub reminder: NaiveDateTime,
}

impl NewToDoRow {
    pub fn with_id(self, id: i64) -> ToDoRow {
        ToDoRow {
            id,
            title: self.title,
            description: self.description,
            reminder: self.reminder,
        }
    }
}
