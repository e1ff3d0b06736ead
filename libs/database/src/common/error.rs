use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Driver errors (bad URL, refused connection, failed statement)
    #[cfg(feature = "postgres")]
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),

    /// No connection was established within the connect timeout
    #[error("Timed out connecting to the database after {0:?}")]
    ConnectTimeout(Duration),

    #[cfg(feature = "postgres")]
    #[error("Health check failed: {0}")]
    HealthCheckFailed(#[source] sqlx::Error),

    #[cfg(feature = "postgres")]
    #[error("Migration failed: {0}")]
    Migration(#[source] sea_orm::DbErr),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;
