use sqlx::PgPool;
use tracing::debug;

use crate::common::DatabaseError;

/// Runs `SELECT 1` on a pooled connection.
pub async fn check_health(pool: &PgPool) -> Result<(), DatabaseError> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(DatabaseError::HealthCheckFailed)?;

    debug!("PostgreSQL health check passed");
    Ok(())
}
