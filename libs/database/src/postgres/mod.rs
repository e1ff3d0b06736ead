//! PostgreSQL pool construction, migrations and health checks

mod config;
mod connector;
mod health;

pub use config::PostgresConfig;
pub use connector::{
    connect, connect_from_config, connect_from_config_with_retry, run_migrations,
};
pub use health::check_health;

pub use sea_orm_migration::MigratorTrait;
pub use sqlx::PgPool;
