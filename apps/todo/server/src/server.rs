//! gRPC server initialization and lifecycle management
//!
//! This module handles all server setup:
//! - Tracing initialization
//! - Database connection and migrations
//! - Service creation
//! - gRPC server configuration and startup
//! - Health check service (grpc.health.v1.Health)
//! - Graceful shutdown

use clap::Parser;
use core_config::{Environment, FromEnv, shutdown_signal};
use database::postgres::{
    PostgresConfig, check_health, connect_from_config_with_retry, run_migrations,
};
use domain_todo::{PgToDoStore, ToDoService};
use eyre::{Result, WrapErr};
use grpc_client::server::{GrpcServer, GrpcServerConfig, create_health_service};
use migration::Migrator;
use rpc::todo::v1::to_do_service_server::SERVICE_NAME;
use tonic::transport::Server;
use tracing::info;

use crate::service::grpc_service;

/// Command-line overrides; anything not given falls back to the environment.
#[derive(Parser, Debug, Default)]
#[command(name = "todo-server")]
#[command(about = "ToDo gRPC service backed by PostgreSQL")]
pub struct Args {
    /// gRPC port to bind (overrides GRPC_PORT)
    #[arg(long = "grpc-port")]
    pub grpc_port: Option<u16>,

    /// PostgreSQL connection URL (overrides DATABASE_URL)
    #[arg(long = "database-url")]
    pub database_url: Option<String>,
}

fn load_config(args: &Args) -> Result<(PostgresConfig, GrpcServerConfig)> {
    let mut grpc = GrpcServerConfig::from_env().wrap_err("Failed to load gRPC configuration")?;
    if let Some(port) = args.grpc_port {
        grpc = grpc.with_port(port);
    }

    let database = match &args.database_url {
        Some(url) => PostgresConfig::from_env_with_url(url.as_str()),
        None => PostgresConfig::from_env(),
    }
    .wrap_err("Failed to load database configuration")?;

    Ok((database, grpc))
}

/// Run the gRPC server until Ctrl-C or SIGTERM.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration is invalid
/// - Database connection or migrations fail
/// - Server binding fails
pub async fn run(args: Args) -> Result<()> {
    let environment = Environment::from_env();
    core_config::tracing::init_tracing(&environment);

    let (db_config, grpc_config) = load_config(&args)?;
    let addr = grpc_config
        .socket_addr()
        .wrap_err_with(|| format!("Invalid server address: {}", grpc_config.addr_string()))?;

    info!("Connecting to database...");
    let pool = connect_from_config_with_retry(&db_config, None)
        .await
        .wrap_err("Failed to connect to database")?;
    check_health(&pool)
        .await
        .wrap_err("Database health check failed")?;
    info!(
        max_connections = db_config.max_connections,
        "Connected to database successfully"
    );

    if db_config.run_migrations {
        run_migrations::<Migrator>(&pool, "todo-server")
            .await
            .wrap_err("Failed to run database migrations")?;
    }

    let service = ToDoService::new(PgToDoStore::new(pool.clone()));

    let (health_reporter, health_service) = create_health_service();
    GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
    GrpcServer::log_startup(&grpc_config, SERVICE_NAME);

    let shutdown = async {
        shutdown_signal().await;
        GrpcServer::mark_not_serving(&health_reporter, SERVICE_NAME).await;
    };

    Server::builder()
        .timeout(grpc_config.request_timeout())
        .add_service(health_service)
        .add_service(grpc_service(service, grpc_config.enable_compression))
        .serve_with_shutdown(addr, shutdown)
        .await
        .wrap_err("gRPC server failed")?;

    pool.close().await;
    info!("Server stopped, database pool closed");

    Ok(())
}
