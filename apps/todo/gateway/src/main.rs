use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::{Environment, FromEnv, shutdown_signal};
use eyre::{Result, WrapErr};
use rpc::todo::v1::to_do_service_client::ToDoServiceClient;
use todo_gateway::{GatewayConfig, router};
use tonic::codec::CompressionEncoding;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();
    init_tracing(&Environment::from_env());

    let config = GatewayConfig::from_env().wrap_err("Failed to load gateway configuration")?;

    // connects on first request
    let channel = grpc_client::create_channel_lazy(config.grpc_url.as_str())
        .wrap_err_with(|| format!("Invalid TODO_GRPC_URL: {}", config.grpc_url))?;
    let client = ToDoServiceClient::new(channel).accept_compressed(CompressionEncoding::Zstd);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .wrap_err_with(|| format!("Failed to bind {}", addr))?;

    info!(addr = %listener.local_addr()?, upstream = %config.grpc_url, "Gateway listening");

    axum::serve(listener, router(client))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("Gateway server failed")?;

    info!("Gateway stopped");
    Ok(())
}
