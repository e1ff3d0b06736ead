use clap::Parser;
use core_config::Environment;
use core_config::tracing::{init_tracing, install_color_eyre};
use eyre::{Result, WrapErr};
use grpc_client::ChannelConfig;
use rpc::todo::v1::to_do_service_client::ToDoServiceClient;
use todo_client::{CALL_TIMEOUT, now, run_sequence};
use tracing::info;

#[derive(Parser)]
#[command(name = "todo-client")]
#[command(about = "Run the Create/Read/Update/ReadAll/Delete sequence against a ToDo server")]
struct Cli {
    /// gRPC server in host:port format
    #[arg(long, default_value = "127.0.0.1:50051")]
    server: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();
    init_tracing(&Environment::from_env());

    let cli = Cli::parse();
    let url = if cli.server.contains("://") {
        cli.server
    } else {
        format!("http://{}", cli.server)
    };

    let config = ChannelConfig::new()
        .with_connect_timeout(CALL_TIMEOUT)
        .with_request_timeout(CALL_TIMEOUT);
    let channel = grpc_client::create_channel_with_config(url.as_str(), config)
        .await
        .wrap_err_with(|| format!("Failed to connect to {}", url))?;
    let mut client = ToDoServiceClient::new(channel);

    let id = run_sequence(&mut client, now()).await?;
    info!(id, "Sequence completed");

    Ok(())
}
