use clap::Parser;
use todo_server::Args;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    core_config::tracing::install_color_eyre();

    todo_server::run(Args::parse()).await
}
