use migration::{Migrator, cli};

/// Applies or rolls back the `todo` schema; reads `DATABASE_URL` like the server.
#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
