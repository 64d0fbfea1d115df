use clap::Parser;
use dotenvy::dotenv;
use optimark::cli::{Cli, dispatch};
use optimark_config::{DatabaseConfig, SchemaConfig};
use optimark_core::AppError;
use optimark_db::init_db_pool;
use optimark_observability::init_logging;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv().ok();
    init_logging();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::debug!(kind = ?e.kind, error = ?e.error, "Command failed");
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let database = DatabaseConfig::from_env();
    let schema = SchemaConfig::from_env();

    let pool = init_db_pool(&database);
    let result = dispatch(&pool, &schema, cli.command).await;
    pool.close().await;

    result
}
