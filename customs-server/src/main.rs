use customs_axum::start_server;
use customs_server::{AppConfig, Cli, seed::seed};
use customs_sqlite::Db;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Everything logs through `tracing`; RUST_LOG picks what gets printed.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::import()?;

    let AppConfig {
        server,
        database,
        export,
    } = AppConfig::load(&cli)?;

    let db = Db::open(&database).await?;

    if cli.seed {
        seed(&db).await?;
    }

    start_server(server, export, db).await?;
    Ok(())
}
