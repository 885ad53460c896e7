use recs_axum::start_server;
use recs_sqlite::Db;
use recsd::{AppConfig, Cli, impls::DemoApp, seed};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // By convention, we leverage `tracing` to instrument and log various
    // operations throughout this project.
    // Accordingly, we likely want to subscribe to these events so we can
    // write them to stdio and possibly some durable location.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI args, then layer the configuration on top of them
    let cli = Cli::import()?;
    let AppConfig {
        server,
        database,
        recompute,
    } = AppConfig::load(&cli)?;

    // Open database with config
    let db = Db::open(&database).await?;

    // If requested, install the demonstration data before serving.
    if cli.seed {
        seed::run(&db, recompute).await?;
    }

    let app = DemoApp { db, recompute };
    start_server(server, app).await?;

    Ok(())
}
