use anyhow::Context;
use supershop_report::config::Config;
use supershop_report::core::SystemClock;
use supershop_report::reports::{PgSalesRepository, ReportService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "supershop_report=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    tracing::info!("Starting Supershop sales report");
    tracing::info!(
        "Database: {}@{}:{}/{}",
        config.database.user,
        config.database.host,
        config.database.port,
        config.database.name
    );

    let conn = config
        .database
        .connect()
        .await
        .context("Failed to connect to the database")?;

    tracing::info!("Database connection established");

    let mut service = ReportService::new(PgSalesRepository::new(conn));
    let outcome = service
        .generate(&SystemClock, &config.app.output_dir)
        .await
        .context("Report generation failed")?;

    service
        .into_repository()
        .close()
        .await
        .context("Failed to close the database connection")?;

    tracing::info!("Report written to {}", outcome.path.display());

    Ok(())
}
