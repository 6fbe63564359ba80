//! Shared entry point for the service binaries.

use record_service::{run, ServiceConfig, ServiceKind};
use tracing_subscriber::EnvFilter;

/// Load `.env`, install logging, read config for `kind` and serve.
pub async fn launch(kind: ServiceKind) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("record_service=info,tower_http=info")),
        )
        .init();

    let config = ServiceConfig::from_env(kind)?;
    tracing::info!(
        service = %kind,
        database = %config.database.path,
        reset_on_boot = config.schema.reset_on_boot,
        "starting"
    );
    run(config).await?;
    Ok(())
}
