use anyhow::Result;
use citizen_portal::{config, i18n, server};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("citizen_portal=info".parse()?),
        )
        .init();

    info!("Starting citizen portal server");

    let config = config::Config::from_env()?;

    let report = i18n::CatalogValidator::validate(i18n::TranslationStore::global());
    for warning in &report.warnings {
        warn!("Translation catalog: {}", warning);
    }
    if report.has_errors() {
        anyhow::bail!("Translation catalog is invalid: {}", report.errors.join("; "));
    }
    info!(
        "Loaded {} translation keys",
        i18n::TranslationStore::global().len()
    );

    if config.ai_gateway_api_key.is_none() {
        warn!("AI_GATEWAY_API_KEY is not set; chat support requests will fail");
    }

    server::serve(config).await
}
