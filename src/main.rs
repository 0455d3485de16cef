use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use course_recommender::{
    api::{create_router, AppState},
    config::Config,
    services::Catalog,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!(dataset = %config.dataset_path, "Loading course catalog");

    // Vectorizing and the pairwise matrix are CPU-bound
    let dataset_path = config.dataset_path.clone();
    let catalog = tokio::task::spawn_blocking(move || Catalog::load(&dataset_path))
        .await?
        .with_context(|| format!("Failed to load dataset {}", config.dataset_path))?;

    let app = create_router(AppState::new(catalog, &config));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    tracing::info!(address = %address, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
