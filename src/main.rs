use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use movie_recommender::{
    catalog::Catalog,
    config::Config,
    routes::{create_router, AppState},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movie_recommender=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_json_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path))?,
        None => Catalog::sample(),
    };
    tracing::info!(movie_count = catalog.len(), "Catalog ready");

    std::fs::create_dir_all(&config.static_dir)
        .with_context(|| format!("Failed to create static directory {}", config.static_dir))?;

    let state = AppState::new(catalog)
        .with_recommendation_count(config.recommendation_count)
        .with_static_dir(&config.static_dir);
    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    tracing::info!(address = %address, "Server running");

    axum::serve(listener, app).await?;

    Ok(())
}
