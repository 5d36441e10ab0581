use std::path::Path;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ratings_recommender::{
    api::{create_router, AppState},
    config::Config,
    models::RatingStore,
    services::sources::{load_into, seed_sample_data, CsvRatingSource},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ratings_recommender=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let delimiter = config.delimiter_byte()?;

    if config.seed_sample_data {
        seed_sample_data(Path::new(&config.ratings_path), delimiter).await?;
    }

    let source = CsvRatingSource::new(&config.ratings_path, delimiter);
    let mut store = RatingStore::new();
    let report = load_into(&source, &mut store).await?;

    if !report.warnings.is_empty() {
        tracing::warn!(
            skipped = report.warnings.len(),
            path = %config.ratings_path,
            "Some rating records were skipped"
        );
    }

    let state = AppState::new(store, config.default_top_n);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %config.bind_address(), "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
