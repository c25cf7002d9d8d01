use std::sync::Arc;

use profile_server::{config, cors_layer, db, router, store::SqliteProfileStore, AppState};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "profile_server=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::Config::from_env()?;
    info!(port = config.port, "profile server starting");

    // Database (schema is synced by the embedded migrations)
    let pool = db::connect(&config.database_url).await?;
    info!(url = %config.database_url, "database ready");

    let state = Arc::new(AppState::new(Arc::new(SqliteProfileStore::new(pool))));

    let app = router(state)
        .layer(cors_layer(&config.cors_origins)?)
        .layer(TraceLayer::new_for_http());

    let addr = config.listen_addr();
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
