use axum::{routing::get, Router};
use misdeed_backend::{
    config::{get_config, init_config},
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let app_state = AppState::new(&config.backend_url, &config.drafts_path);
    info!("Proxying to backend at {}", config.backend_url);

    let app = Router::new()
        .route("/health", get(routes::health::health))
        .route(
            "/api/jobs",
            get(routes::jobs::list_jobs).post(routes::jobs::create_job),
        )
        .route("/api/misdeeds", get(routes::misdeeds::list_misdeeds))
        .route(
            "/api/drafts",
            get(routes::drafts::browse_drafts).post(routes::drafts::create_draft),
        )
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
