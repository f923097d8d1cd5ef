mod app;
mod doc;
mod dtos;
mod encode;
mod metrics;
mod notice;
mod routes;
mod state;
mod utils;
mod views;

use catalog::CatalogStore;
use state::AppState;
use std::env;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let catalog_file =
        env::var("CATALOG_FILE").unwrap_or_else(|_| "course_catalog.json".to_string());
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    let state = AppState::new(CatalogStore::new(&catalog_file));
    let app = app::app(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("failed to bind listener");
    info!(addr = %bind_addr, catalog = %catalog_file, "serving course catalog");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(utils::shutdown::shutdown_signal())
    .await
    .expect("server error");
}
