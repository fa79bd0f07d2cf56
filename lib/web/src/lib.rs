//! A JSON API over the BeSafe air quality queries.
//!
//! Every route answers `GET` requests with a JSON array. Invalid dates are rejected with
//! `400 Bad Request`, any other failure is a `500 Internal Server Error`.

use axum::Router;
use besafe::AirQualityQueries;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

mod config;
mod error;
mod routes;

pub use config::ServerConfig;
pub use error::BeSafeServerError;

use crate::routes::create_air_quality_routes;

/// Binds to `config.bind` and serves the API until the process is stopped.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from_str(&config.bind)?;

    let app = create_router(AppState {
        queries: Arc::new(config.queries),
    });

    let app = if config.cors {
        app.layer(tower_http::cors::CorsLayer::permissive())
    } else {
        app
    };

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, cors = config.cors, "Listening");
    Ok(axum::serve(listener, app).await?)
}

pub fn create_router(app_state: AppState) -> Router {
    create_air_quality_routes().with_state(app_state)
}

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<AirQualityQueries>,
}
