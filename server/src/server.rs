// SPDX-FileCopyrightText: 2025-2026 Anauê Jungle Chalés <contato@anauechales.com.br>
//
// SPDX-License-Identifier: Apache-2.0

//! Router assembly and server startup.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tracing::info;

use anaue_feed::FeedClient;

use crate::error::Result;
use crate::routes::routes;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Availability feed client, one per process.
    pub feed: Arc<FeedClient>,
}

/// Builds the application router. The static site is served elsewhere, so
/// CORS stays permissive.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Starts the HTTP server on the given port.
///
/// # Errors
///
/// Returns an error if binding or serving fails.
pub async fn start_server(port: u16, feed: FeedClient) -> Result<()> {
    let state = AppState {
        feed: Arc::new(feed),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("availability API listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
