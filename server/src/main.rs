// SPDX-FileCopyrightText: 2025-2026 Anauê Jungle Chalés <contato@anauechales.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use anaue_feed::{FeedClient, FeedConfig};
use anaue_server::{Result, ServerError, start_server};
use tracing_subscriber::EnvFilter;

const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port = match std::env::var("PORT") {
        Ok(value) => value
            .parse()
            .map_err(|_| ServerError::InvalidPort(value))?,
        Err(_) => DEFAULT_PORT,
    };

    let feed = FeedClient::new(FeedConfig::default())?;
    start_server(port, feed).await
}
