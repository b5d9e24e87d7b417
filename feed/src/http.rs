// SPDX-FileCopyrightText: 2025-2026 Anauê Jungle Chalés <contato@anauechales.com.br>
//
// SPDX-License-Identifier: Apache-2.0

//! Thin reqwest wrapper with timeout, user agent, and status mapping.

use reqwest::Client;

use crate::config::FeedConfig;
use crate::error::FeedError;

/// HTTP client for feed fetches.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: &FeedConfig) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches a URL and returns the response body as text.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Status`] on any non-success status and
    /// [`FeedError::Http`] on transport failures.
    pub async fn get_text(&self, url: &str) -> Result<String, FeedError> {
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        Ok(resp.text().await?)
    }
}
