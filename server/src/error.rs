// SPDX-FileCopyrightText: 2025-2026 Anauê Jungle Chalés <contato@anauechales.com.br>
//
// SPDX-License-Identifier: Apache-2.0

//! Server error types.

use thiserror::Error;

/// Errors from server startup.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ServerError {
    /// The platform-injected `PORT` value is not a port number.
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),

    /// Binding or serving failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Feed client initialization failed.
    #[error("feed error: {0}")]
    Feed(#[from] anaue_feed::FeedError),
}

/// Result alias for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;
