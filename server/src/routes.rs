// SPDX-FileCopyrightText: 2025-2026 Anauê Jungle Chalés <contato@anauechales.com.br>
//
// SPDX-License-Identifier: Apache-2.0

//! Route definitions.

use axum::{Router, routing::get};

use crate::handlers::{availability, health};
use crate::server::AppState;

/// Creates the API router.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Booked dates for the calendar view
        .route("/api/availability", get(availability))
}
