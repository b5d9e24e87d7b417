// SPDX-FileCopyrightText: 2025-2026 Anauê Jungle Chalés <contato@anauechales.com.br>
//
// SPDX-License-Identifier: Apache-2.0

//! Request handlers for the availability API.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use tracing::error;

use anaue_core::Availability;

use crate::server::AppState;

/// Successful availability payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    /// Always `true` here.
    pub success: bool,

    /// Booked days, `date → "booked"`.
    pub availability: Availability,

    /// RFC 3339 instant of the snapshot's fetch.
    pub last_updated: String,

    /// How many well-formed events the feed contained.
    pub events_count: usize,
}

/// Failure payload: an empty map and a human-readable message, never a
/// partial mapping.
#[derive(Debug, Serialize)]
pub struct AvailabilityErrorResponse {
    /// Always `false` here.
    pub success: bool,

    /// Human-readable error message.
    pub error: String,

    /// Empty availability map.
    pub availability: Availability,
}

/// Health check endpoint.
pub async fn health() -> &'static str {
    "OK"
}

/// Returns the booked dates derived from the reservation feed.
///
/// Upstream failures are caught here, logged, and converted into a
/// structured 500 response; no error escapes this boundary.
pub async fn availability(
    State(state): State<AppState>,
) -> Result<Json<AvailabilityResponse>, (StatusCode, Json<AvailabilityErrorResponse>)> {
    match state.feed.fetch_availability().await {
        Ok(snapshot) => Ok(Json(AvailabilityResponse {
            success: true,
            availability: snapshot.availability,
            last_updated: snapshot.fetched_at.to_string(),
            events_count: snapshot.events_count,
        })),
        Err(err) => {
            error!(%err, "failed to refresh availability feed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AvailabilityErrorResponse {
                    success: false,
                    error: "Erro ao buscar disponibilidade".to_string(),
                    availability: Availability::new(),
                }),
            ))
        }
    }
}
