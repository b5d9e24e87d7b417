// SPDX-FileCopyrightText: 2025-2026 Anauê Jungle Chalés <contato@anauechales.com.br>
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP API for the Anauê booking-inquiry site.
//!
//! A single axum router: the availability endpoint the calendar view polls,
//! plus a health check. Built with axum for async HTTP handling.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;

pub use crate::error::{Result, ServerError};
pub use crate::server::{AppState, app, start_server};
