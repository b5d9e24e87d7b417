// SPDX-FileCopyrightText: 2025-2026 Anauê Jungle Chalés <contato@anauechales.com.br>
//
// SPDX-License-Identifier: Apache-2.0

//! Client for the hosting platform's reservation calendar feed.
//!
//! One fixed iCal URL, fetched on demand and turned into the day-granularity
//! [`anaue_core::Availability`] map. Snapshots are cached in memory for an
//! hour; nothing persists between processes.

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

mod client;
mod config;
mod error;
mod http;

pub use crate::client::{AvailabilitySnapshot, FeedClient};
pub use crate::config::FeedConfig;
pub use crate::error::FeedError;
