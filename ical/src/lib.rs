// SPDX-FileCopyrightText: 2025-2026 Anauê Jungle Chalés <contato@anauechales.com.br>
//
// SPDX-License-Identifier: Apache-2.0

//! Parse reservation events out of iCalendar feeds.
//!
//! This is not a general iCalendar implementation. Hosting platforms export
//! reservation calendars as flat `VEVENT` blocks with day-granularity
//! boundaries, and that is the only shape handled here: a single linear scan
//! that collects `DTSTART`/`DTEND`/`SUMMARY` per block and silently drops
//! anything it cannot make sense of.

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

mod event;
mod parser;

pub use crate::event::FeedEvent;
pub use crate::parser::{DateParseError, parse_date, parse_events};
