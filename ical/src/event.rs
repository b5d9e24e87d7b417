// SPDX-FileCopyrightText: 2025-2026 Anauê Jungle Chalés <contato@anauechales.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;

/// A reservation block parsed from a calendar feed.
///
/// Events are ephemeral: they are reconstructed on every fetch and carry no
/// identity beyond their position in the source feed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FeedEvent {
    /// Check-in day.
    pub start: Date,

    /// Checkout day. The interval `[start, end)` is the occupied range; the
    /// checkout day itself is free for the next guest.
    pub end: Date,

    /// Free-text summary, `"Reserva"` when the feed provides none.
    pub summary: String,
}
