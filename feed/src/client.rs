// SPDX-FileCopyrightText: 2025-2026 Anauê Jungle Chalés <contato@anauechales.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use anaue_core::Availability;
use jiff::Timestamp;
use tokio::sync::Mutex;

use crate::config::FeedConfig;
use crate::error::FeedError;
use crate::http::HttpClient;

/// One fetch cycle's derived availability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilitySnapshot {
    /// Booked days derived from the feed's events.
    pub availability: Availability,

    /// When the feed was fetched.
    pub fetched_at: Timestamp,

    /// How many well-formed events the feed contained.
    pub events_count: usize,
}

/// Client for the reservation calendar feed.
///
/// Fetches are on demand, one outbound GET per refresh, and the latest
/// snapshot is cached for [`FeedConfig::cache_ttl_secs`]. The most recent
/// fetch always wins; a failed refresh is reported to the caller rather
/// than papered over with stale data.
#[derive(Debug)]
pub struct FeedClient {
    http: HttpClient,
    config: FeedConfig,
    cache: Mutex<Option<AvailabilitySnapshot>>,
}

impl FeedClient {
    /// Creates a new feed client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let http = HttpClient::new(&config)?;
        Ok(Self {
            http,
            config,
            cache: Mutex::new(None),
        })
    }

    /// Returns the current availability snapshot, fetching the feed when the
    /// cached one has expired.
    ///
    /// # Errors
    ///
    /// Returns an error when the feed is unreachable or answers with a
    /// non-success status. No partial map is ever produced: malformed
    /// entries were already dropped during parsing, and a failed fetch
    /// yields an error instead of a half-built snapshot.
    pub async fn fetch_availability(&self) -> Result<AvailabilitySnapshot, FeedError> {
        let mut cache = self.cache.lock().await;

        if let Some(snapshot) = cache.as_ref()
            && self.is_fresh(snapshot)
        {
            tracing::debug!(fetched_at = %snapshot.fetched_at, "serving cached availability");
            return Ok(snapshot.clone());
        }

        let body = self.http.get_text(&self.config.ical_url).await?;
        let events = anaue_ical::parse_events(&body);
        let snapshot = AvailabilitySnapshot {
            availability: Availability::from_events(&events),
            fetched_at: Timestamp::now(),
            events_count: events.len(),
        };

        tracing::info!(
            events = snapshot.events_count,
            booked_days = snapshot.availability.len(),
            "availability feed refreshed"
        );

        *cache = Some(snapshot.clone());
        Ok(snapshot)
    }

    fn is_fresh(&self, snapshot: &AvailabilitySnapshot) -> bool {
        let age = Timestamp::now().duration_since(snapshot.fetched_at);
        age.as_secs() >= 0 && age.as_secs() < i64::try_from(self.config.cache_ttl_secs).unwrap_or(i64::MAX)
    }
}
