// SPDX-FileCopyrightText: 2025-2026 Anauê Jungle Chalés <contato@anauechales.com.br>
//
// SPDX-License-Identifier: Apache-2.0

/// Reservation calendar the property exports from its hosting platform.
const DEFAULT_ICAL_URL: &str =
    "https://www.airbnb.com.br/calendar/ical/1457198661856129067.ics?s=64254c8251f4f54cf8b4c3ae58363ea5";

/// Availability feed configuration.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct FeedConfig {
    /// iCal feed URL.
    #[serde(default = "default_ical_url")]
    pub ical_url: String,

    /// User agent sent with every fetch.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// How long a fetched snapshot stays fresh, in seconds.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
}

fn default_ical_url() -> String {
    DEFAULT_ICAL_URL.to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; Calendar-Sync/1.0)".to_string()
}

const fn default_timeout() -> u64 {
    30
}

const fn default_cache_ttl() -> u64 {
    3600
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            ical_url: default_ical_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout(),
            cache_ttl_secs: default_cache_ttl(),
        }
    }
}
