use serde::{Deserialize, Serialize};

/// Feed client configuration.
///
/// Only the transport knobs live here; the query parameters of the price
/// feed itself are fixed (see [`crate::feed`]).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedConfig {
    /// Host serving the `webpxta` endpoint.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

// ── Defaults ─────────────────────────────────────────────────────────────────

fn default_base_url() -> String {
    "http://www.bloomberg.com".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_user_agent() -> String {
    "webpx/0.1".to_string()
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}
