//! Application state: config plus the outbound LeetCode client.
//!
//! Built once at startup and shared into handlers via axum `State`.
//! Nothing here is mutable after construction; every suggestion request
//! builds its own local catalog/solved-set/candidate collections.

use tracing::{info, instrument};

use crate::config::{load_config_from_env, SuggesterConfig};
use crate::leetcode::LeetCodeClient;

#[derive(Clone)]
pub struct AppState {
    pub config: SuggesterConfig,
    pub client: LeetCodeClient,
}

impl AppState {
    /// Build state from env: load config, construct the HTTP client.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Result<Self, reqwest::Error> {
        let config = load_config_from_env();
        let client = LeetCodeClient::new(&config)?;

        info!(
            target: "leetnext_backend",
            base_url = %config.catalog_base_url,
            topic_sample_cap = config.topic_sample_cap,
            http_timeout_secs = config.http_timeout_secs,
            "LeetCode client ready"
        );

        Ok(Self { config, client })
    }
}
