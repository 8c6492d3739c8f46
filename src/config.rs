//! Loading suggester configuration from TOML (optional) and the environment.
//!
//! Every field has a default, so the binary runs with no config at all.
//! See `SuggesterConfig` for the expected schema.

use serde::Deserialize;
use tracing::{error, info};

/// Tunables for the outbound LeetCode client and the suggestion engine.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SuggesterConfig {
  /// Base URL of the catalog service; both the REST catalog endpoint and
  /// the GraphQL endpoint hang off this root.
  pub catalog_base_url: String,
  /// Upper bound on detail lookups when a topic filter is active.
  /// Each sampled candidate costs one network round trip.
  pub topic_sample_cap: usize,
  /// Client-wide request timeout in seconds.
  pub http_timeout_secs: u64,
}

impl Default for SuggesterConfig {
  fn default() -> Self {
    Self {
      catalog_base_url: "https://leetcode.com".into(),
      topic_sample_cap: 50,
      http_timeout_secs: 20,
    }
  }
}

/// Load config from SUGGESTER_CONFIG_PATH if set, falling back to defaults on
/// any IO/parse error. LEETCODE_BASE_URL overrides the base URL afterwards.
pub fn load_config_from_env() -> SuggesterConfig {
  let mut cfg = match std::env::var("SUGGESTER_CONFIG_PATH") {
    Ok(path) => match std::fs::read_to_string(&path) {
      Ok(s) => match toml::from_str::<SuggesterConfig>(&s) {
        Ok(cfg) => {
          info!(target: "leetnext_backend", %path, "Loaded suggester config (TOML)");
          cfg
        }
        Err(e) => {
          error!(target: "leetnext_backend", %path, error = %e, "Failed to parse TOML config");
          SuggesterConfig::default()
        }
      },
      Err(e) => {
        error!(target: "leetnext_backend", %path, error = %e, "Failed to read TOML config file");
        SuggesterConfig::default()
      }
    },
    Err(_) => SuggesterConfig::default(),
  };

  if let Ok(url) = std::env::var("LEETCODE_BASE_URL") {
    cfg.catalog_base_url = url.trim_end_matches('/').to_string();
  }

  cfg
}
