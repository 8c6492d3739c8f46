//! Suggestion engine: compose the three fetchers, filter, pick at random.
//!
//! This includes:
//!   - Difficulty text mapping and unsolved-candidate filtering
//!   - The capped topic sampling loop (one detail fetch per candidate)
//!   - Uniform random selection through a caller-supplied Rng
//!
//! Every fetcher failure is logged here and degraded to an empty/absent
//! result; the engine's return value is always a plain user-facing string.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, error, info, instrument, warn};

use crate::domain::{Difficulty, Problem, ProblemDetail};
use crate::state::AppState;

/// Returned when the catalog comes back empty or unfetchable.
pub const CATALOG_ERROR_MESSAGE: &str = "Error fetching problem data from LeetCode.";

/// Returned when filtering leaves nothing to suggest.
pub const NO_UNSOLVED_MESSAGE: &str = "No unsolved problems found with the selected criteria.";

/// Suggest one unsolved problem for `username`, optionally filtered by
/// difficulty text and topic text. Randomness comes from `rng` so callers
/// (and tests) control the source.
#[instrument(level = "info", skip(state, rng), fields(%username, ?difficulty, ?topic))]
pub async fn suggest_problem<R: Rng>(
  state: &AppState,
  username: &str,
  difficulty: Option<&str>,
  topic: Option<&str>,
  rng: &mut R,
) -> String {
  let solved = match state.client.fetch_solved_set(username).await {
    Ok(solved) => solved,
    Err(e) => {
      warn!(target: "suggest", %username, error = %e, "Solved-set fetch failed; treating as empty");
      HashSet::new()
    }
  };

  let catalog = match state.client.fetch_catalog().await {
    Ok(catalog) => catalog,
    Err(e) => {
      error!(target: "suggest", error = %e, "Catalog fetch failed");
      Vec::new()
    }
  };

  suggest_from_catalog(state, catalog, solved, difficulty, topic, rng).await
}

/// Steps 2-10 of the suggestion flow, starting from already-fetched inputs.
/// Split out so scenario tests can drive it without a live catalog service.
pub async fn suggest_from_catalog<R: Rng>(
  state: &AppState,
  catalog: Vec<Problem>,
  solved: HashSet<String>,
  difficulty: Option<&str>,
  topic: Option<&str>,
  rng: &mut R,
) -> String {
  // Empty means "unusable", not "zero problems exist".
  if catalog.is_empty() {
    return CATALOG_ERROR_MESSAGE.into();
  }

  let wanted = difficulty.and_then(Difficulty::from_input);
  let candidates = unsolved_candidates(catalog, &solved, wanted);
  if candidates.is_empty() {
    info!(target: "suggest", ?wanted, "No unsolved candidates after filtering");
    return NO_UNSOLVED_MESSAGE.into();
  }

  let topic = topic.map(str::trim).filter(|t| !t.is_empty());
  let Some(topic) = topic else {
    return match candidates.choose(rng) {
      Some(p) => p.title.clone(),
      None => NO_UNSOLVED_MESSAGE.into(),
    };
  };

  let matches = collect_topic_matches(state, &candidates, topic, rng).await;
  if let Some(p) = matches.choose(rng) {
    return p.title.clone();
  }

  // Fall back to the whole unsolved list, not just the inspected sample.
  info!(target: "suggest", %topic, "No sampled candidate matched the topic; picking a random unsolved problem");
  match candidates.choose(rng) {
    Some(p) => format!(
      "No problems found matching '{}'. Here's a random problem instead: {}",
      topic, p.title
    ),
    None => NO_UNSOLVED_MESSAGE.into(),
  }
}

/// Difficulty filter (or keep all), then drop anything already solved.
pub fn unsolved_candidates(
  catalog: Vec<Problem>,
  solved: &HashSet<String>,
  difficulty: Option<Difficulty>,
) -> Vec<Problem> {
  catalog
    .into_iter()
    .filter(|p| difficulty.map_or(true, |d| p.level == d.level()))
    .filter(|p| !solved.contains(&p.slug))
    .collect()
}

/// Case-folded substring match against every tag name. A problem with zero
/// tags never matches a non-empty topic.
pub fn topic_matches(detail: &ProblemDetail, topic: &str) -> bool {
  let needle = topic.to_lowercase();
  detail
    .topic_tags
    .iter()
    .any(|tag| tag.name.to_lowercase().contains(&needle))
}

/// Inspect a random sample of candidates (bounded by the configured cap,
/// one sequential detail fetch each) and keep the ones matching `topic`.
async fn collect_topic_matches<R: Rng>(
  state: &AppState,
  candidates: &[Problem],
  topic: &str,
  rng: &mut R,
) -> Vec<Problem> {
  let cap = state.config.topic_sample_cap.min(candidates.len());
  let sample: Vec<&Problem> = candidates.choose_multiple(rng, cap).collect();
  info!(target: "suggest", checking = sample.len(), %topic, "Checking sampled candidates for topic");

  let mut matches = Vec::new();
  for problem in sample {
    match state.client.fetch_problem_detail(&problem.slug).await {
      Ok(Some(detail)) => {
        let tags: Vec<&str> = detail.topic_tags.iter().map(|t| t.name.as_str()).collect();
        debug!(target: "suggest", slug = %problem.slug, ?tags, "Inspected candidate topics");
        if topic_matches(&detail, topic) {
          info!(target: "suggest", slug = %problem.slug, "Found matching problem");
          matches.push(problem.clone());
        }
      }
      Ok(None) => {
        debug!(target: "suggest", slug = %problem.slug, "No detail for candidate; skipping");
      }
      Err(e) => {
        warn!(target: "suggest", slug = %problem.slug, error = %e, "Detail fetch failed; skipping candidate");
      }
    }
  }
  matches
}
