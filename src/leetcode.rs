//! Minimal LeetCode client for our use-cases.
//!
//! Three read-only calls: the full problem catalog (REST), a user's recent
//! submissions (GraphQL), and per-problem detail with topic tags (GraphQL).
//! Calls are instrumented and log statuses, latencies, and result sizes
//! (not response bodies).
//!
//! Failures come back classified (`FetchError`); the suggestion engine is
//! the one place that decides to degrade them to empty/absent results.

use std::collections::HashSet;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::config::SuggesterConfig;
use crate::domain::{Problem, ProblemDetail};

/// Only the most recent 100 submissions are inspected; accepted solves
/// older than this window are treated as unsolved. Fixed by contract.
const SUBMISSION_WINDOW: u32 = 100;

/// Submission status marker for an accepted solve.
const ACCEPTED_STATUS: &str = "AC";

/// Classified failure of one outbound call.
#[derive(Debug, Error)]
pub enum FetchError {
  #[error("transport error: {0}")]
  Transport(#[from] reqwest::Error),
  #[error("unexpected status {0}")]
  Status(StatusCode),
  #[error("unexpected response shape: {0}")]
  Shape(String),
}

#[derive(Clone)]
pub struct LeetCodeClient {
  client: reqwest::Client,
  base_url: String,
}

impl LeetCodeClient {
  /// Build the client from config. The timeout is client-wide; individual
  /// calls have no tighter deadline.
  pub fn new(config: &SuggesterConfig) -> Result<Self, reqwest::Error> {
    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(config.http_timeout_secs))
      .build()?;

    Ok(Self {
      client,
      base_url: config.catalog_base_url.trim_end_matches('/').to_string(),
    })
  }

  /// Fetch the full problem catalog.
  ///
  /// An `Ok` with an empty list means the service answered but listed
  /// nothing under `stat_status_pairs`; callers must treat empty as
  /// "unusable", not "zero problems exist".
  #[instrument(level = "info", skip(self))]
  pub async fn fetch_catalog(&self) -> Result<Vec<Problem>, FetchError> {
    let url = format!("{}/api/problems/all/", self.base_url);
    let start = std::time::Instant::now();

    let res = self.client.get(&url)
      .header(USER_AGENT, "leetnext-backend/0.1")
      .send().await?;

    if !res.status().is_success() {
      return Err(FetchError::Status(res.status()));
    }

    let body: CatalogResponse = res.json().await
      .map_err(|e| FetchError::Shape(e.to_string()))?;

    let problems: Vec<Problem> = body.stat_status_pairs.into_iter()
      .map(|pair| Problem {
        title: pair.stat.title,
        slug: pair.stat.slug,
        level: pair.difficulty.level,
      })
      .collect();

    info!(target: "suggest", count = problems.len(), elapsed = ?start.elapsed(), "Catalog fetched");
    Ok(problems)
  }

  /// Fetch the set of problem slugs the user has accepted submissions for.
  ///
  /// A user with no matched account (or a response missing any nested key)
  /// yields an empty set, indistinguishable from "solved nothing".
  #[instrument(level = "info", skip(self), fields(%username))]
  pub async fn fetch_solved_set(&self, username: &str) -> Result<HashSet<String>, FetchError> {
    let query = format!(
      r#"
      {{
        matchedUser(username: "{username}") {{
          submissions(first: {SUBMISSION_WINDOW}) {{
            edges {{
              node {{
                status
                titleSlug
              }}
            }}
          }}
        }}
      }}
      "#
    );

    let body: GraphqlEnvelope<MatchedUserData> = self.post_graphql(&query).await?;

    let edges = body.data
      .and_then(|d| d.matched_user)
      .and_then(|u| u.submissions)
      .and_then(|s| s.edges);

    let Some(edges) = edges else {
      warn!(target: "suggest", %username, "No submission data found for the given username");
      return Ok(HashSet::new());
    };

    let solved: HashSet<String> = edges.into_iter()
      .filter(|e| e.node.status.as_deref() == Some(ACCEPTED_STATUS))
      .map(|e| e.node.title_slug)
      .collect();

    info!(target: "suggest", %username, solved = solved.len(), "Solved set fetched");
    Ok(solved)
  }

  /// Fetch detail (title, difficulty, topic tags) for a single problem.
  /// `Ok(None)` means the service answered but knows no such question.
  #[instrument(level = "debug", skip(self), fields(%slug))]
  pub async fn fetch_problem_detail(&self, slug: &str) -> Result<Option<ProblemDetail>, FetchError> {
    let query = format!(
      r#"
      {{
        question(titleSlug: "{slug}") {{
          title
          titleSlug
          difficulty
          topicTags {{
            name
            slug
          }}
        }}
      }}
      "#
    );

    let body: GraphqlEnvelope<QuestionData> = self.post_graphql(&query).await?;
    Ok(body.data.and_then(|d| d.question))
  }

  /// One GraphQL round trip: POST the query string, check status, decode.
  async fn post_graphql<T: for<'a> Deserialize<'a>>(&self, query: &str) -> Result<T, FetchError> {
    let url = format!("{}/graphql", self.base_url);
    let res = self.client.post(&url)
      .header(USER_AGENT, "leetnext-backend/0.1")
      .header(CONTENT_TYPE, "application/json")
      .json(&serde_json::json!({ "query": query }))
      .send().await?;

    if !res.status().is_success() {
      return Err(FetchError::Status(res.status()));
    }

    res.json().await.map_err(|e| FetchError::Shape(e.to_string()))
  }
}

// --- Wire DTOs ---

#[derive(Deserialize)]
struct CatalogResponse {
  #[serde(default)]
  stat_status_pairs: Vec<StatPair>,
}
#[derive(Deserialize)]
struct StatPair {
  stat: Stat,
  difficulty: DifficultyLevel,
}
#[derive(Deserialize)]
struct Stat {
  #[serde(rename = "question__title")]
  title: String,
  #[serde(rename = "question__title_slug")]
  slug: String,
}
#[derive(Deserialize)]
struct DifficultyLevel {
  level: u8,
}

#[derive(Deserialize)]
struct GraphqlEnvelope<T> {
  data: Option<T>,
}

#[derive(Deserialize)]
struct MatchedUserData {
  #[serde(rename = "matchedUser")]
  matched_user: Option<MatchedUser>,
}
#[derive(Deserialize)]
struct MatchedUser {
  submissions: Option<Submissions>,
}
#[derive(Deserialize)]
struct Submissions {
  edges: Option<Vec<SubmissionEdge>>,
}
#[derive(Deserialize)]
struct SubmissionEdge {
  node: SubmissionNode,
}
#[derive(Deserialize)]
struct SubmissionNode {
  status: Option<String>,
  #[serde(rename = "titleSlug")]
  title_slug: String,
}

#[derive(Deserialize)]
struct QuestionData {
  question: Option<ProblemDetail>,
}
