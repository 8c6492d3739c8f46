//! Domain models: catalog problems, difficulty levels, and per-problem detail.

use serde::{Deserialize, Serialize};

/// Difficulty tier as the catalog encodes it (Easy=1, Medium=2, Hard=3).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
  Easy,
  Medium,
  Hard,
}

impl Difficulty {
  /// Numeric level used by catalog records.
  pub fn level(self) -> u8 {
    match self {
      Difficulty::Easy => 1,
      Difficulty::Medium => 2,
      Difficulty::Hard => 3,
    }
  }

  /// Parse user-supplied difficulty text, case-insensitive.
  /// Anything outside {easy, medium, hard} means "no difficulty filter".
  pub fn from_input(raw: &str) -> Option<Self> {
    match raw.trim().to_ascii_lowercase().as_str() {
      "easy" => Some(Difficulty::Easy),
      "medium" => Some(Difficulty::Medium),
      "hard" => Some(Difficulty::Hard),
      _ => None,
    }
  }
}

/// One catalog entry. Immutable for the duration of a suggestion request.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Problem {
  pub title: String,
  pub slug: String,
  pub level: u8,
}

/// Topic tag attached to a problem.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TopicTag {
  pub name: String,
  pub slug: String,
}

/// Per-problem detail, fetched lazily and only when a topic filter is active.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProblemDetail {
  pub title: String,
  #[serde(rename = "titleSlug")]
  pub title_slug: String,
  pub difficulty: String,
  #[serde(rename = "topicTags", default)]
  pub topic_tags: Vec<TopicTag>,
}
