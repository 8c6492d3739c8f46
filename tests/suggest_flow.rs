//! End-to-end suggestion flows against a local mock of the LeetCode API.
//!
//! The mock serves the catalog REST endpoint and both GraphQL query shapes
//! from an ephemeral port; the client under test is pointed at it through
//! the config base URL.

use std::collections::HashSet;
use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use leetnext_backend::config::SuggesterConfig;
use leetnext_backend::leetcode::LeetCodeClient;
use leetnext_backend::logic::{suggest_problem, CATALOG_ERROR_MESSAGE, NO_UNSOLVED_MESSAGE};
use leetnext_backend::state::AppState;

async fn mock_catalog() -> Json<Value> {
  Json(json!({
    "stat_status_pairs": [
      {
        "stat": { "question__title": "Two Sum", "question__title_slug": "two-sum" },
        "difficulty": { "level": 1 }
      },
      {
        "stat": { "question__title": "Valid Parentheses", "question__title_slug": "valid-parentheses" },
        "difficulty": { "level": 1 }
      },
      {
        "stat": { "question__title": "Add Two Numbers", "question__title_slug": "add-two-numbers" },
        "difficulty": { "level": 2 }
      },
      {
        "stat": { "question__title": "Median of Two Sorted Arrays", "question__title_slug": "median-of-two-sorted-arrays" },
        "difficulty": { "level": 3 }
      }
    ]
  }))
}

fn mock_question(slug: &str) -> Value {
  let (title, difficulty, tags): (&str, &str, &[&str]) = match slug {
    "two-sum" => ("Two Sum", "Easy", &["Array", "Hash Table"]),
    "valid-parentheses" => ("Valid Parentheses", "Easy", &["String", "Stack"]),
    "add-two-numbers" => ("Add Two Numbers", "Medium", &["Linked List", "Math"]),
    "median-of-two-sorted-arrays" => {
      ("Median of Two Sorted Arrays", "Hard", &["Array", "Binary Search"])
    }
    _ => return json!({ "data": { "question": null } }),
  };
  let topic_tags: Vec<Value> = tags
    .iter()
    .map(|name| json!({ "name": name, "slug": name.to_lowercase().replace(' ', "-") }))
    .collect();
  json!({
    "data": {
      "question": {
        "title": title,
        "titleSlug": slug,
        "difficulty": difficulty,
        "topicTags": topic_tags
      }
    }
  })
}

fn slug_in_query(query: &str) -> Option<&str> {
  let start = query.find("titleSlug: \"")? + "titleSlug: \"".len();
  let rest = &query[start..];
  Some(&rest[..rest.find('"')?])
}

async fn mock_graphql(Json(body): Json<Value>) -> Json<Value> {
  let query = body["query"].as_str().unwrap_or_default();

  if query.contains("matchedUser") {
    // `alice` has one accepted problem (solved twice) and one rejected try.
    if query.contains(r#"username: "alice""#) {
      return Json(json!({
        "data": {
          "matchedUser": {
            "submissions": {
              "edges": [
                { "node": { "status": "AC", "titleSlug": "two-sum" } },
                { "node": { "status": "AC", "titleSlug": "two-sum" } },
                { "node": { "status": "TLE", "titleSlug": "valid-parentheses" } }
              ]
            }
          }
        }
      }));
    }
    return Json(json!({ "data": { "matchedUser": null } }));
  }

  match slug_in_query(query) {
    Some(slug) => Json(mock_question(slug)),
    None => Json(json!({ "data": null })),
  }
}

async fn spawn(app: Router) -> SocketAddr {
  let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind mock");
  let addr = listener.local_addr().expect("mock addr");
  tokio::spawn(async move {
    axum::serve(listener, app).await.expect("serve mock");
  });
  addr
}

async fn spawn_mock() -> SocketAddr {
  spawn(
    Router::new()
      .route("/api/problems/all/", get(mock_catalog))
      .route("/graphql", post(mock_graphql)),
  )
  .await
}

fn state_for(addr: SocketAddr) -> AppState {
  let config = SuggesterConfig {
    catalog_base_url: format!("http://{addr}"),
    ..SuggesterConfig::default()
  };
  let client = LeetCodeClient::new(&config).expect("client");
  AppState { config, client }
}

#[tokio::test]
async fn catalog_fetch_is_idempotent() {
  let state = state_for(spawn_mock().await);
  let first = state.client.fetch_catalog().await.expect("first fetch");
  let second = state.client.fetch_catalog().await.expect("second fetch");
  assert_eq!(first.len(), 4);
  assert_eq!(first, second);
}

#[tokio::test]
async fn solved_set_keeps_only_accepted_slugs_and_collapses_duplicates() {
  let state = state_for(spawn_mock().await);
  let solved = state.client.fetch_solved_set("alice").await.expect("solved set");
  let expected: HashSet<String> = ["two-sum".to_string()].into_iter().collect();
  assert_eq!(solved, expected);
}

#[tokio::test]
async fn unmatched_account_yields_empty_solved_set() {
  let state = state_for(spawn_mock().await);
  let solved = state.client.fetch_solved_set("nobody").await.expect("solved set");
  assert!(solved.is_empty());
}

#[tokio::test]
async fn problem_detail_carries_topic_tags() {
  let state = state_for(spawn_mock().await);
  let detail = state
    .client
    .fetch_problem_detail("median-of-two-sorted-arrays")
    .await
    .expect("detail fetch")
    .expect("question present");
  assert_eq!(detail.title, "Median of Two Sorted Arrays");
  let names: Vec<&str> = detail.topic_tags.iter().map(|t| t.name.as_str()).collect();
  assert_eq!(names, vec!["Array", "Binary Search"]);

  let absent = state
    .client
    .fetch_problem_detail("no-such-problem")
    .await
    .expect("detail fetch");
  assert!(absent.is_none());
}

#[tokio::test]
async fn suggestion_skips_solved_problems() {
  let state = state_for(spawn_mock().await);
  let mut rng = StdRng::seed_from_u64(1);
  // Easy problems are two-sum (solved) and valid-parentheses.
  let got = suggest_problem(&state, "alice", Some("easy"), None, &mut rng).await;
  assert_eq!(got, "Valid Parentheses");
}

#[tokio::test]
async fn topic_filter_returns_the_matching_problem() {
  let state = state_for(spawn_mock().await);
  let mut rng = StdRng::seed_from_u64(1);
  // Only Median of Two Sorted Arrays carries a tag containing "binary".
  let got = suggest_problem(&state, "nobody", None, Some("binary"), &mut rng).await;
  assert_eq!(got, "Median of Two Sorted Arrays");
}

#[tokio::test]
async fn unmatched_topic_falls_back_to_a_random_unsolved_problem() {
  let state = state_for(spawn_mock().await);
  let mut rng = StdRng::seed_from_u64(1);
  let got = suggest_problem(&state, "nobody", None, Some("geometry"), &mut rng).await;
  assert!(
    got.starts_with("No problems found matching 'geometry'. Here's a random problem instead: "),
    "unexpected message: {got}"
  );
  let titles = [
    "Two Sum",
    "Valid Parentheses",
    "Add Two Numbers",
    "Median of Two Sorted Arrays",
  ];
  assert!(titles.iter().any(|t| got.ends_with(t)), "unexpected fallback: {got}");
}

#[tokio::test]
async fn fully_solved_criteria_yield_the_empty_candidates_message() {
  // Restrict to easy and mark both easy problems as solved upstream by
  // filtering against a catalog where alice solved the only easy problem.
  let app = Router::new()
    .route(
      "/api/problems/all/",
      get(|| async {
        Json(json!({
          "stat_status_pairs": [
            {
              "stat": { "question__title": "Two Sum", "question__title_slug": "two-sum" },
              "difficulty": { "level": 1 }
            }
          ]
        }))
      }),
    )
    .route("/graphql", post(mock_graphql));
  let state = state_for(spawn(app).await);
  let mut rng = StdRng::seed_from_u64(1);
  let got = suggest_problem(&state, "alice", Some("easy"), None, &mut rng).await;
  assert_eq!(got, NO_UNSOLVED_MESSAGE);
}

#[tokio::test]
async fn catalog_failure_degrades_to_the_error_message() {
  let app = Router::new()
    .route("/api/problems/all/", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
    .route("/graphql", post(mock_graphql));
  let state = state_for(spawn(app).await);
  let mut rng = StdRng::seed_from_u64(1);
  for (difficulty, topic) in [(None, None), (Some("easy"), Some("array"))] {
    let got = suggest_problem(&state, "alice", difficulty, topic, &mut rng).await;
    assert_eq!(got, CATALOG_ERROR_MESSAGE);
  }
}

#[tokio::test]
async fn solved_set_failure_degrades_to_empty_not_an_error() {
  let app = Router::new()
    .route("/api/problems/all/", get(mock_catalog))
    .route("/graphql", post(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
  let state = state_for(spawn(app).await);
  let mut rng = StdRng::seed_from_u64(1);
  // With the solved set degraded to empty, every easy problem is a candidate.
  let got = suggest_problem(&state, "alice", Some("easy"), None, &mut rng).await;
  assert!(
    got == "Two Sum" || got == "Valid Parentheses",
    "unexpected suggestion: {got}"
  );
}
