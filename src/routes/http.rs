//! HTTP endpoint handlers. These are thin wrappers that forward to the
//! suggestion engine and re-render the form page with the outcome message.

use std::sync::Arc;

use axum::{
  extract::{Form, State},
  response::{Html, IntoResponse},
  Json,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::logic::suggest_problem;
use crate::protocol::{HealthOut, SuggestForm};
use crate::render;
use crate::state::AppState;
use crate::topics::AVAILABLE_TOPICS;
use crate::util::non_blank;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse {
  Json(HealthOut { ok: true })
}

#[instrument(level = "info", skip_all)]
pub async fn http_home() -> Html<String> {
  Html(render::page(None, AVAILABLE_TOPICS))
}

#[instrument(level = "info", skip(state, form), fields(username = %form.username, request_id = %Uuid::new_v4()))]
pub async fn http_suggest(
  State(state): State<Arc<AppState>>,
  Form(form): Form<SuggestForm>,
) -> Html<String> {
  let username = form.username.trim().to_string();
  if username.is_empty() {
    return Html(render::page(Some("Please provide a username"), AVAILABLE_TOPICS));
  }

  let difficulty = non_blank(form.difficulty);
  let topic = non_blank(form.topic);

  // StdRng rather than thread_rng: the handler future must stay Send.
  let mut rng = StdRng::from_entropy();
  let problem = suggest_problem(
    &state,
    &username,
    difficulty.as_deref(),
    topic.as_deref(),
    &mut rng,
  )
  .await;

  let message = format!("Next suggested problem for {}: {}", username, problem);
  info!(target: "suggest", %username, "Suggestion served");
  Html(render::page(Some(&message), AVAILABLE_TOPICS))
}
