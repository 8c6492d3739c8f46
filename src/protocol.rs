//! Public protocol structs for the HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

/// Fields submitted by the suggestion form. The selects submit empty
/// strings for their "Any" choice; handlers normalize those to absent.
#[derive(Debug, Deserialize)]
pub struct SuggestForm {
    pub username: String,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}
