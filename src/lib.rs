//! LeetNext · LeetCode Problem Suggester Backend
//!
//! Library target so integration tests can drive the router and the
//! outbound client directly; the binary in `main.rs` stays thin.

pub mod config;
pub mod domain;
pub mod leetcode;
pub mod logic;
pub mod protocol;
pub mod render;
pub mod routes;
pub mod state;
pub mod telemetry;
pub mod topics;
pub mod util;
