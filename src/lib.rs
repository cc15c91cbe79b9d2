//! Roster: a minimal user directory HTTP service backed by MongoDB.
//!
//! The crate is split into a thin store layer (`store`), the HTTP surface
//! (`routes` + `users`), and the shared infra pieces (`infra`, `errors`).

pub mod errors;
pub mod infra;
pub mod routes;
pub mod store;
pub mod users;

pub use infra::app_state::AppState;
