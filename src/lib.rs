// src/lib.rs

pub mod config;
pub mod error;
pub mod game;
pub mod handlers;
pub mod leaderboard;
pub mod models;
pub mod routes;
pub mod state;
pub mod utils;

// Ranking entry points and the router, for callers that embed the service.
pub use leaderboard::{rank_entries, rank_users};
pub use routes::create_router;
