// src/handlers/mod.rs

pub mod control;
pub mod leaderboard;
pub mod quiz;
