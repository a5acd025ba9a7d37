// src/models/mod.rs

pub mod answer;
pub mod event;
pub mod question;
pub mod score;
pub mod snapshot;
