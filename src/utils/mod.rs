// src/utils/mod.rs

pub mod html;
pub mod lenient;
pub mod timestamp;
