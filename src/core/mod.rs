// src/core/mod.rs

pub mod prompt;
pub mod types;
pub mod workflow;
