// src/lib.rs — Library root for tweak-agent

pub mod api;
pub mod cli;
pub mod core;
pub mod generator;
pub mod infra;
pub mod store;
pub mod theme;
pub mod util;
