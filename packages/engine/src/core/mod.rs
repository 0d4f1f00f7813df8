//! Core utilities shared across the engine.

#[macro_use]
#[path = "utils/log.rs"]
pub mod log;
