//! Test fixtures for flyer-planner.
//!
//! Provides:
//! - A feature builder with sensible defaults
//! - A realistic plan response for a small Czech municipality

pub mod plan;

pub use plan::*;
