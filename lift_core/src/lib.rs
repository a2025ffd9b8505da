#![forbid(unsafe_code)]

//! Core domain model and business logic for the Lift workout tracker.
//!
//! This crate provides:
//! - Domain types (workouts, exercises, sets)
//! - The workout builder (mutable staging before commit)
//! - The workout repository (ordered in-memory store)
//! - Aggregate statistics (totals, volume, exercise frequency)

pub mod builder;
pub mod config;
pub mod error;
pub mod logging;
pub mod repository;
pub mod stats;
pub mod types;

// Re-export commonly used types
pub use builder::WorkoutBuilder;
pub use config::Config;
pub use error::{Error, Result};
pub use repository::WorkoutRepository;
pub use stats::{compute_stats, WorkoutStats};
pub use types::*;
