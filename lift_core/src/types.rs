//! Core domain types for the Lift workout tracker.
//!
//! This module defines the fundamental types used throughout the system:
//! - Sets (one performed unit: reps at a weight)
//! - Exercises (a named movement with an ordered run of sets)
//! - Workouts (a dated, immutable collection of exercises)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One performed unit of an exercise: a rep count at a weight.
///
/// A set has no identity of its own; it is addressed by position within its
/// exercise's ordered sequence. Both fields are non-negative by construction.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Set {
    pub reps: u32,
    pub weight: u32,
}

impl Set {
    /// Volume contribution of this set (reps × weight), widened to u64 so
    /// summing across many workouts cannot overflow.
    pub fn volume(&self) -> u64 {
        u64::from(self.reps) * u64::from(self.weight)
    }
}

/// A named movement performed for one or more sets within a single workout.
///
/// Invariant: a committed exercise always has at least one set. A zero-set
/// exercise can exist only transiently inside the builder.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    pub sets: Vec<Set>,
}

impl Exercise {
    /// Create a new exercise with a fresh id and one zeroed starter set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            sets: vec![Set::default()],
        }
    }
}

/// A dated collection of exercises, immutable once committed.
///
/// Invariant: at least one exercise, and every exercise has at least one set.
/// Workouts are only created via `WorkoutBuilder::commit` and only destroyed
/// by whole-workout deletion; no field is ever mutated after commit.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Workout {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub exercises: Vec<Exercise>,
}

/// Which field of a set an update targets.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SetField {
    Reps,
    Weight,
}
