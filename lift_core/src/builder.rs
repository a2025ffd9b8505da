//! Mutable staging area for composing a workout before it is committed.
//!
//! The builder accumulates exercises and sets while the user is mid-workout.
//! Nothing in it is durable: `commit` moves the staged exercises into an
//! immutable [`Workout`] and resets the builder for the next session.
//!
//! Operations referencing a stale exercise id or set index are silent no-ops,
//! so a presentation layer re-issuing an action from an outdated render can
//! never corrupt staged state.

use crate::{Error, Exercise, Result, Set, SetField, Workout};
use chrono::Utc;
use uuid::Uuid;

/// In-progress workout state.
#[derive(Clone, Debug, Default)]
pub struct WorkoutBuilder {
    exercises: Vec<Exercise>,
}

impl WorkoutBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the staged exercises, in insertion order.
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    /// True when nothing has been staged yet.
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Stage a new exercise with one zeroed starter set.
    ///
    /// Blank names (empty or whitespace-only after trimming) are silently
    /// refused and `None` is returned. On success the new exercise's id is
    /// returned so the caller can address follow-up set operations.
    pub fn add_exercise(&mut self, name: &str) -> Option<Uuid> {
        let name = name.trim();
        if name.is_empty() {
            tracing::debug!("Ignoring blank exercise name");
            return None;
        }

        let exercise = Exercise::new(name);
        let id = exercise.id;
        self.exercises.push(exercise);
        tracing::debug!("Staged exercise {:?} ({})", name, id);
        Some(id)
    }

    /// Append a zeroed set to the named exercise.
    ///
    /// No-op when `exercise_id` is not staged.
    pub fn add_set(&mut self, exercise_id: Uuid) {
        if let Some(exercise) = self.exercise_mut(exercise_id) {
            exercise.sets.push(Set::default());
            tracing::debug!(
                "Added set {} to exercise {}",
                exercise.sets.len(),
                exercise_id
            );
        }
    }

    /// Replace the reps or weight of one staged set.
    ///
    /// `value` is clamped to non-negative; negative input is stored as 0.
    /// No-op when the exercise id or set index is stale.
    pub fn update_set(&mut self, exercise_id: Uuid, set_index: usize, field: SetField, value: i64) {
        let clamped = value.max(0).min(i64::from(u32::MAX)) as u32;
        if let Some(set) = self
            .exercise_mut(exercise_id)
            .and_then(|ex| ex.sets.get_mut(set_index))
        {
            match field {
                SetField::Reps => set.reps = clamped,
                SetField::Weight => set.weight = clamped,
            }
        }
    }

    /// Remove the set at `set_index` from the named exercise.
    ///
    /// An exercise's last remaining set cannot be removed; that attempt fails
    /// with [`Error::InvalidOperation`] so a committed exercise always keeps
    /// at least one set. Stale ids/indices are a no-op.
    pub fn remove_set(&mut self, exercise_id: Uuid, set_index: usize) -> Result<()> {
        let Some(exercise) = self.exercise_mut(exercise_id) else {
            return Ok(());
        };
        if set_index >= exercise.sets.len() {
            return Ok(());
        }
        if exercise.sets.len() == 1 {
            return Err(Error::InvalidOperation(
                "an exercise must keep at least one set".into(),
            ));
        }
        exercise.sets.remove(set_index);
        Ok(())
    }

    /// Remove an exercise entirely, regardless of its set count.
    ///
    /// No-op when `exercise_id` is not staged.
    pub fn remove_exercise(&mut self, exercise_id: Uuid) {
        let before = self.exercises.len();
        self.exercises.retain(|ex| ex.id != exercise_id);
        if self.exercises.len() < before {
            tracing::debug!("Removed exercise {}", exercise_id);
        }
    }

    /// Commit the staged exercises into an immutable [`Workout`].
    ///
    /// Fails with [`Error::EmptyWorkout`] (builder untouched) when nothing is
    /// staged. On success the workout gets a fresh id and the current time,
    /// ownership of the exercises moves into it, and the builder is left
    /// empty for the next session.
    pub fn commit(&mut self) -> Result<Workout> {
        if self.exercises.is_empty() {
            return Err(Error::EmptyWorkout);
        }

        let workout = Workout {
            id: Uuid::new_v4(),
            date: Utc::now(),
            exercises: std::mem::take(&mut self.exercises),
        };

        tracing::info!(
            "Committed workout {} with {} exercises",
            workout.id,
            workout.exercises.len()
        );
        Ok(workout)
    }

    fn exercise_mut(&mut self, exercise_id: Uuid) -> Option<&mut Exercise> {
        self.exercises.iter_mut().find(|ex| ex.id == exercise_id)
    }
}
