//! Ordered in-memory store of committed workouts.
//!
//! Workouts are kept most-recently-committed first. The repository is the
//! sole owner of committed workouts; callers get read-only views and the only
//! mutations are insert-at-front and whole-workout deletion.

use crate::Workout;
use std::collections::VecDeque;
use uuid::Uuid;

/// Committed workouts, newest first.
#[derive(Clone, Debug, Default)]
pub struct WorkoutRepository {
    workouts: VecDeque<Workout>,
}

impl WorkoutRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a workout as the new first element. O(1) amortized.
    pub fn insert_front(&mut self, workout: Workout) {
        tracing::debug!("Storing workout {}", workout.id);
        self.workouts.push_front(workout);
    }

    /// Delete the workout with the given id, if present.
    ///
    /// Deleting an absent id is a no-op, so a duplicate delete issued from a
    /// stale render is harmless.
    pub fn delete_by_id(&mut self, id: Uuid) {
        let before = self.workouts.len();
        self.workouts.retain(|w| w.id != id);
        if self.workouts.len() < before {
            tracing::debug!("Deleted workout {}", id);
        } else {
            tracing::debug!("Delete for unknown workout {} ignored", id);
        }
    }

    /// Iterate over the workouts, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Workout> {
        self.workouts.iter()
    }

    /// Look up a workout by position (0 = newest).
    pub fn get(&self, index: usize) -> Option<&Workout> {
        self.workouts.get(index)
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }
}

impl<'a> IntoIterator for &'a WorkoutRepository {
    type Item = &'a Workout;
    type IntoIter = std::collections::vec_deque::Iter<'a, Workout>;

    fn into_iter(self) -> Self::IntoIter {
        self.workouts.iter()
    }
}
