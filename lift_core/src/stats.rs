//! Aggregate progress statistics over committed workouts.
//!
//! Every function here is pure: it walks whatever snapshot of workouts it is
//! handed and holds no state between calls. Totals are recomputed from
//! scratch each time, which is cheap because all data comes from manual
//! single-user entry.

use crate::Workout;
use serde::Serialize;
use std::collections::HashMap;

/// Summary of all committed workouts, as rendered by the stats view.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct WorkoutStats {
    pub total_workouts: usize,
    pub total_exercises: usize,
    pub total_sets: usize,
    pub total_volume: u64,
    pub top_exercises: Vec<(String, u64)>,
}

/// Number of workouts in the snapshot.
pub fn total_workouts<'a>(workouts: impl IntoIterator<Item = &'a Workout>) -> usize {
    workouts.into_iter().count()
}

/// Sum of exercise counts across all workouts.
pub fn total_exercises<'a>(workouts: impl IntoIterator<Item = &'a Workout>) -> usize {
    workouts.into_iter().map(|w| w.exercises.len()).sum()
}

/// Sum of set counts across all workouts and exercises.
pub fn total_sets<'a>(workouts: impl IntoIterator<Item = &'a Workout>) -> usize {
    workouts
        .into_iter()
        .flat_map(|w| &w.exercises)
        .map(|ex| ex.sets.len())
        .sum()
}

/// Total volume: Σ reps × weight over every set.
///
/// Accumulated in u64 so large histories cannot overflow a 32-bit sum.
pub fn total_volume<'a>(workouts: impl IntoIterator<Item = &'a Workout>) -> u64 {
    workouts
        .into_iter()
        .flat_map(|w| &w.exercises)
        .flat_map(|ex| &ex.sets)
        .map(|set| set.volume())
        .sum()
}

/// How often each exercise name occurs across the snapshot.
///
/// Names are matched exactly (case-sensitive, no trimming). Counting is per
/// (workout, exercise) occurrence: a name listed twice within one workout
/// counts twice, matching the reference behavior.
pub fn exercise_frequency<'a>(
    workouts: impl IntoIterator<Item = &'a Workout>,
) -> HashMap<String, u64> {
    frequency_table(workouts).into_iter().collect()
}

/// The `n` most frequent exercise names with their counts, descending.
///
/// Ties keep first-appearance order across the workout sequence, so results
/// are deterministic for equal counts.
pub fn top_exercises<'a>(
    workouts: impl IntoIterator<Item = &'a Workout>,
    n: usize,
) -> Vec<(String, u64)> {
    let mut table = frequency_table(workouts);
    table.sort_by(|a, b| b.1.cmp(&a.1));
    table.truncate(n);
    table
}

/// Compute the full stats summary in one pass over the snapshot.
pub fn compute_stats<'a>(
    workouts: impl IntoIterator<Item = &'a Workout> + Clone,
    top_n: usize,
) -> WorkoutStats {
    let stats = WorkoutStats {
        total_workouts: total_workouts(workouts.clone()),
        total_exercises: total_exercises(workouts.clone()),
        total_sets: total_sets(workouts.clone()),
        total_volume: total_volume(workouts.clone()),
        top_exercises: top_exercises(workouts, top_n),
    };

    tracing::debug!(
        "Computed stats: {} workouts, {} exercises, {} sets, volume {}",
        stats.total_workouts,
        stats.total_exercises,
        stats.total_sets,
        stats.total_volume
    );
    stats
}

/// Occurrence counts in first-appearance order.
fn frequency_table<'a>(workouts: impl IntoIterator<Item = &'a Workout>) -> Vec<(String, u64)> {
    let mut order: Vec<(String, u64)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for exercise in workouts.into_iter().flat_map(|w| &w.exercises) {
        match index.get(exercise.name.as_str()) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(exercise.name.as_str(), order.len());
                order.push((exercise.name.clone(), 1));
            }
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SetField, WorkoutBuilder};

    /// Build a committed workout from (name, [(reps, weight)]) descriptions.
    fn workout(exercises: &[(&str, &[(i64, i64)])]) -> Workout {
        let mut builder = WorkoutBuilder::new();
        for (name, sets) in exercises {
            let id = builder.add_exercise(name).unwrap();
            for (i, (reps, weight)) in sets.iter().enumerate() {
                if i > 0 {
                    builder.add_set(id);
                }
                builder.update_set(id, i, SetField::Reps, *reps);
                builder.update_set(id, i, SetField::Weight, *weight);
            }
        }
        builder.commit().unwrap()
    }

    #[test]
    fn test_totals_on_empty_snapshot() {
        let workouts: Vec<Workout> = vec![];

        assert_eq!(total_workouts(&workouts), 0);
        assert_eq!(total_exercises(&workouts), 0);
        assert_eq!(total_sets(&workouts), 0);
        assert_eq!(total_volume(&workouts), 0);
        assert!(top_exercises(&workouts, 5).is_empty());
    }

    #[test]
    fn test_total_volume_worked_example() {
        // 10×100 + 8×100 = 1800
        let workouts = vec![workout(&[("Bench", &[(10, 100), (8, 100)])])];

        assert_eq!(total_volume(&workouts), 1800);
    }

    #[test]
    fn test_counts_across_workouts() {
        let workouts = vec![
            workout(&[("Squat", &[(5, 225)]), ("Bench", &[(8, 135), (8, 135)])]),
            workout(&[("Deadlift", &[(3, 315)])]),
        ];

        assert_eq!(total_workouts(&workouts), 2);
        assert_eq!(total_exercises(&workouts), 3);
        assert_eq!(total_sets(&workouts), 4);
    }

    #[test]
    fn test_exercise_frequency_worked_example() {
        let workouts = vec![
            workout(&[("Squat", &[(5, 100)])]),
            workout(&[("Squat", &[(5, 100)]), ("Bench", &[(5, 100)])]),
        ];

        let freq = exercise_frequency(&workouts);
        assert_eq!(freq.get("Squat"), Some(&2));
        assert_eq!(freq.get("Bench"), Some(&1));
        assert_eq!(freq.len(), 2);

        let top = top_exercises(&workouts, 5);
        assert_eq!(
            top,
            vec![("Squat".to_string(), 2), ("Bench".to_string(), 1)]
        );
    }

    #[test]
    fn test_frequency_counts_duplicate_names_within_one_workout() {
        // Occurrence semantics: the same name twice in one workout counts twice.
        let workouts = vec![workout(&[
            ("Squat", &[(5, 100)]),
            ("Squat", &[(5, 100)]),
        ])];

        let freq = exercise_frequency(&workouts);
        assert_eq!(freq.get("Squat"), Some(&2));
    }

    #[test]
    fn test_frequency_is_case_sensitive() {
        let workouts = vec![workout(&[
            ("Squat", &[(5, 100)]),
            ("squat", &[(5, 100)]),
        ])];

        let freq = exercise_frequency(&workouts);
        assert_eq!(freq.get("Squat"), Some(&1));
        assert_eq!(freq.get("squat"), Some(&1));
    }

    #[test]
    fn test_top_exercises_truncates_and_breaks_ties_by_first_appearance() {
        let workouts = vec![
            workout(&[("Row", &[(5, 100)]), ("Curl", &[(5, 20)])]),
            workout(&[("Press", &[(5, 95)]), ("Press", &[(5, 95)])]),
        ];

        let top = top_exercises(&workouts, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0], ("Press".to_string(), 2));
        // Row and Curl both have count 1; Row appeared first.
        assert_eq!(top[1], ("Row".to_string(), 1));
    }

    #[test]
    fn test_compute_stats_is_idempotent() {
        let workouts = vec![
            workout(&[("Squat", &[(5, 225), (5, 225)])]),
            workout(&[("Bench", &[(8, 135)])]),
        ];

        let first = compute_stats(&workouts, 5);
        let second = compute_stats(&workouts, 5);

        assert_eq!(first, second);
        assert_eq!(first.total_workouts, 2);
        assert_eq!(first.total_volume, 5 * 225 * 2 + 8 * 135);
    }

    #[test]
    fn test_stats_serialize_to_json() {
        let workouts = vec![workout(&[("Squat", &[(5, 225)])])];

        let stats = compute_stats(&workouts, 5);
        let json = serde_json::to_string(&stats).unwrap();

        assert!(json.contains("\"total_volume\":1125"));
        assert!(json.contains("Squat"));
    }
}
