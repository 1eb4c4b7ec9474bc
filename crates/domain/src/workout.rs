use chrono::{DateTime, Utc};

use crate::{ExerciseID, ExerciseKind, Name, ProgramID, Reps, Seconds, SetID, Weight, WorkoutID};

/// One discrete unit of work within an exercise. Exactly one of
/// `target_reps` and `target_duration` is meaningful per set.
#[derive(Debug, Clone, PartialEq)]
pub struct Set {
    pub id: SetID,
    /// 1-based position within the owning exercise.
    pub number: u32,
    pub target_reps: Option<Reps>,
    pub target_duration: Option<Seconds>,
    pub target_weight: Option<Weight>,
    pub rest_time: Seconds,
    pub is_completed: bool,
    pub actual_reps: Option<Reps>,
    pub actual_duration: Option<Seconds>,
    pub actual_weight: Option<Weight>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub description: Option<String>,
    pub sets: Vec<Set>,
    pub kind: Option<ExerciseKind>,
    pub note: Option<String>,
    pub is_completed: bool,
}

impl Exercise {
    #[must_use]
    pub fn all_sets_completed(&self) -> bool {
        self.sets.iter().all(|s| s.is_completed)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutID,
    pub name: Name,
    pub description: Option<String>,
    pub exercises: Vec<Exercise>,
    /// Derived from the set completion state, in the range [0, 100].
    /// Recomputed via [`Workout::completion`] after every mutation.
    pub completion_status: u8,
    pub program_id: Option<ProgramID>,
    pub program_name: Option<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
    /// Estimated duration in minutes.
    pub estimated_duration: Option<u32>,
    pub notes: Option<String>,
}

impl Workout {
    #[must_use]
    pub fn total_sets(&self) -> u32 {
        #[allow(clippy::cast_possible_truncation)]
        self.exercises.iter().map(|e| e.sets.len() as u32).sum()
    }

    #[must_use]
    pub fn completed_sets(&self) -> u32 {
        #[allow(clippy::cast_possible_truncation)]
        self.exercises
            .iter()
            .map(|e| e.sets.iter().filter(|s| s.is_completed).count() as u32)
            .sum()
    }

    /// Completion percentage: `round(100 * completed / total)`, 0 when
    /// there are no sets at all.
    #[must_use]
    pub fn completion(&self) -> u8 {
        let total = self.total_sets();
        if total == 0 {
            return 0;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let pct = (f64::from(self.completed_sets()) * 100.0 / f64::from(total)).round() as u8;
        pct
    }

    #[must_use]
    pub fn all_sets_completed(&self) -> bool {
        self.exercises.iter().all(Exercise::all_sets_completed)
    }
}
