use std::fmt::{self, Display};

use chrono::Utc;
use thiserror::Error;

use liftlog_domain::{
    Exercise, ReadError, SaveQueue, Seconds, Set, UpdateError, Workout, WorkoutID,
    WorkoutRepository,
};

use crate::input::SetInput;
use crate::timer::{ElapsedClock, RestTimer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    Resting,
    Complete,
    Aborted,
}

impl SessionStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionStatus::Complete | SessionStatus::Aborted)
    }
}

impl Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SessionStatus::Active => "active",
                SessionStatus::Resting => "resting",
                SessionStatus::Complete => "complete",
                SessionStatus::Aborted => "aborted",
            }
        )
    }
}

/// Pointer into the workout's exercise/set arrays. Always within bounds
/// of an existing set; frozen once the session reaches a terminal state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub exercise: usize,
    pub set: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Completed,
    Aborted,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("workout has no exercises")]
    NoExercises,
    #[error("session already ended ({0})")]
    SessionOver(SessionStatus),
}

/// Result of persisting a mutation. Save failures do not revert the
/// already-applied local mutation; the snapshot stays queued for retry.
#[derive(Debug)]
pub enum SaveOutcome {
    Saved,
    Queued(UpdateError),
}

/// State change reported by a sequencer operation.
#[derive(Debug)]
pub struct Transition {
    pub position: Position,
    pub status: SessionStatus,
    pub rest_started: Option<Seconds>,
    /// Set when the operation ended a running rest period early.
    pub rest_finished: bool,
    pub outcome: Option<SessionOutcome>,
    /// `None` when the operation did not mutate the workout model.
    pub save: Option<SaveOutcome>,
}

/// The workout execution state machine.
///
/// Owns the workout snapshot for the duration of one session and drives
/// it through set completion, rest suspension and termination. All state
/// transitions happen on one logical actor; the two clocks are advanced
/// by [`Sequencer::tick`] once per second.
#[derive(Debug)]
pub struct Sequencer<R> {
    repository: R,
    workout: Workout,
    position: Position,
    status: SessionStatus,
    rest_timer: RestTimer,
    elapsed: ElapsedClock,
    queue: SaveQueue,
}

impl<R: WorkoutRepository> Sequencer<R> {
    /// Fetches the workout and initializes a session on it.
    pub async fn load(repository: R, id: WorkoutID) -> Result<Self, ReadError> {
        let workout = repository.read_workout(id).await?;
        Self::new(repository, workout).map_err(|_| ReadError::NotFound)
    }

    pub fn new(repository: R, workout: Workout) -> Result<Self, SessionError> {
        let Some(exercise) = workout.exercises.iter().position(|e| !e.sets.is_empty()) else {
            return Err(SessionError::NoExercises);
        };

        Ok(Self {
            repository,
            workout,
            position: Position { exercise, set: 0 },
            status: SessionStatus::Active,
            rest_timer: RestTimer::new(),
            elapsed: ElapsedClock::new(),
            queue: SaveQueue::new(),
        })
    }

    /// Marks the set at the current position completed, recording the
    /// provided actual values (targets are used for unset fields), and
    /// advances the position. Starts the rest timer if more sets remain
    /// in the exercise and the completed set has a non-zero rest time.
    pub async fn complete_current_set(
        &mut self,
        input: SetInput,
    ) -> Result<Transition, SessionError> {
        self.ensure_live()?;
        self.rest_timer.cancel();

        let Position {
            exercise: exercise_idx,
            set: set_idx,
        } = self.position;
        let exercise = &mut self.workout.exercises[exercise_idx];
        let set = &mut exercise.sets[set_idx];
        set.is_completed = true;
        set.actual_reps = input.reps.or(set.target_reps);
        set.actual_weight = input.weight.or(set.target_weight);
        set.actual_duration = input.duration.or(set.target_duration);
        let rest_time = set.rest_time;
        let last_set = set_idx + 1 == exercise.sets.len();
        exercise.is_completed = exercise.all_sets_completed();
        self.workout.completion_status = self.workout.completion();

        let mut rest_started = None;
        let mut outcome = None;
        if !last_set {
            self.position.set += 1;
            if rest_time.is_zero() {
                self.status = SessionStatus::Active;
            } else {
                self.rest_timer.start(rest_time);
                self.status = SessionStatus::Resting;
                rest_started = Some(rest_time);
            }
        } else if let Some(next) = self.next_exercise_with_sets(exercise_idx + 1) {
            self.position = Position {
                exercise: next,
                set: 0,
            };
            self.status = SessionStatus::Active;
        } else {
            outcome = Some(self.terminate(SessionOutcome::Completed));
        }

        let save = self.persist().await;
        Ok(self.transition(rest_started, outcome, Some(save)))
    }

    /// Advances to the next exercise without completing the remaining
    /// sets; they stay uncompleted and the completion percentage is
    /// unaffected. Terminates the session if this was the last exercise.
    pub fn skip_current_exercise(&mut self) -> Result<Transition, SessionError> {
        self.ensure_live()?;
        self.rest_timer.cancel();

        let outcome = if let Some(next) = self.next_exercise_with_sets(self.position.exercise + 1) {
            self.position = Position {
                exercise: next,
                set: 0,
            };
            self.status = SessionStatus::Active;
            None
        } else {
            Some(self.terminate(SessionOutcome::Completed))
        };

        // skipped sets leave the workout model unchanged, nothing to save
        Ok(self.transition(None, outcome, None))
    }

    /// Freezes the position, persists the current state and terminates
    /// the session with the `Aborted` outcome.
    pub async fn end_early(&mut self) -> Result<Transition, SessionError> {
        self.ensure_live()?;

        self.workout.completion_status = self.workout.completion();
        let outcome = self.terminate(SessionOutcome::Aborted);
        let save = self.persist().await;
        Ok(self.transition(None, Some(outcome), Some(save)))
    }

    /// Ends a rest period early. A no-op when no rest is running; an
    /// early skip ends the rest the same way natural expiry does.
    pub fn skip_rest(&mut self) -> Result<Transition, SessionError> {
        self.ensure_live()?;

        let skipped = self.status == SessionStatus::Resting;
        if skipped {
            self.rest_timer.skip();
            self.status = SessionStatus::Active;
        }
        let mut transition = self.transition(None, None, None);
        transition.rest_finished = skipped;
        Ok(transition)
    }

    /// Advances both clocks by one second. Returns `true` when a rest
    /// period finished on this tick.
    pub fn tick(&mut self) -> bool {
        self.elapsed.tick();
        if self.status == SessionStatus::Resting && self.rest_timer.tick() {
            self.status = SessionStatus::Active;
            return true;
        }
        false
    }

    /// Retries the queued save, if any and if its backoff deadline has
    /// passed. Returns `Ok(true)` when a snapshot was sent.
    pub async fn flush_pending(&mut self) -> Result<bool, UpdateError> {
        self.queue.flush(&self.repository, Utc::now()).await
    }

    #[must_use]
    pub fn has_pending_save(&self) -> bool {
        !self.queue.is_empty()
    }

    #[must_use]
    pub fn workout(&self) -> &Workout {
        &self.workout
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed.seconds()
    }

    #[must_use]
    pub fn rest_remaining(&self) -> Option<u32> {
        self.rest_timer.remaining()
    }

    #[must_use]
    pub fn current_exercise(&self) -> Option<&Exercise> {
        if self.status.is_terminal() {
            return None;
        }
        self.workout.exercises.get(self.position.exercise)
    }

    #[must_use]
    pub fn current_set(&self) -> Option<&Set> {
        self.current_exercise()
            .and_then(|e| e.sets.get(self.position.set))
    }

    fn ensure_live(&self) -> Result<(), SessionError> {
        if self.status.is_terminal() {
            return Err(SessionError::SessionOver(self.status));
        }
        Ok(())
    }

    fn next_exercise_with_sets(&self, from: usize) -> Option<usize> {
        self.workout
            .exercises
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, e)| !e.sets.is_empty())
            .map(|(i, _)| i)
    }

    fn terminate(&mut self, outcome: SessionOutcome) -> SessionOutcome {
        self.status = match outcome {
            SessionOutcome::Completed => SessionStatus::Complete,
            SessionOutcome::Aborted => SessionStatus::Aborted,
        };
        self.rest_timer.cancel();
        self.elapsed.stop();
        outcome
    }

    async fn persist(&mut self) -> SaveOutcome {
        self.queue.stage(self.workout.clone());
        match self.queue.flush(&self.repository, Utc::now()).await {
            Ok(_) => SaveOutcome::Saved,
            Err(err) => SaveOutcome::Queued(err),
        }
    }

    fn transition(
        &self,
        rest_started: Option<Seconds>,
        outcome: Option<SessionOutcome>,
        save: Option<SaveOutcome>,
    ) -> Transition {
        Transition {
            position: self.position,
            status: self.status,
            rest_started,
            rest_finished: false,
            outcome,
            save,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use liftlog_domain::{ExerciseKind, Name, Reps, StorageError, Weight};

    use super::*;

    #[derive(Clone, Debug, Default)]
    struct FakeRepository {
        workout: Rc<RefCell<Option<Workout>>>,
        saved: Rc<RefCell<Vec<Workout>>>,
        fail: Rc<Cell<bool>>,
    }

    impl WorkoutRepository for FakeRepository {
        async fn read_workout(&self, _id: WorkoutID) -> Result<Workout, ReadError> {
            self.workout.borrow().clone().ok_or(ReadError::NotFound)
        }

        async fn save_workout(&self, workout: &Workout) -> Result<(), UpdateError> {
            if self.fail.get() {
                return Err(StorageError::NoConnection.into());
            }
            self.saved.borrow_mut().push(workout.clone());
            Ok(())
        }
    }

    fn seconds(value: u32) -> Seconds {
        Seconds::new(value).unwrap()
    }

    fn set(number: u32, rest: u32) -> Set {
        Set {
            id: u128::from(number).into(),
            number,
            target_reps: Some(Reps::new(10).unwrap()),
            target_duration: None,
            target_weight: Some(Weight::new(60.0).unwrap()),
            rest_time: seconds(rest),
            is_completed: false,
            actual_reps: None,
            actual_duration: None,
            actual_weight: None,
        }
    }

    fn exercise(id: u128, sets: Vec<Set>) -> Exercise {
        Exercise {
            id: id.into(),
            name: Name::new("Squat").unwrap(),
            description: None,
            sets,
            kind: Some(ExerciseKind::Strength),
            note: None,
            is_completed: false,
        }
    }

    fn workout(exercises: Vec<Exercise>) -> Workout {
        let mut workout = Workout {
            id: 1.into(),
            name: Name::new("Leg Day").unwrap(),
            description: None,
            exercises,
            completion_status: 0,
            program_id: None,
            program_name: None,
            scheduled_date: None,
            estimated_duration: None,
            notes: None,
        };
        workout.completion_status = workout.completion();
        workout
    }

    fn sequencer(exercises: Vec<Exercise>) -> (Sequencer<FakeRepository>, FakeRepository) {
        let repository = FakeRepository::default();
        let sequencer = Sequencer::new(repository.clone(), workout(exercises)).unwrap();
        (sequencer, repository)
    }

    #[test]
    fn test_new_requires_executable_sets() {
        let repository = FakeRepository::default();
        assert_eq!(
            Sequencer::new(repository.clone(), workout(vec![])).unwrap_err(),
            SessionError::NoExercises
        );
        assert_eq!(
            Sequencer::new(repository, workout(vec![exercise(1, vec![])])).unwrap_err(),
            SessionError::NoExercises
        );
    }

    #[test]
    fn test_initial_state() {
        let (sequencer, _) = sequencer(vec![exercise(1, vec![set(1, 30)])]);
        assert_eq!(sequencer.position(), Position { exercise: 0, set: 0 });
        assert_eq!(sequencer.status(), SessionStatus::Active);
        assert_eq!(sequencer.elapsed_seconds(), 0);
        assert_eq!(sequencer.rest_remaining(), None);
    }

    #[tokio::test]
    async fn test_load_rejects_workout_without_exercises() {
        let repository = FakeRepository::default();
        *repository.workout.borrow_mut() = Some(workout(vec![]));
        assert!(matches!(
            Sequencer::load(repository.clone(), 1.into()).await,
            Err(ReadError::NotFound)
        ));

        *repository.workout.borrow_mut() = None;
        assert!(matches!(
            Sequencer::load(repository, 1.into()).await,
            Err(ReadError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_rest_then_immediate_completion() {
        // single exercise, two sets with rest times 30 s and 0 s
        let (mut sequencer, repository) =
            sequencer(vec![exercise(1, vec![set(1, 30), set(2, 0)])]);

        let transition = sequencer
            .complete_current_set(SetInput::default())
            .await
            .unwrap();
        assert_eq!(transition.status, SessionStatus::Resting);
        assert_eq!(transition.rest_started, Some(seconds(30)));
        assert_eq!(transition.position, Position { exercise: 0, set: 1 });
        assert_eq!(sequencer.rest_remaining(), Some(30));
        assert_eq!(sequencer.workout().completion_status, 50);

        for _ in 0..29 {
            assert!(!sequencer.tick());
        }
        assert_eq!(sequencer.rest_remaining(), Some(1));
        assert!(sequencer.tick());
        assert_eq!(sequencer.status(), SessionStatus::Active);

        let transition = sequencer
            .complete_current_set(SetInput::default())
            .await
            .unwrap();
        assert_eq!(transition.status, SessionStatus::Complete);
        assert_eq!(transition.rest_started, None);
        assert_eq!(transition.outcome, Some(SessionOutcome::Completed));
        assert_eq!(sequencer.workout().completion_status, 100);
        assert!(sequencer.workout().exercises[0].is_completed);
        assert_eq!(repository.saved.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_zero_rest_advances_without_suspension() {
        let (mut sequencer, _) = sequencer(vec![exercise(1, vec![set(1, 0), set(2, 30)])]);

        let transition = sequencer
            .complete_current_set(SetInput::default())
            .await
            .unwrap();
        assert_eq!(transition.status, SessionStatus::Active);
        assert_eq!(transition.rest_started, None);
        assert_eq!(transition.position, Position { exercise: 0, set: 1 });
    }

    #[tokio::test]
    async fn test_advance_to_next_exercise() {
        // exercise A with 1 set, exercise B with 3 sets
        let (mut sequencer, _) = sequencer(vec![
            exercise(1, vec![set(1, 30)]),
            exercise(2, vec![set(1, 30), set(2, 30), set(3, 30)]),
        ]);

        let transition = sequencer
            .complete_current_set(SetInput::default())
            .await
            .unwrap();
        assert_eq!(transition.position, Position { exercise: 1, set: 0 });
        assert_eq!(transition.status, SessionStatus::Active);
        assert_eq!(transition.rest_started, None);
        assert_eq!(sequencer.workout().completion_status, 25);
        assert!(sequencer.workout().exercises[0].is_completed);
    }

    #[tokio::test]
    async fn test_skip_exercise_keeps_completion() {
        let (mut sequencer, repository) = sequencer(vec![
            exercise(1, vec![set(1, 30), set(2, 30)]),
            exercise(2, vec![set(1, 30)]),
        ]);

        let transition = sequencer.skip_current_exercise().unwrap();
        assert_eq!(transition.position, Position { exercise: 1, set: 0 });
        assert_eq!(transition.status, SessionStatus::Active);
        assert_eq!(transition.outcome, None);
        assert_eq!(sequencer.workout().completion_status, 0);
        assert!(!sequencer.workout().exercises[0].is_completed);
        assert!(repository.saved.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_skip_last_exercise_completes_session() {
        let (mut sequencer, _) = sequencer(vec![exercise(1, vec![set(1, 30)])]);

        let transition = sequencer.skip_current_exercise().unwrap();
        assert_eq!(transition.status, SessionStatus::Complete);
        assert_eq!(transition.outcome, Some(SessionOutcome::Completed));
        assert_eq!(sequencer.workout().completion_status, 0);
    }

    #[tokio::test]
    async fn test_end_early_persists_frozen_state() {
        // five sets of which two are already completed: 40 %
        let mut completed = set(1, 30);
        completed.is_completed = true;
        let mut also_completed = set(2, 30);
        also_completed.is_completed = true;
        let (mut sequencer, repository) = sequencer(vec![
            exercise(1, vec![completed, also_completed, set(3, 30)]),
            exercise(2, vec![set(1, 30), set(2, 30)]),
        ]);

        let transition = sequencer.end_early().await.unwrap();
        assert_eq!(transition.status, SessionStatus::Aborted);
        assert_eq!(transition.outcome, Some(SessionOutcome::Aborted));
        assert_eq!(transition.position, Position { exercise: 0, set: 0 });
        assert_eq!(repository.saved.borrow().len(), 1);
        assert_eq!(repository.saved.borrow()[0].completion_status, 40);
    }

    #[tokio::test]
    async fn test_actual_values_fall_back_to_targets() {
        let (mut sequencer, _) = sequencer(vec![exercise(1, vec![set(1, 0), set(2, 0)])]);

        sequencer
            .complete_current_set(SetInput::default())
            .await
            .unwrap();
        let first = &sequencer.workout().exercises[0].sets[0];
        assert_eq!(first.actual_reps, first.target_reps);
        assert_eq!(first.actual_weight, first.target_weight);
        assert_eq!(first.actual_duration, None);

        let input = SetInput::new(Some(Reps::new(8).unwrap()), None, None);
        sequencer.complete_current_set(input).await.unwrap();
        let second = &sequencer.workout().exercises[0].sets[1];
        assert_eq!(second.actual_reps, Some(Reps::new(8).unwrap()));
        assert_eq!(second.actual_weight, second.target_weight);
    }

    #[tokio::test]
    async fn test_operations_fail_after_termination() {
        let (mut sequencer, _) = sequencer(vec![exercise(1, vec![set(1, 30)])]);
        sequencer.end_early().await.unwrap();

        let over = SessionError::SessionOver(SessionStatus::Aborted);
        assert_eq!(
            sequencer
                .complete_current_set(SetInput::default())
                .await
                .unwrap_err(),
            over
        );
        assert_eq!(sequencer.skip_current_exercise().unwrap_err(), over);
        assert_eq!(sequencer.skip_rest().unwrap_err(), over);
        assert_eq!(sequencer.end_early().await.unwrap_err(), over);
    }

    #[tokio::test]
    async fn test_skip_rest_is_idempotent() {
        let (mut sequencer, _) = sequencer(vec![exercise(1, vec![set(1, 30), set(2, 30)])]);
        sequencer
            .complete_current_set(SetInput::default())
            .await
            .unwrap();
        assert_eq!(sequencer.status(), SessionStatus::Resting);

        let transition = sequencer.skip_rest().unwrap();
        assert_eq!(transition.status, SessionStatus::Active);
        assert!(transition.rest_finished);
        assert_eq!(sequencer.rest_remaining(), None);

        // skipping again, or after natural expiry, has no further effect
        let transition = sequencer.skip_rest().unwrap();
        assert_eq!(transition.status, SessionStatus::Active);
        assert!(!transition.rest_finished);
    }

    #[tokio::test]
    async fn test_skip_rest_after_natural_expiry() {
        let (mut sequencer, _) = sequencer(vec![exercise(1, vec![set(1, 2), set(2, 30)])]);
        sequencer
            .complete_current_set(SetInput::default())
            .await
            .unwrap();
        sequencer.tick();
        assert!(sequencer.tick());
        assert_eq!(sequencer.status(), SessionStatus::Active);

        let transition = sequencer.skip_rest().unwrap();
        assert_eq!(transition.status, SessionStatus::Active);
        assert!(!transition.rest_finished);
        assert_eq!(sequencer.position(), Position { exercise: 0, set: 1 });
    }

    #[tokio::test]
    async fn test_save_failure_keeps_local_state() {
        let (mut sequencer, repository) =
            sequencer(vec![exercise(1, vec![set(1, 0), set(2, 0)])]);
        repository.fail.set(true);

        let transition = sequencer
            .complete_current_set(SetInput::default())
            .await
            .unwrap();
        assert!(matches!(
            transition.save,
            Some(SaveOutcome::Queued(UpdateError::Storage(
                StorageError::NoConnection
            )))
        ));
        assert_eq!(transition.position, Position { exercise: 0, set: 1 });
        assert_eq!(sequencer.workout().completion_status, 50);
        assert!(sequencer.has_pending_save());

        // the next mutation sends the newest snapshot only
        repository.fail.set(false);
        let transition = sequencer
            .complete_current_set(SetInput::default())
            .await
            .unwrap();
        assert!(matches!(transition.save, Some(SaveOutcome::Saved)));
        assert!(!sequencer.has_pending_save());
        assert_eq!(repository.saved.borrow().len(), 1);
        assert_eq!(repository.saved.borrow()[0].completion_status, 100);
    }

    #[tokio::test]
    async fn test_completion_status_matches_calculator_after_every_operation() {
        let (mut sequencer, _) = sequencer(vec![
            exercise(1, vec![set(1, 0), set(2, 0)]),
            exercise(2, vec![set(1, 0)]),
            exercise(3, vec![set(1, 0), set(2, 0)]),
        ]);

        sequencer
            .complete_current_set(SetInput::default())
            .await
            .unwrap();
        assert_eq!(
            sequencer.workout().completion_status,
            sequencer.workout().completion()
        );
        sequencer
            .complete_current_set(SetInput::default())
            .await
            .unwrap();
        assert_eq!(sequencer.workout().completion_status, 40);
        sequencer.skip_current_exercise().unwrap();
        assert_eq!(sequencer.workout().completion_status, 40);
        sequencer
            .complete_current_set(SetInput::default())
            .await
            .unwrap();
        assert_eq!(sequencer.workout().completion_status, 60);
        sequencer.end_early().await.unwrap();
        assert_eq!(sequencer.workout().completion_status, 60);
    }

    #[tokio::test]
    async fn test_completed_sets_stay_completed() {
        let (mut sequencer, _) = sequencer(vec![
            exercise(1, vec![set(1, 0), set(2, 0)]),
            exercise(2, vec![set(1, 0)]),
        ]);

        sequencer
            .complete_current_set(SetInput::default())
            .await
            .unwrap();
        sequencer
            .complete_current_set(SetInput::default())
            .await
            .unwrap();
        sequencer.skip_current_exercise().unwrap();
        assert!(sequencer.workout().exercises[0].sets.iter().all(|s| s.is_completed));
    }

    #[tokio::test]
    async fn test_empty_exercises_are_passed_over() {
        let (mut sequencer, _) = sequencer(vec![
            exercise(1, vec![]),
            exercise(2, vec![set(1, 0)]),
            exercise(3, vec![]),
        ]);
        assert_eq!(sequencer.position(), Position { exercise: 1, set: 0 });

        let transition = sequencer
            .complete_current_set(SetInput::default())
            .await
            .unwrap();
        assert_eq!(transition.status, SessionStatus::Complete);
    }

    #[tokio::test]
    async fn test_elapsed_clock_runs_through_rests_and_stops_at_termination() {
        let (mut sequencer, _) = sequencer(vec![exercise(1, vec![set(1, 2), set(2, 0)])]);

        sequencer.tick();
        sequencer
            .complete_current_set(SetInput::default())
            .await
            .unwrap();
        sequencer.tick();
        sequencer.tick();
        assert_eq!(sequencer.elapsed_seconds(), 3);

        sequencer.end_early().await.unwrap();
        sequencer.tick();
        assert_eq!(sequencer.elapsed_seconds(), 3);
    }

    #[tokio::test]
    async fn test_current_set_accessors() {
        let (mut sequencer, _) = sequencer(vec![exercise(1, vec![set(1, 0)])]);
        assert_eq!(sequencer.current_set().map(|s| s.number), Some(1));

        sequencer
            .complete_current_set(SetInput::default())
            .await
            .unwrap();
        assert_eq!(sequencer.current_exercise(), None);
        assert_eq!(sequencer.current_set(), None);
    }
}
