use log::{debug, error};

use crate::{ReadError, UpdateError, Workout, WorkoutID, WorkoutRepository};

/// Repository wrapper that logs failures. Degraded connectivity is
/// expected during a session and logged at debug level only.
pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: WorkoutRepository> WorkoutRepository for Service<R> {
    async fn read_workout(&self, id: WorkoutID) -> Result<Workout, ReadError> {
        log_on_error!(
            self.repository.read_workout(id),
            ReadError,
            "read",
            "workout"
        )
    }

    async fn save_workout(&self, workout: &Workout) -> Result<(), UpdateError> {
        log_on_error!(
            self.repository.save_workout(workout),
            UpdateError,
            "save",
            "workout"
        )
    }
}
