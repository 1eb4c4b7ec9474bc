use log::debug;

use liftlog_domain::{
    ReadError, StorageError, UpdateError, Workout, WorkoutID, WorkoutRepository,
};

use crate::dto::WorkoutDto;

/// REST adapter for the remote workout store.
///
/// The base URL is injected by construction; there is no ambient
/// configuration. Any transport failure maps to
/// [`StorageError::NoConnection`], any unexpected status to
/// [`StorageError::BadStatus`].
pub struct Rest {
    client: reqwest::Client,
    base_url: String,
}

impl Rest {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn workout_url(&self, id: WorkoutID) -> String {
        format!("{}/workouts/{}", self.base_url, *id)
    }
}

impl WorkoutRepository for Rest {
    async fn read_workout(&self, id: WorkoutID) -> Result<Workout, ReadError> {
        let response = self
            .client
            .get(self.workout_url(id))
            .send()
            .await
            .map_err(|_| StorageError::NoConnection)?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ReadError::NotFound);
        }
        if !status.is_success() {
            return Err(StorageError::BadStatus(status.as_u16()).into());
        }

        let dto = response
            .json::<WorkoutDto>()
            .await
            .map_err(|err| ReadError::Other(Box::new(err)))?;
        Workout::try_from(dto).map_err(|err| ReadError::Other(Box::new(err)))
    }

    async fn save_workout(&self, workout: &Workout) -> Result<(), UpdateError> {
        let response = self
            .client
            .patch(self.workout_url(workout.id))
            .json(&WorkoutDto::from(workout))
            .send()
            .await
            .map_err(|_| StorageError::NoConnection)?;

        let status = response.status();
        if !status.is_success() {
            return Err(StorageError::BadStatus(status.as_u16()).into());
        }
        debug!("saved workout {} ({} %)", *workout.id, workout.completion_status);
        Ok(())
    }
}
