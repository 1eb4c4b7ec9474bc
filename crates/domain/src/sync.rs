use chrono::{DateTime, Duration, Utc};
use log::{debug, warn};

use crate::{UpdateError, Workout, WorkoutRepository};

const BASE_DELAY_S: i64 = 1;
const MAX_DELAY_S: i64 = 60;

/// Single-slot queue for the latest unsaved workout snapshot.
///
/// The remote copy only ever needs to reflect the latest local state, so
/// rapid successive saves coalesce: staging a new snapshot drops any
/// queued predecessor. A failed flush keeps the snapshot queued and backs
/// off exponentially; staging a newer snapshot makes the queue eligible
/// for an immediate attempt again.
#[derive(Debug, Default)]
pub struct SaveQueue {
    pending: Option<Workout>,
    failed_attempts: u32,
    next_attempt: Option<DateTime<Utc>>,
}

impl SaveQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_none()
    }

    #[must_use]
    pub fn pending(&self) -> Option<&Workout> {
        self.pending.as_ref()
    }

    /// Delay before the next attempt after the most recent failure.
    #[must_use]
    pub fn backoff_delay(&self) -> Duration {
        let exponent = self.failed_attempts.saturating_sub(1).min(31);
        Duration::seconds((BASE_DELAY_S << exponent).min(MAX_DELAY_S))
    }

    #[must_use]
    pub fn ready(&self, now: DateTime<Utc>) -> bool {
        self.pending.is_some() && self.next_attempt.is_none_or(|t| now >= t)
    }

    /// Queues `snapshot`, superseding any previously staged snapshot.
    pub fn stage(&mut self, snapshot: Workout) {
        if self.pending.is_some() {
            debug!("superseding queued workout snapshot");
        }
        self.pending = Some(snapshot);
        self.next_attempt = None;
    }

    /// Attempts to send the queued snapshot. Returns `Ok(true)` if a
    /// snapshot was sent, `Ok(false)` if there was nothing to send or the
    /// backoff deadline has not passed yet. On failure the snapshot stays
    /// queued and the backoff delay doubles.
    pub async fn flush<R: WorkoutRepository>(
        &mut self,
        repository: &R,
        now: DateTime<Utc>,
    ) -> Result<bool, UpdateError> {
        let Some(snapshot) = self.pending.as_ref() else {
            return Ok(false);
        };
        if self.next_attempt.is_some_and(|t| now < t) {
            return Ok(false);
        }

        match repository.save_workout(snapshot).await {
            Ok(()) => {
                self.pending = None;
                self.failed_attempts = 0;
                self.next_attempt = None;
                Ok(true)
            }
            Err(err) => {
                self.failed_attempts += 1;
                self.next_attempt = Some(now + self.backoff_delay());
                warn!(
                    "failed to save workout (attempt {}, next in {} s): {err}",
                    self.failed_attempts,
                    self.backoff_delay().num_seconds()
                );
                Err(err)
            }
        }
    }
}
