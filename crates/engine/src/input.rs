use std::fmt::Display;

use liftlog_domain::{Reps, Seconds, Weight};
use log::debug;

/// Actual values recorded for a completed set. Fields left unset fall
/// back to the set's target values on completion.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SetInput {
    pub reps: Option<Reps>,
    pub weight: Option<Weight>,
    pub duration: Option<Seconds>,
}

impl SetInput {
    #[must_use]
    pub fn new(reps: Option<Reps>, weight: Option<Weight>, duration: Option<Seconds>) -> Self {
        Self {
            reps,
            weight,
            duration,
        }
    }

    /// Parses raw user input. Values that do not parse are dropped, so
    /// that completion falls back to the set's targets instead of
    /// failing the operation.
    #[must_use]
    pub fn parse(reps: Option<&str>, weight: Option<&str>, duration: Option<&str>) -> Self {
        Self {
            reps: reps.and_then(|raw| accept("reps", Reps::try_from(raw))),
            weight: weight.and_then(|raw| accept("weight", Weight::try_from(raw))),
            duration: duration.and_then(|raw| accept("duration", Seconds::try_from(raw))),
        }
    }
}

fn accept<T, E: Display>(field: &str, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            debug!("ignoring invalid {field} input: {err}");
            None
        }
    }
}
