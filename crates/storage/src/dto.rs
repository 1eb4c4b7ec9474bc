//! Wire representation of the workout model.
//!
//! The remote store speaks camelCase JSON; the domain types stay free of
//! serialization concerns and are converted at this boundary. Decoding
//! validates all values through the domain newtypes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use liftlog_domain::{
    Exercise, ExerciseKind, ExerciseKindError, Name, NameError, Reps, RepsError, Seconds,
    SecondsError, Set, Weight, WeightError, Workout,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SetDto {
    pub id: Uuid,
    pub set_number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_reps: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f32>,
    pub rest_time: u32,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_reps: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_weight: Option<f32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseDto {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub sets: Vec<SetDto>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDto {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub exercises: Vec<ExerciseDto>,
    pub completion_status: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DecodeError {
    #[error(transparent)]
    Name(#[from] NameError),
    #[error(transparent)]
    Reps(#[from] RepsError),
    #[error(transparent)]
    Seconds(#[from] SecondsError),
    #[error(transparent)]
    Weight(#[from] WeightError),
    #[error(transparent)]
    Kind(#[from] ExerciseKindError),
    #[error("completion status must be in the range 0 to 100 ({0} > 100)")]
    CompletionOutOfRange(u8),
}

impl From<&Set> for SetDto {
    fn from(set: &Set) -> Self {
        Self {
            id: *set.id,
            set_number: set.number,
            target_reps: set.target_reps.map(u32::from),
            target_duration: set.target_duration.map(u32::from),
            target_weight: set.target_weight.map(f32::from),
            rest_time: set.rest_time.into(),
            is_completed: set.is_completed,
            actual_reps: set.actual_reps.map(u32::from),
            actual_duration: set.actual_duration.map(u32::from),
            actual_weight: set.actual_weight.map(f32::from),
        }
    }
}

impl From<&Exercise> for ExerciseDto {
    fn from(exercise: &Exercise) -> Self {
        Self {
            id: *exercise.id,
            name: exercise.name.to_string(),
            description: exercise.description.clone(),
            sets: exercise.sets.iter().map(SetDto::from).collect(),
            kind: exercise.kind.map(|k| k.to_string()),
            note: exercise.note.clone(),
            is_completed: exercise.is_completed,
        }
    }
}

impl From<&Workout> for WorkoutDto {
    fn from(workout: &Workout) -> Self {
        Self {
            id: *workout.id,
            name: workout.name.to_string(),
            description: workout.description.clone(),
            exercises: workout.exercises.iter().map(ExerciseDto::from).collect(),
            completion_status: workout.completion_status,
            program_id: workout.program_id.map(|id| *id),
            program_name: workout.program_name.clone(),
            scheduled_date: workout.scheduled_date,
            estimated_duration: workout.estimated_duration,
            notes: workout.notes.clone(),
        }
    }
}

impl TryFrom<SetDto> for Set {
    type Error = DecodeError;

    fn try_from(dto: SetDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: dto.id.into(),
            number: dto.set_number,
            target_reps: dto.target_reps.map(Reps::new).transpose()?,
            target_duration: dto.target_duration.map(Seconds::new).transpose()?,
            target_weight: dto.target_weight.map(Weight::new).transpose()?,
            rest_time: Seconds::new(dto.rest_time)?,
            is_completed: dto.is_completed,
            actual_reps: dto.actual_reps.map(Reps::new).transpose()?,
            actual_duration: dto.actual_duration.map(Seconds::new).transpose()?,
            actual_weight: dto.actual_weight.map(Weight::new).transpose()?,
        })
    }
}

impl TryFrom<ExerciseDto> for Exercise {
    type Error = DecodeError;

    fn try_from(dto: ExerciseDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: dto.id.into(),
            name: Name::new(&dto.name)?,
            description: dto.description,
            sets: dto
                .sets
                .into_iter()
                .map(Set::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            kind: dto
                .kind
                .as_deref()
                .map(ExerciseKind::try_from)
                .transpose()?,
            note: dto.note,
            is_completed: dto.is_completed,
        })
    }
}

impl TryFrom<WorkoutDto> for Workout {
    type Error = DecodeError;

    fn try_from(dto: WorkoutDto) -> Result<Self, Self::Error> {
        if dto.completion_status > 100 {
            return Err(DecodeError::CompletionOutOfRange(dto.completion_status));
        }

        Ok(Self {
            id: dto.id.into(),
            name: Name::new(&dto.name)?,
            description: dto.description,
            exercises: dto
                .exercises
                .into_iter()
                .map(Exercise::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            completion_status: dto.completion_status,
            program_id: dto.program_id.map(Into::into),
            program_name: dto.program_name,
            scheduled_date: dto.scheduled_date,
            estimated_duration: dto.estimated_duration,
            notes: dto.notes,
        })
    }
}
