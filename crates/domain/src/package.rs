use derive_more::Display;
use log::debug;
use strum::{AsRefStr, EnumIter, EnumString};

use crate::{Running, SportsWalking, Swimming, Training};

/// Workout type identified by a three-letter code.
///
/// The `Display` output is the label used in rendered messages, `as_ref` yields the code.
#[derive(AsRefStr, Display, EnumIter, EnumString, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutType {
    #[strum(serialize = "SWM")]
    #[display("Swimming")]
    Swimming,
    #[strum(serialize = "RUN")]
    #[display("Running")]
    Running,
    #[strum(serialize = "WLK")]
    #[display("SportsWalking")]
    SportsWalking,
}

impl WorkoutType {
    /// Number of data fields expected for the workout type.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            WorkoutType::Running => 3,
            WorkoutType::SportsWalking => 4,
            WorkoutType::Swimming => 5,
        }
    }
}

/// Raw sensor package as received from the tracker.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl Package {
    #[must_use]
    pub fn new(workout_type: &str, data: &[f64]) -> Self {
        Self {
            workout_type: workout_type.to_string(),
            data: data.to_vec(),
        }
    }
}

/// Select the calculator for a workout code and construct it from positional data.
///
/// The data fields are `action, duration, weight` followed by `height` for sports walking
/// or `length_pool, count_pool` for swimming.
pub fn resolve(workout_code: &str, data: &[f64]) -> Result<Box<dyn Training>, PackageError> {
    let workout_type = workout_code
        .parse::<WorkoutType>()
        .map_err(|_| PackageError::UnknownWorkoutType(workout_code.to_string()))?;

    if data.len() != workout_type.arity() {
        return Err(PackageError::ArityMismatch {
            workout_type,
            expected: workout_type.arity(),
            actual: data.len(),
        });
    }

    debug!("reading {workout_type} package: {data:?}");

    let action = to_action(data[0]);

    Ok(match workout_type {
        WorkoutType::Running => Box::new(Running::new(action, data[1], data[2])),
        WorkoutType::SportsWalking => {
            Box::new(SportsWalking::new(action, data[1], data[2], data[3]))
        }
        WorkoutType::Swimming => Box::new(Swimming::new(
            action, data[1], data[2], data[3], data[4],
        )),
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_action(value: f64) -> u32 {
    value as u32
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PackageError {
    #[error("unknown workout type \"{0}\"")]
    UnknownWorkoutType(String),
    #[error("{workout_type} package requires {expected} values, got {actual}")]
    ArityMismatch {
        workout_type: WorkoutType,
        expected: usize,
        actual: usize,
    },
}
