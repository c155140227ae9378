//! Sensor packages and the dispatch from activity code to workout type.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::coefficients::Coefficients;
use crate::training::{Running, SportsWalking, Swimming, Training};
use crate::{WorkoutError, WorkoutResult};

/// Activity codes understood by [`read_package`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkoutType {
    Swimming,
    Running,
    SportsWalking,
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 3] = [
        WorkoutType::Swimming,
        WorkoutType::Running,
        WorkoutType::SportsWalking,
    ];

    pub fn code(self) -> &'static str {
        match self {
            WorkoutType::Swimming => "SWM",
            WorkoutType::Running => "RUN",
            WorkoutType::SportsWalking => "WLK",
        }
    }

    /// Number of positional readings the workout is built from.
    pub fn arity(self) -> usize {
        match self {
            WorkoutType::Swimming => 5,
            WorkoutType::Running => 3,
            WorkoutType::SportsWalking => 4,
        }
    }

    fn name(self) -> &'static str {
        match self {
            WorkoutType::Swimming => Swimming::NAME,
            WorkoutType::Running => Running::NAME,
            WorkoutType::SportsWalking => SportsWalking::NAME,
        }
    }
}

impl FromStr for WorkoutType {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SWM" => Ok(WorkoutType::Swimming),
            "RUN" => Ok(WorkoutType::Running),
            "WLK" => Ok(WorkoutType::SportsWalking),
            other => Err(WorkoutError::UnknownWorkoutType(other.to_string())),
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

fn to_action(value: f64) -> WorkoutResult<u32> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX)
    {
        Ok(value as u32)
    } else {
        Err(WorkoutError::InvalidInput(format!(
            "action must be a non-negative whole number, got {value}"
        )))
    }
}

/// Build a workout from an activity code and its positional readings.
///
/// Readings map onto the constructor in order: `action, duration, weight`,
/// then `height` for walking or `length_pool, count_pool` for swimming.
pub fn read_package(workout_type: &str, data: &[f64]) -> WorkoutResult<Training> {
    let training = build_training(workout_type, data).inspect_err(|e| {
        tracing::warn!(workout_type, readings = data.len(), error = %e, "rejecting package");
    })?;
    tracing::debug!(workout_type, readings = data.len(), "package dispatched");
    Ok(training)
}

fn build_training(workout_type: &str, data: &[f64]) -> WorkoutResult<Training> {
    let kind: WorkoutType = workout_type.parse()?;
    if data.len() != kind.arity() {
        return Err(WorkoutError::ArgumentCount {
            workout_type: kind.name(),
            expected: kind.arity(),
            got: data.len(),
        });
    }
    let action = to_action(data[0])?;
    let (duration, weight) = (data[1], data[2]);
    Ok(match kind {
        WorkoutType::Swimming => Swimming::new(action, duration, weight, data[3], data[4])?.into(),
        WorkoutType::Running => Running::new(action, duration, weight)?.into(),
        WorkoutType::SportsWalking => SportsWalking::new(action, duration, weight, data[3])?.into(),
    })
}

/// One set of sensor readings tagged with its activity code.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data: data.into(),
        }
    }

    pub fn read(&self) -> WorkoutResult<Training> {
        read_package(&self.workout_type, &self.data)
    }
}

/// JSON workout file: packages in processing order and optional coefficient overrides.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutFile {
    pub packages: Vec<Package>,
    #[serde(default)]
    pub coefficients: Coefficients,
}

impl WorkoutFile {
    pub fn from_json(s: &str) -> WorkoutResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: &Path) -> WorkoutResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let file = Self::from_json(&contents)?;
        tracing::debug!(path = %path.display(), packages = file.packages.len(), "loaded workout file");
        Ok(file)
    }
}
