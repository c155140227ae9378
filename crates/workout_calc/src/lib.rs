//! Workout summary calculator: distance, mean speed and calories burned
//! from raw sensor readings for running, sports walking and swimming.

use thiserror::Error;

pub mod coefficients;
pub mod config;
pub mod driver;
pub mod message;
pub mod package;
pub mod training;

pub use coefficients::Coefficients;
pub use message::InfoMessage;
pub use package::{Package, WorkoutFile, WorkoutType, read_package};
pub use training::{Running, SportsWalking, Swimming, Training, TrainingRecord};

#[derive(Debug, Error)]
pub enum WorkoutError {
    #[error("unknown workout type: {0}")]
    UnknownWorkoutType(String),
    #[error("{workout_type} expects {expected} values, got {got}")]
    ArgumentCount {
        workout_type: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for workout operations.
pub type WorkoutResult<T> = Result<T, WorkoutError>;
