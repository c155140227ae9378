//! Conversion factors and empirical calorie coefficients.

use serde::{Deserialize, Serialize};

/// Stride length of a land step, in meters.
pub const LEN_STEP: f64 = 0.65;
/// Length of one swimming stroke, in meters.
pub const SWIM_LEN_STEP: f64 = 1.38;
pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_HOUR: f64 = 60.0;

pub const RUN_CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
pub const RUN_CALORIES_SPEED_SHIFT: f64 = 20.0;

pub const WALK_CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
pub const WALK_CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

pub const SWIM_CALORIES_SPEED_ADDITION: f64 = 1.1;
pub const SWIM_CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Calorie formula coefficients for every workout type.
///
/// Deserializes with per-field defaults, so a workout file only needs to
/// name the values it overrides.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coefficients {
    pub running: RunningCoefficients,
    pub walking: WalkingCoefficients,
    pub swimming: SwimmingCoefficients,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunningCoefficients {
    pub speed_multiplier: f64,
    pub speed_shift: f64,
}

impl Default for RunningCoefficients {
    fn default() -> Self {
        Self {
            speed_multiplier: RUN_CALORIES_SPEED_MULTIPLIER,
            speed_shift: RUN_CALORIES_SPEED_SHIFT,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkingCoefficients {
    pub weight_multiplier: f64,
    pub speed_height_multiplier: f64,
}

impl Default for WalkingCoefficients {
    fn default() -> Self {
        Self {
            weight_multiplier: WALK_CALORIES_WEIGHT_MULTIPLIER,
            speed_height_multiplier: WALK_CALORIES_SPEED_HEIGHT_MULTIPLIER,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwimmingCoefficients {
    pub speed_addition: f64,
    pub weight_multiplier: f64,
}

impl Default for SwimmingCoefficients {
    fn default() -> Self {
        Self {
            speed_addition: SWIM_CALORIES_SPEED_ADDITION,
            weight_multiplier: SWIM_CALORIES_WEIGHT_MULTIPLIER,
        }
    }
}
