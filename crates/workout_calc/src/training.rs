//! Workout records and their distance, speed and calorie formulas.
//!
//! `TrainingRecord` carries the readings every workout shares and the
//! land-based distance and speed formulas. Each specialization wraps it and
//! overrides what its activity measures differently. `Training` closes the
//! set: there is no calorie formula outside the three variants.

use crate::coefficients::{
    Coefficients, LEN_STEP, M_IN_KM, MIN_IN_HOUR, RunningCoefficients, SWIM_LEN_STEP,
    SwimmingCoefficients, WalkingCoefficients,
};
use crate::message::InfoMessage;
use crate::{WorkoutError, WorkoutResult};

fn ensure_positive(field: &str, value: f64) -> WorkoutResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::InvalidInput(format!(
            "{field} must be a positive finite number, got {value}"
        )))
    }
}

fn ensure_non_negative(field: &str, value: f64) -> WorkoutResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::InvalidInput(format!(
            "{field} must be a non-negative finite number, got {value}"
        )))
    }
}

fn ensure_finite(field: &str, value: f64) -> WorkoutResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(WorkoutError::InvalidInput(format!(
            "{field} is out of range, got {value}"
        )))
    }
}

/// Floored division with the same result as a floor-divide of two floats in
/// exact arithmetic, i.e. `floor(lhs / rhs)` computed from the remainder so
/// that a quotient rounding up to the next integer is not counted.
pub(crate) fn floor_div(lhs: f64, rhs: f64) -> f64 {
    let rem = lhs % rhs;
    let mut div = (lhs - rem) / rhs;
    if rem != 0.0 && (rhs < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(lhs / rhs);
    }
    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

/// Readings shared by every workout.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingRecord {
    action: u32,
    duration: f64,
    weight: f64,
}

impl TrainingRecord {
    /// `action` counts steps or strokes, `duration` is in hours, `weight` in kg.
    pub fn new(action: u32, duration: f64, weight: f64) -> WorkoutResult<Self> {
        let record = Self {
            action,
            duration: ensure_positive("duration", duration)?,
            weight: ensure_positive("weight", weight)?,
        };
        ensure_finite("mean speed", record.mean_speed())?;
        Ok(record)
    }

    pub fn action(&self) -> u32 {
        self.action
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Distance in km for land steps.
    pub fn distance(&self) -> f64 {
        self.distance_with_step(LEN_STEP)
    }

    /// Mean speed in km/h over the land distance.
    pub fn mean_speed(&self) -> f64 {
        self.distance() / self.duration
    }

    fn distance_with_step(&self, len_step: f64) -> f64 {
        f64::from(self.action) * len_step / M_IN_KM
    }

    fn duration_minutes(&self) -> f64 {
        self.duration * MIN_IN_HOUR
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Running {
    record: TrainingRecord,
}

impl Running {
    pub const NAME: &'static str = "Running";

    pub fn new(action: u32, duration: f64, weight: f64) -> WorkoutResult<Self> {
        Ok(Self {
            record: TrainingRecord::new(action, duration, weight)?,
        })
    }

    pub fn record(&self) -> &TrainingRecord {
        &self.record
    }

    pub fn spent_calories(&self, coeffs: &RunningCoefficients) -> f64 {
        (coeffs.speed_multiplier * self.record.mean_speed() - coeffs.speed_shift)
            * self.record.weight
            / M_IN_KM
            * self.record.duration_minutes()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SportsWalking {
    record: TrainingRecord,
    height: f64,
}

impl SportsWalking {
    pub const NAME: &'static str = "SportsWalking";

    /// `height` is in centimeters.
    pub fn new(action: u32, duration: f64, weight: f64, height: f64) -> WorkoutResult<Self> {
        Ok(Self {
            record: TrainingRecord::new(action, duration, weight)?,
            height: ensure_positive("height", height)?,
        })
    }

    pub fn record(&self) -> &TrainingRecord {
        &self.record
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// The squared-speed-over-height term is floor-divided, not divided.
    pub fn spent_calories(&self, coeffs: &WalkingCoefficients) -> f64 {
        let weight = self.record.weight;
        let speed_term = floor_div(self.record.mean_speed().powi(2), self.height);
        (coeffs.weight_multiplier * weight + speed_term * coeffs.speed_height_multiplier * weight)
            * MIN_IN_HOUR
            * self.record.duration
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Swimming {
    record: TrainingRecord,
    length_pool: f64,
    count_pool: f64,
}

impl Swimming {
    pub const NAME: &'static str = "Swimming";

    /// `length_pool` is in meters; `count_pool` is the number of pool lengths swum.
    pub fn new(
        action: u32,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: f64,
    ) -> WorkoutResult<Self> {
        let swimming = Self {
            record: TrainingRecord::new(action, duration, weight)?,
            length_pool: ensure_positive("length_pool", length_pool)?,
            count_pool: ensure_non_negative("count_pool", count_pool)?,
        };
        ensure_finite("mean speed", swimming.mean_speed())?;
        Ok(swimming)
    }

    pub fn record(&self) -> &TrainingRecord {
        &self.record
    }

    pub fn length_pool(&self) -> f64 {
        self.length_pool
    }

    pub fn count_pool(&self) -> f64 {
        self.count_pool
    }

    /// Stroke distance in km.
    pub fn distance(&self) -> f64 {
        self.record.distance_with_step(SWIM_LEN_STEP)
    }

    /// Lap-based speed; ignores the stroke count.
    pub fn mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool / M_IN_KM / self.record.duration
    }

    pub fn spent_calories(&self, coeffs: &SwimmingCoefficients) -> f64 {
        (self.mean_speed() + coeffs.speed_addition) * coeffs.weight_multiplier * self.record.weight
    }
}

/// A workout of one of the supported activity types.
#[derive(Clone, Debug, PartialEq)]
pub enum Training {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Training {
    /// Name reported in the summary line.
    pub fn training_type(&self) -> &'static str {
        match self {
            Training::Running(_) => Running::NAME,
            Training::SportsWalking(_) => SportsWalking::NAME,
            Training::Swimming(_) => Swimming::NAME,
        }
    }

    pub fn record(&self) -> &TrainingRecord {
        match self {
            Training::Running(t) => t.record(),
            Training::SportsWalking(t) => t.record(),
            Training::Swimming(t) => t.record(),
        }
    }

    pub fn distance(&self) -> f64 {
        match self {
            Training::Swimming(t) => t.distance(),
            Training::Running(_) | Training::SportsWalking(_) => self.record().distance(),
        }
    }

    pub fn mean_speed(&self) -> f64 {
        match self {
            Training::Swimming(t) => t.mean_speed(),
            Training::Running(_) | Training::SportsWalking(_) => self.record().mean_speed(),
        }
    }

    pub fn spent_calories(&self) -> f64 {
        self.spent_calories_with(&Coefficients::default())
    }

    pub fn spent_calories_with(&self, coeffs: &Coefficients) -> f64 {
        match self {
            Training::Running(t) => t.spent_calories(&coeffs.running),
            Training::SportsWalking(t) => t.spent_calories(&coeffs.walking),
            Training::Swimming(t) => t.spent_calories(&coeffs.swimming),
        }
    }

    pub fn show_training_info(&self) -> WorkoutResult<InfoMessage> {
        self.show_training_info_with(&Coefficients::default())
    }

    /// Fails when any summary value overflows, e.g. calories for an extreme
    /// weight or substituted coefficient.
    pub fn show_training_info_with(&self, coeffs: &Coefficients) -> WorkoutResult<InfoMessage> {
        Ok(InfoMessage {
            training_type: self.training_type().to_string(),
            duration: self.record().duration(),
            distance: ensure_finite("distance", self.distance())?,
            speed: ensure_finite("mean speed", self.mean_speed())?,
            calories: ensure_finite("calories", self.spent_calories_with(coeffs))?,
        })
    }
}

impl From<Running> for Training {
    fn from(t: Running) -> Self {
        Training::Running(t)
    }
}

impl From<SportsWalking> for Training {
    fn from(t: SportsWalking) -> Self {
        Training::SportsWalking(t)
    }
}

impl From<Swimming> for Training {
    fn from(t: Swimming) -> Self {
        Training::Swimming(t)
    }
}
