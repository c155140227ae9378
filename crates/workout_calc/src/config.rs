use std::path::PathBuf;

use crate::driver::OutputFormat;
use crate::WorkoutError;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub log_level: String,
    pub packages_path: Option<PathBuf>,
    pub output: OutputFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, WorkoutError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Reads configuration values through `get` so tests don't have to touch
    /// the process environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, WorkoutError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let log_level = get("WORKOUT_CALC_LOG_LEVEL")
            .or_else(|| get("RUST_LOG"))
            .unwrap_or_else(|| "info".into());
        let packages_path = get("WORKOUT_CALC_PACKAGES")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let output = match get("WORKOUT_CALC_OUTPUT") {
            Some(v) => v.parse()?,
            None => OutputFormat::default(),
        };
        Ok(Self {
            log_level,
            packages_path,
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_defaults() {
        let cfg = Config::from_env_with(|_| None).expect("cfg");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.packages_path, None);
        assert_eq!(cfg.output, OutputFormat::Text);
    }

    #[test]
    fn from_env_reads_values() {
        let get = |k: &str| match k {
            "WORKOUT_CALC_LOG_LEVEL" => Some("debug".into()),
            "RUST_LOG" => Some("trace".into()),
            "WORKOUT_CALC_PACKAGES" => Some("/tmp/workouts.json".into()),
            "WORKOUT_CALC_OUTPUT" => Some("JSON".into()),
            _ => None,
        };
        let cfg = Config::from_env_with(get).expect("cfg");
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.packages_path, Some(PathBuf::from("/tmp/workouts.json")));
        assert_eq!(cfg.output, OutputFormat::Json);
    }

    #[test]
    fn from_env_falls_back_to_rust_log() {
        let get = |k: &str| (k == "RUST_LOG").then(|| "warn".to_string());
        let cfg = Config::from_env_with(get).expect("cfg");
        assert_eq!(cfg.log_level, "warn");
    }

    #[test]
    fn from_env_rejects_unknown_output() {
        let get = |k: &str| (k == "WORKOUT_CALC_OUTPUT").then(|| "xml".to_string());
        let res = Config::from_env_with(get);
        assert!(matches!(res, Err(WorkoutError::Config(_))));
    }
}
