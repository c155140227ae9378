//! Runs packages through dispatch, summary and formatting in input order.

use std::io::Write;
use std::str::FromStr;

use crate::coefficients::Coefficients;
use crate::message::InfoMessage;
use crate::package::Package;
use crate::{WorkoutError, WorkoutResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(WorkoutError::Config(format!(
                "unsupported output format `{other}` (expected text or json)"
            ))),
        }
    }
}

/// The sensor readings processed when no workout file is given.
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", [15000.0, 1.0, 75.0]),
        Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

pub fn render(info: &InfoMessage, format: OutputFormat) -> WorkoutResult<String> {
    match format {
        OutputFormat::Text => Ok(info.get_message()),
        OutputFormat::Json => Ok(serde_json::to_string(info)?),
    }
}

/// Write one line per package to `out`.
///
/// Stops at the first package that fails to dispatch; lines already written
/// for earlier packages stay written. Returns the number of lines written.
pub fn run<W: Write>(
    packages: &[Package],
    coeffs: &Coefficients,
    format: OutputFormat,
    out: &mut W,
) -> WorkoutResult<usize> {
    tracing::info!(packages = packages.len(), ?format, "processing workouts");
    for (idx, package) in packages.iter().enumerate() {
        let training = package.read()?;
        let info = training.show_training_info_with(coeffs)?;
        tracing::debug!(
            idx,
            training_type = %info.training_type,
            distance = info.distance,
            speed = info.speed,
            calories = info.calories,
            "workout summarized"
        );
        writeln!(out, "{}", render(&info, format)?)?;
    }
    tracing::info!(lines = packages.len(), "all workouts processed");
    Ok(packages.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_parses_case_insensitively() {
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn run_stops_at_unknown_code() {
        let packages = vec![
            Package::new("RUN", [15000.0, 1.0, 75.0]),
            Package::new("XXX", [1.0, 1.0, 1.0]),
            Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
        ];
        let mut out = Vec::new();
        let err = run(&packages, &Coefficients::default(), OutputFormat::Text, &mut out)
            .unwrap_err();
        assert!(matches!(err, WorkoutError::UnknownWorkoutType(_)));
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("Тип тренировки: Running;"));
    }

    #[test]
    fn json_lines_carry_summary_fields() {
        let mut out = Vec::new();
        let n = run(
            &sample_packages()[1..2],
            &Coefficients::default(),
            OutputFormat::Json,
            &mut out,
        )
        .unwrap();
        assert_eq!(n, 1);
        let line = String::from_utf8(out).unwrap();
        let v: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(v["training_type"], "Running");
        assert!((v["calories"].as_f64().unwrap() - 699.75).abs() < 1e-9);
    }
}
