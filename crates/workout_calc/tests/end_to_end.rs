use std::io::Write;

use workout_calc::driver::{self, OutputFormat};
use workout_calc::{Coefficients, WorkoutError, WorkoutFile};

const EXPECTED: [&str; 3] = [
    "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.",
    "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.",
    "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500.",
];

#[test]
fn sample_packages_produce_three_lines_in_order() {
    let mut out = Vec::new();
    let n = driver::run(
        &driver::sample_packages(),
        &Coefficients::default(),
        OutputFormat::Text,
        &mut out,
    )
    .expect("run");
    assert_eq!(n, 3);
    let text = String::from_utf8(out).expect("utf8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, EXPECTED);
    assert!(text.ends_with('\n'));
}

#[test]
fn workout_file_is_processed_like_sample() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    write!(
        file,
        r#"{{"packages": [
            {{"workout_type": "SWM", "data": [720, 1, 80, 25, 40]}},
            {{"workout_type": "RUN", "data": [15000, 1, 75]}},
            {{"workout_type": "WLK", "data": [9000, 1, 75, 180]}}
        ]}}"#
    )
    .expect("write");

    let workouts = WorkoutFile::load(file.path()).expect("load");
    let mut out = Vec::new();
    driver::run(
        &workouts.packages,
        &workouts.coefficients,
        OutputFormat::Text,
        &mut out,
    )
    .expect("run");
    let text = String::from_utf8(out).expect("utf8");
    assert_eq!(text.lines().collect::<Vec<_>>(), EXPECTED);
}

#[test]
fn workout_file_coefficients_change_calories() {
    let workouts = WorkoutFile::from_json(
        r#"{"packages": [{"workout_type": "SWM", "data": [720, 1, 80, 25, 40]}],
            "coefficients": {"swimming": {"weight_multiplier": 3.0}}}"#,
    )
    .expect("parse");
    let mut out = Vec::new();
    driver::run(
        &workouts.packages,
        &workouts.coefficients,
        OutputFormat::Text,
        &mut out,
    )
    .expect("run");
    let text = String::from_utf8(out).expect("utf8");
    assert!(text.contains("Потрачено ккал: 504.000."));
}

#[test]
fn missing_workout_file_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let res = WorkoutFile::load(&dir.path().join("absent.json"));
    assert!(matches!(res, Err(WorkoutError::Io(_))));
}

#[test]
fn zero_duration_aborts_run() {
    let workouts = WorkoutFile::from_json(
        r#"{"packages": [{"workout_type": "RUN", "data": [15000, 0, 75]}]}"#,
    )
    .expect("parse");
    let mut out = Vec::new();
    let res = driver::run(
        &workouts.packages,
        &Coefficients::default(),
        OutputFormat::Text,
        &mut out,
    );
    assert!(matches!(res, Err(WorkoutError::InvalidInput(_))));
    assert!(out.is_empty());
}
