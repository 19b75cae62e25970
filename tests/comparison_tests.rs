// SPDX-License-Identifier: MIT

//! Property tests for the comparison engine.

use chrono::NaiveDate;
use fittrack_api::models::workout::{Workout, WorkoutType};
use fittrack_api::services::comparison::{compare, CompareError};

fn workout(
    id: u64,
    ty: WorkoutType,
    duration: u32,
    calories: u32,
    hr: Option<u32>,
    km: Option<f64>,
    pace: Option<&str>,
) -> Workout {
    Workout {
        id,
        workout_type: ty,
        date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        duration_min: duration,
        calories,
        distance_km: km,
        pace: pace.map(String::from),
        heart_rate: hr,
        notes: None,
        route: None,
        splits: None,
        exercises: None,
    }
}

#[test]
fn test_equal_metrics_give_zero_deltas() {
    let a = workout(1, WorkoutType::Cycling, 60, 550, Some(155), Some(15.0), Some("4:00"));
    let b = workout(2, WorkoutType::Cycling, 60, 550, Some(155), Some(15.0), Some("4:00"));

    let result = compare(&a, &b).unwrap();
    for (metric, delta) in &result.differences {
        assert_eq!(*delta, 0.0, "{metric} delta should be zero");
    }
}

#[test]
fn test_delta_sign_follows_metric_direction() {
    let a = workout(1, WorkoutType::Running, 30, 300, Some(140), Some(5.0), Some("6:00"));
    let b = workout(2, WorkoutType::Running, 40, 250, Some(150), Some(6.0), Some("6:40"));

    let d = compare(&a, &b).unwrap().differences;
    assert!(d["duration"] > 0.0); // b longer
    assert!(d["calories"] < 0.0); // b fewer
    assert!(d["heart_rate"] > 0.0);
    assert!(d["distance"] > 0.0);
    // b is slower (400s vs 360s per km), so the inverted pace delta is negative
    assert!(d["pace"] < 0.0);
}

#[test]
fn test_pace_delta_positive_when_second_workout_faster() {
    let a = workout(1, WorkoutType::Running, 35, 420, Some(142), Some(5.2), Some("6:44"));
    let b = workout(2, WorkoutType::Running, 32, 410, Some(145), Some(5.0), Some("6:24"));

    let d = compare(&a, &b).unwrap().differences;
    assert!(d["pace"] > 0.0, "faster second workout should read positive");
}

#[test]
fn test_swapping_arguments_inverts_delta_signs() {
    let a = workout(1, WorkoutType::Running, 35, 420, Some(142), Some(5.2), Some("6:44"));
    let b = workout(2, WorkoutType::Running, 32, 410, Some(145), Some(5.0), Some("6:24"));

    let forward = compare(&a, &b).unwrap().differences;
    let backward = compare(&b, &a).unwrap().differences;

    // The baselines differ, so magnitudes differ, but every sign inverts.
    for metric in ["duration", "calories", "heart_rate", "distance", "pace"] {
        assert_eq!(
            forward[metric].signum(),
            -backward[metric].signum(),
            "{metric} sign should invert when arguments swap"
        );
    }
}

#[test]
fn test_known_running_pair_deltas() {
    let a = workout(1, WorkoutType::Running, 35, 420, Some(142), Some(5.2), Some("6:44"));
    let b = workout(2, WorkoutType::Running, 32, 410, Some(145), Some(5.0), Some("6:24"));

    let d = compare(&a, &b).unwrap().differences;
    assert_eq!(d["duration"], -8.6);
    assert_eq!(d["calories"], -2.4);
    assert_eq!(d["heart_rate"], 2.1);
    assert_eq!(d["distance"], -3.8);
    assert!((d["pace"] - 4.95).abs() < 0.1);
}

#[test]
fn test_zero_calorie_baseline_is_defined_as_zero() {
    let a = workout(1, WorkoutType::Yoga, 30, 0, Some(95), None, None);
    let b = workout(2, WorkoutType::Yoga, 30, 200, Some(95), None, None);

    let d = compare(&a, &b).unwrap().differences;
    assert_eq!(d["calories"], 0.0);
}

#[test]
fn test_mismatched_types_produce_no_result() {
    let a = workout(1, WorkoutType::Running, 35, 420, Some(142), Some(5.2), Some("6:44"));
    let b = workout(2, WorkoutType::Cycling, 60, 550, Some(155), Some(15.0), Some("4:00"));

    match compare(&a, &b) {
        Err(CompareError::IncompatibleTypes { first, second }) => {
            assert_eq!(first, WorkoutType::Running);
            assert_eq!(second, WorkoutType::Cycling);
        }
        other => panic!("expected IncompatibleTypes, got {other:?}"),
    }
}

#[test]
fn test_missing_heart_rate_drops_only_that_delta() {
    let a = workout(1, WorkoutType::Running, 35, 420, None, Some(5.2), Some("6:44"));
    let b = workout(2, WorkoutType::Running, 32, 410, Some(145), Some(5.0), Some("6:24"));

    let result = compare(&a, &b).unwrap();
    assert!(!result.differences.contains_key("heart_rate"));
    assert!(result.differences.contains_key("duration"));
    assert!(result.differences.contains_key("distance"));
}

#[test]
fn test_distance_chart_present_only_with_both_distances() {
    let with = compare(
        &workout(1, WorkoutType::Running, 35, 420, Some(142), Some(5.2), Some("6:44")),
        &workout(2, WorkoutType::Running, 32, 410, Some(145), Some(5.0), Some("6:24")),
    )
    .unwrap();
    assert!(with.distance_chart.is_some());

    let without = compare(
        &workout(1, WorkoutType::Yoga, 30, 200, Some(95), None, None),
        &workout(2, WorkoutType::Yoga, 35, 220, Some(98), None, None),
    )
    .unwrap();
    assert!(without.distance_chart.is_none());
}

#[test]
fn test_compare_is_deterministic() {
    let a = workout(1, WorkoutType::Running, 35, 420, Some(142), Some(5.2), Some("6:44"));
    let b = workout(2, WorkoutType::Running, 32, 410, Some(145), Some(5.0), Some("6:24"));

    let first = compare(&a, &b).unwrap();
    let second = compare(&a, &b).unwrap();
    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}
