// SPDX-License-Identifier: MIT

//! Workout comparison engine.
//!
//! Given two workouts of the same activity type, computes per-metric
//! percentage deltas and reshapes the pair into chart-ready series.
//! Pure function of its two inputs: no state, no I/O, deterministic.
//!
//! Delta convention: `(b - a) / a * 100`, rounded to one decimal, with
//! a zero baseline defined as 0.0. Pace is the exception: lower is
//! better, so its delta sign is inverted ("faster by X%" reads
//! positive).

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::workout::{Workout, WorkoutType};

/// Errors from the comparison engine. Both are caller-visible
/// precondition violations, never transient faults.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompareError {
    #[error("cannot compare workouts of different types: {first} vs {second}")]
    IncompatibleTypes {
        first: WorkoutType,
        second: WorkoutType,
    },

    #[error("invalid pace {0:?}, expected \"mm:ss\"")]
    MalformedPace(String),
}

/// Reduced projection of a workout carried in a comparison result.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsProjection {
    pub id: u64,
    pub date: chrono::NaiveDate,
    pub duration_min: u32,
    pub calories: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace: Option<String>,
}

impl From<&Workout> for MetricsProjection {
    fn from(w: &Workout) -> Self {
        Self {
            id: w.id,
            date: w.date,
            duration_min: w.duration_min,
            calories: w.calories,
            heart_rate: w.heart_rate,
            distance_km: w.distance_km,
            pace: w.pace.clone(),
        }
    }
}

/// One dataset within a chart series.
#[derive(Debug, Clone, Serialize)]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
}

/// Chart-ready series: raw labels and numeric data only. Display
/// formatting and color coding belong to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

/// Result of comparing two workouts. Recomputed on every request and
/// never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub first: MetricsProjection,
    pub second: MetricsProjection,
    /// Metric name to signed percentage change, one decimal place
    pub differences: BTreeMap<String, f64>,
    /// Grouped bars over duration/calories/heart rate, one dataset per
    /// workout labeled by its date
    pub metrics_chart: ChartSeries,
    /// Two-point distance bars, present when both workouts carry distance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_chart: Option<ChartSeries>,
}

/// Parse a "mm:ss" pace string into total seconds per kilometer.
pub fn parse_pace(pace: &str) -> Result<u32, CompareError> {
    let malformed = || CompareError::MalformedPace(pace.to_string());

    let (min, sec) = pace.split_once(':').ok_or_else(malformed)?;
    let min: u32 = min.parse().map_err(|_| malformed())?;
    let sec: u32 = sec.parse().map_err(|_| malformed())?;
    if sec >= 60 {
        return Err(malformed());
    }

    Ok(min * 60 + sec)
}

/// Signed percentage change from `a` to `b`, one decimal place.
/// Defined as 0.0 when the baseline is zero: the percentage concept is
/// undefined there and a zero baseline is valid (if degenerate) input.
pub fn percent_delta(a: f64, b: f64) -> f64 {
    if a == 0.0 {
        return 0.0;
    }
    round_one_decimal((b - a) / a * 100.0)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Compare two workouts of the same type.
///
/// Fails closed with [`CompareError::IncompatibleTypes`] when the types
/// differ. A malformed pace string on either side degrades gracefully:
/// the pace delta is dropped, everything else is still computed.
pub fn compare(a: &Workout, b: &Workout) -> Result<Comparison, CompareError> {
    if a.workout_type != b.workout_type {
        return Err(CompareError::IncompatibleTypes {
            first: a.workout_type,
            second: b.workout_type,
        });
    }

    let mut differences = BTreeMap::new();
    differences.insert(
        "duration".to_string(),
        percent_delta(f64::from(a.duration_min), f64::from(b.duration_min)),
    );
    differences.insert(
        "calories".to_string(),
        percent_delta(f64::from(a.calories), f64::from(b.calories)),
    );
    if let (Some(ha), Some(hb)) = (a.heart_rate, b.heart_rate) {
        differences.insert(
            "heart_rate".to_string(),
            percent_delta(f64::from(ha), f64::from(hb)),
        );
    }

    let metrics_chart = ChartSeries {
        labels: vec![
            "Duration (min)".to_string(),
            "Calories".to_string(),
            "Heart Rate (avg)".to_string(),
        ],
        datasets: vec![metrics_dataset(a), metrics_dataset(b)],
    };

    let distance_chart = match (a.distance_km, b.distance_km) {
        (Some(da), Some(db)) => {
            differences.insert("distance".to_string(), percent_delta(da, db));

            if let Some(pace_delta) = pace_delta(a, b) {
                differences.insert("pace".to_string(), pace_delta);
            }

            Some(ChartSeries {
                labels: vec![a.date.to_string(), b.date.to_string()],
                datasets: vec![ChartDataset {
                    label: "Distance (km)".to_string(),
                    data: vec![da, db],
                }],
            })
        }
        _ => None,
    };

    Ok(Comparison {
        first: MetricsProjection::from(a),
        second: MetricsProjection::from(b),
        differences,
        metrics_chart,
        distance_chart,
    })
}

fn metrics_dataset(w: &Workout) -> ChartDataset {
    ChartDataset {
        label: w.date.to_string(),
        data: vec![
            f64::from(w.duration_min),
            f64::from(w.calories),
            f64::from(w.heart_rate.unwrap_or(0)),
        ],
    }
}

/// Inverted-sign pace delta, or None when either pace is absent or
/// unparseable.
fn pace_delta(a: &Workout, b: &Workout) -> Option<f64> {
    let (pace_a, pace_b) = (a.pace.as_deref()?, b.pace.as_deref()?);

    match (parse_pace(pace_a), parse_pace(pace_b)) {
        (Ok(secs_a), Ok(secs_b)) => {
            if secs_a == 0 {
                return Some(0.0);
            }
            // Lower pace is faster: invert so improvement reads positive
            let secs_a = f64::from(secs_a);
            let secs_b = f64::from(secs_b);
            Some(round_one_decimal((secs_a - secs_b) / secs_a * 100.0))
        }
        _ => {
            tracing::warn!(pace_a, pace_b, "Dropping unparseable pace from comparison");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn running(id: u64, duration: u32, calories: u32, hr: u32, km: f64, pace: &str) -> Workout {
        Workout {
            id,
            workout_type: WorkoutType::Running,
            date: NaiveDate::from_ymd_opt(2025, 3, 17).unwrap(),
            duration_min: duration,
            calories,
            distance_km: Some(km),
            pace: Some(pace.to_string()),
            heart_rate: Some(hr),
            notes: None,
            route: None,
            splits: None,
            exercises: None,
        }
    }

    #[test]
    fn test_parse_pace() {
        assert_eq!(parse_pace("6:44"), Ok(404));
        assert_eq!(parse_pace("0:59"), Ok(59));
        assert_eq!(parse_pace("30:00"), Ok(1800));
    }

    #[test]
    fn test_parse_pace_rejects_malformed() {
        for bad in ["fast", "6", "6:", ":30", "6:75", "6:44:00", "-1:30"] {
            assert!(parse_pace(bad).is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_percent_delta_zero_baseline() {
        assert_eq!(percent_delta(0.0, 100.0), 0.0);
    }

    #[test]
    fn test_percent_delta_rounds_to_one_decimal() {
        assert_eq!(percent_delta(35.0, 32.0), -8.6);
        assert_eq!(percent_delta(3.0, 4.0), 33.3);
    }

    #[test]
    fn test_compare_known_running_pair() {
        let a = running(1, 35, 420, 142, 5.2, "6:44");
        let b = running(2, 32, 410, 145, 5.0, "6:24");

        let result = compare(&a, &b).unwrap();
        let d = &result.differences;

        assert_eq!(d["duration"], -8.6);
        assert_eq!(d["calories"], -2.4);
        assert_eq!(d["heart_rate"], 2.1);
        assert_eq!(d["distance"], -3.8);
        // b is faster, so the inverted delta is positive (~+4.95%)
        assert!((d["pace"] - 4.95).abs() < 0.1, "pace delta {}", d["pace"]);
    }

    #[test]
    fn test_compare_rejects_mismatched_types() {
        let a = running(1, 35, 420, 142, 5.2, "6:44");
        let mut b = running(2, 32, 410, 145, 5.0, "6:24");
        b.workout_type = WorkoutType::Cycling;

        let err = compare(&a, &b).unwrap_err();
        assert!(matches!(err, CompareError::IncompatibleTypes { .. }));
    }

    #[test]
    fn test_compare_equal_workouts_all_zero() {
        let a = running(1, 35, 420, 142, 5.2, "6:44");
        let b = running(2, 35, 420, 142, 5.2, "6:44");

        let result = compare(&a, &b).unwrap();
        for (metric, delta) in &result.differences {
            assert_eq!(*delta, 0.0, "{metric} should be 0");
        }
    }

    #[test]
    fn test_compare_zero_calories_baseline() {
        let mut a = running(1, 35, 0, 142, 5.2, "6:44");
        a.calories = 0;
        let b = running(2, 32, 410, 145, 5.0, "6:24");

        let result = compare(&a, &b).unwrap();
        assert_eq!(result.differences["calories"], 0.0);
    }

    #[test]
    fn test_compare_malformed_pace_degrades_gracefully() {
        let mut a = running(1, 35, 420, 142, 5.2, "6:44");
        a.pace = Some("not-a-pace".to_string());
        let b = running(2, 32, 410, 145, 5.0, "6:24");

        let result = compare(&a, &b).unwrap();
        assert!(!result.differences.contains_key("pace"));
        assert!(result.differences.contains_key("distance"));
        assert!(result.distance_chart.is_some());
    }

    #[test]
    fn test_compare_without_distance() {
        let mut a = running(1, 45, 350, 128, 0.0, "0:00");
        a.workout_type = WorkoutType::WeightTraining;
        a.distance_km = None;
        a.pace = None;
        let mut b = a.clone();
        b.id = 2;
        b.duration_min = 50;
        b.calories = 380;

        let result = compare(&a, &b).unwrap();
        assert!(result.distance_chart.is_none());
        assert!(!result.differences.contains_key("distance"));
        assert!(!result.differences.contains_key("pace"));
        assert!(result.differences["duration"] > 0.0);
    }

    #[test]
    fn test_metrics_chart_shape() {
        let a = running(1, 35, 420, 142, 5.2, "6:44");
        let b = running(2, 32, 410, 145, 5.0, "6:24");

        let chart = compare(&a, &b).unwrap().metrics_chart;
        assert_eq!(
            chart.labels,
            vec!["Duration (min)", "Calories", "Heart Rate (avg)"]
        );
        assert_eq!(chart.datasets.len(), 2);
        assert_eq!(chart.datasets[0].label, "2025-03-17");
        assert_eq!(chart.datasets[0].data, vec![35.0, 420.0, 142.0]);
        assert_eq!(chart.datasets[1].data, vec![32.0, 410.0, 145.0]);
    }
}
