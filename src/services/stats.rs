// SPDX-License-Identifier: MIT

//! Dashboard aggregates and chart shaping.
//!
//! Series are computed from the workout collection rather than stored,
//! so they stay consistent with whatever the store currently holds.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::profile::ProfileStats;
use crate::models::workout::{Workout, WorkoutType};
use crate::services::comparison::{ChartDataset, ChartSeries};

/// Number of recent workouts surfaced on the dashboard.
const RECENT_WORKOUTS: usize = 5;

/// Everything the dashboard screen needs in one response.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub stats: ProfileStats,
    pub recent_workouts: Vec<Workout>,
    /// Calories per day over the most recent workout's week, Mon..Sun
    pub weekly_calories: ChartSeries,
    /// Workout count per activity type
    pub workout_types: ChartSeries,
    /// Total distance per calendar month
    pub monthly_distance: ChartSeries,
}

/// Build the dashboard summary from profile aggregates and the workout
/// collection. `workouts` must be sorted by date descending (the store
/// guarantees this).
pub fn dashboard_summary(stats: ProfileStats, workouts: &[Workout]) -> DashboardSummary {
    DashboardSummary {
        stats,
        recent_workouts: workouts.iter().take(RECENT_WORKOUTS).cloned().collect(),
        weekly_calories: weekly_calories_series(workouts),
        workout_types: workout_type_series(workouts),
        monthly_distance: monthly_distance_series(workouts),
    }
}

/// Calories per weekday for the week containing the most recent
/// workout. Days without a workout contribute 0.
pub fn weekly_calories_series(workouts: &[Workout]) -> ChartSeries {
    let labels: Vec<String> = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        .iter()
        .map(ToString::to_string)
        .collect();

    let mut data = vec![0.0; 7];
    if let Some(latest) = workouts.iter().map(|w| w.date).max() {
        let week_start = start_of_week(latest);
        for w in workouts {
            let offset = (w.date - week_start).num_days();
            if (0..7).contains(&offset) {
                data[offset as usize] += f64::from(w.calories);
            }
        }
    }

    ChartSeries {
        labels,
        datasets: vec![ChartDataset {
            label: "Calories".to_string(),
            data,
        }],
    }
}

/// Workout count per activity type, in display order, types with no
/// workouts omitted.
pub fn workout_type_series(workouts: &[Workout]) -> ChartSeries {
    let mut labels = Vec::new();
    let mut data = Vec::new();
    for &ty in WorkoutType::all() {
        let count = workouts.iter().filter(|w| w.workout_type == ty).count();
        if count > 0 {
            labels.push(ty.label().to_string());
            data.push(count as f64);
        }
    }

    ChartSeries {
        labels,
        datasets: vec![ChartDataset {
            label: "Workouts".to_string(),
            data,
        }],
    }
}

/// Total distance per calendar month, oldest first. Months with no
/// distance-based workouts are omitted.
pub fn monthly_distance_series(workouts: &[Workout]) -> ChartSeries {
    let mut by_month: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for w in workouts {
        if let Some(km) = w.distance_km {
            *by_month.entry((w.date.year(), w.date.month())).or_insert(0.0) += km;
        }
    }

    let mut labels = Vec::new();
    let mut data = Vec::new();
    for ((_, month), km) in &by_month {
        labels.push(month_label(*month).to_string());
        data.push(*km);
    }

    ChartSeries {
        labels,
        datasets: vec![ChartDataset {
            label: "Distance (km)".to_string(),
            data,
        }],
    }
}

/// Monday of the week containing `date`.
fn start_of_week(date: NaiveDate) -> NaiveDate {
    let back = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

fn month_label(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        _ => "Dec",
    }
}
