// SPDX-License-Identifier: MIT

//! Workout record model for storage and API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::services::comparison::parse_pace;

/// Enumerated activity category. Determines which optional metrics apply:
/// distance-based types carry `distance_km` and `pace`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutType {
    Running,
    Walking,
    Cycling,
    Swimming,
    #[serde(rename = "Weight Training")]
    WeightTraining,
    Yoga,
    #[serde(rename = "HIIT")]
    Hiit,
    Pilates,
    Other,
}

impl WorkoutType {
    /// Display label, matching the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Walking => "Walking",
            Self::Cycling => "Cycling",
            Self::Swimming => "Swimming",
            Self::WeightTraining => "Weight Training",
            Self::Yoga => "Yoga",
            Self::Hiit => "HIIT",
            Self::Pilates => "Pilates",
            Self::Other => "Other",
        }
    }

    /// Icon identifier for clients. Exhaustive: no fallback branch, so a
    /// new variant forces a decision here.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Running => "walk-outline",
            Self::Walking => "footsteps-outline",
            Self::Cycling => "bicycle-outline",
            Self::Swimming => "water-outline",
            Self::WeightTraining => "barbell-outline",
            Self::Yoga => "body-outline",
            Self::Hiit => "flash-outline",
            Self::Pilates => "accessibility-outline",
            Self::Other => "fitness-outline",
        }
    }

    /// Whether the type carries distance and pace.
    pub fn is_distance_based(self) -> bool {
        matches!(
            self,
            Self::Running | Self::Walking | Self::Cycling | Self::Swimming
        )
    }

    /// All variants, in display order.
    pub fn all() -> &'static [WorkoutType] {
        &[
            Self::Running,
            Self::Walking,
            Self::Cycling,
            Self::Swimming,
            Self::WeightTraining,
            Self::Yoga,
            Self::Hiit,
            Self::Pilates,
            Self::Other,
        ]
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One completed exercise session.
///
/// Invariant: `pace` and `distance_km` are both present or both absent.
/// Records are immutable once loaded; the comparison engine never
/// mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    /// Stable identifier (also the store key)
    pub id: u64,
    /// Activity category
    pub workout_type: WorkoutType,
    /// Calendar date of the session
    pub date: NaiveDate,
    /// Duration in minutes
    pub duration_min: u32,
    /// Calories burned
    pub calories: u32,
    /// Distance in kilometers (distance-based types only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    /// Pace as "mm:ss" per kilometer (present only alongside distance)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace: Option<String>,
    /// Average heart rate in bpm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<u32>,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Route name (distance-based types only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Per-segment checkpoints (detail views only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub splits: Option<Vec<Split>>,
    /// Strength exercises (weight training only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercises: Option<Vec<Exercise>>,
}

/// A sub-segment checkpoint of a workout (e.g. per-kilometer), carrying
/// its own time and heart-rate reading. Not consumed by the comparison
/// engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Split {
    pub km: f64,
    pub time: String,
    pub heart_rate: u32,
}

/// One strength exercise within a weight-training session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub weight_lbs: u32,
}

/// Request body for creating a workout.
#[derive(Debug, Clone, Deserialize)]
pub struct NewWorkout {
    pub workout_type: WorkoutType,
    pub date: NaiveDate,
    pub duration_min: u32,
    #[serde(default)]
    pub calories: u32,
    pub distance_km: Option<f64>,
    pub pace: Option<String>,
    pub heart_rate: Option<u32>,
    pub notes: Option<String>,
}

impl NewWorkout {
    /// Validate field constraints before insertion.
    pub fn validate(&self) -> Result<(), String> {
        if self.duration_min == 0 {
            return Err("duration_min must be positive".to_string());
        }
        if let Some(d) = self.distance_km {
            if d <= 0.0 {
                return Err("distance_km must be positive".to_string());
            }
        }
        match (&self.distance_km, &self.pace) {
            (None, Some(_)) => {
                return Err("pace is only valid alongside distance_km".to_string());
            }
            (Some(_), Some(pace)) => {
                parse_pace(pace).map_err(|e| e.to_string())?;
            }
            _ => {}
        }
        if let Some(hr) = self.heart_rate {
            if hr == 0 {
                return Err("heart_rate must be positive".to_string());
            }
        }
        Ok(())
    }
}
