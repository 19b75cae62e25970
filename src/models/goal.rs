//! Goal and achievement models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The kinds of goal the app tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    WeeklyWorkouts,
    WeeklyDistance,
    WeeklyCalories,
    TargetWeight,
}

impl GoalType {
    /// Human-readable goal name.
    pub fn name(self) -> &'static str {
        match self {
            Self::WeeklyWorkouts => "Weekly Workouts",
            Self::WeeklyDistance => "Weekly Distance",
            Self::WeeklyCalories => "Weekly Calories",
            Self::TargetWeight => "Target Weight",
        }
    }

    /// Unit the target is expressed in.
    pub fn unit(self) -> &'static str {
        match self {
            Self::WeeklyWorkouts => "workouts",
            Self::WeeklyDistance => "km",
            Self::WeeklyCalories => "calories",
            Self::TargetWeight => "kg",
        }
    }

    /// Whether progress counts down toward the target (weight loss)
    /// rather than up.
    pub fn is_decreasing(self) -> bool {
        matches!(self, Self::TargetWeight)
    }
}

/// A tracked fitness goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: u64,
    pub goal_type: GoalType,
    pub name: String,
    pub target: f64,
    pub current: f64,
    pub unit: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub achieved: bool,
}

impl Goal {
    /// Recompute the achieved flag from current progress, respecting the
    /// goal's direction.
    pub fn refresh_achieved(&mut self) {
        self.achieved = if self.goal_type.is_decreasing() {
            self.current <= self.target
        } else {
            self.current >= self.target
        };
    }
}

/// Request body for creating a goal.
#[derive(Debug, Clone, Deserialize)]
pub struct NewGoal {
    pub goal_type: GoalType,
    pub target: f64,
    pub end_date: NaiveDate,
}

/// Progress patch for an existing goal.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GoalUpdate {
    pub target: Option<f64>,
    pub current: Option<f64>,
    pub end_date: Option<NaiveDate>,
}

/// An earned achievement badge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
}
