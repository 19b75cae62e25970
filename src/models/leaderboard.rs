//! Leaderboard models.

use serde::{Deserialize, Serialize};

use crate::models::social::FeedAuthor;

/// Metric a leaderboard ranks by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardMetric {
    WeeklyWorkouts,
    WeeklyDistance,
    WeeklyCalories,
    Streak,
}

/// One ranked row in a leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub user: FeedAuthor,
    pub value: f64,
    pub rank: u32,
    #[serde(default)]
    pub is_current_user: bool,
}
