//! Social feed, friend, and suggestion models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::workout::WorkoutType;

/// The user attached to a feed post or notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedAuthor {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub avatar: Option<String>,
}

/// What a feed post is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostType {
    Workout,
    Achievement,
    Goal,
}

/// Workout summary embedded in a feed post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostWorkout {
    pub workout_type: WorkoutType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    pub duration_min: u32,
    pub date: String,
}

/// Achievement summary embedded in a feed post or notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostAchievement {
    pub name: String,
    pub description: String,
}

/// Goal summary embedded in a feed post or notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostGoal {
    pub name: String,
    pub target: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achieved: Option<bool>,
}

/// One entry in the social feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedPost {
    pub id: u64,
    pub user: FeedAuthor,
    pub post_type: PostType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout: Option<PostWorkout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievement: Option<PostAchievement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<PostGoal>,
    pub caption: String,
    pub likes: u32,
    pub comments: u32,
    /// RFC3339 timestamp
    pub timestamp: String,
}

/// Request body for posting to the feed.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPost {
    pub post_type: PostType,
    pub caption: String,
    pub workout: Option<PostWorkout>,
    pub achievement: Option<PostAchievement>,
    pub goal: Option<PostGoal>,
}

/// A connected friend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Friend {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub avatar: Option<String>,
    /// RFC3339 timestamp of their most recent workout
    pub last_workout: String,
}

/// A suggested connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendSuggestion {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub avatar: Option<String>,
    pub mutual_friends: u32,
}

/// Minimal workout reference used by notifications.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutRef {
    pub id: u64,
    pub workout_type: WorkoutType,
    pub date: NaiveDate,
}
