//! Notification model.

use serde::{Deserialize, Serialize};

use crate::models::social::{FeedAuthor, PostAchievement, PostGoal, WorkoutRef};

/// What triggered a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Like,
    Comment,
    Achievement,
    Follow,
    Goal,
}

/// One notification. System notifications (achievement, goal) carry no
/// actor; social ones do.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<FeedAuthor>,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout: Option<WorkoutRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievement: Option<PostAchievement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<PostGoal>,
    /// RFC3339 timestamp
    pub timestamp: String,
    pub read: bool,
}
