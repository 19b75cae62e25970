// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod goal;
pub mod leaderboard;
pub mod notification;
pub mod profile;
pub mod social;
pub mod workout;

pub use goal::{Achievement, Goal, GoalType, GoalUpdate, NewGoal};
pub use leaderboard::{LeaderboardEntry, LeaderboardMetric};
pub use notification::{Notification, NotificationKind};
pub use profile::{Profile, ProfileStats, ProfileUpdate};
pub use social::{FeedAuthor, FeedPost, Friend, FriendSuggestion, NewPost, PostType};
pub use workout::{NewWorkout, Workout, WorkoutType};
