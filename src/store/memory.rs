// SPDX-License-Identifier: MIT

//! In-memory data source.
//!
//! This is the explicit read/write interface the app talks to instead
//! of global mutable fixtures. Every operation awaits the configured
//! latency to stand in for a network round trip; everything else is
//! ordinary shared-state access (`DashMap` for keyed collections,
//! `RwLock` for the rest).

use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

use crate::models::goal::{Achievement, Goal, GoalUpdate, NewGoal};
use crate::models::leaderboard::{LeaderboardEntry, LeaderboardMetric};
use crate::models::notification::Notification;
use crate::models::profile::{Profile, ProfileUpdate};
use crate::models::social::{FeedPost, Friend, FriendSuggestion, NewPost};
use crate::models::workout::{NewWorkout, Workout};
use crate::store::seed;
use crate::time_utils::format_utc_rfc3339;

/// In-memory store seeded from fixtures.
pub struct MemoryStore {
    latency: Duration,
    workouts: DashMap<u64, Workout>,
    next_workout_id: AtomicU64,
    profile: RwLock<Profile>,
    goals: DashMap<u64, Goal>,
    next_goal_id: AtomicU64,
    achievements: RwLock<Vec<Achievement>>,
    feed: RwLock<Vec<FeedPost>>,
    next_post_id: AtomicU64,
    friends: RwLock<Vec<Friend>>,
    suggestions: RwLock<Vec<FriendSuggestion>>,
    notifications: DashMap<u64, Notification>,
    // Read-only after seeding
    leaderboards: HashMap<LeaderboardMetric, Vec<LeaderboardEntry>>,
}

impl MemoryStore {
    /// Build a store seeded with the fixture data.
    pub fn seeded(latency: Duration) -> Self {
        let workouts: DashMap<u64, Workout> =
            seed::workouts().into_iter().map(|w| (w.id, w)).collect();
        let goals: DashMap<u64, Goal> = seed::goals().into_iter().map(|g| (g.id, g)).collect();
        let notifications: DashMap<u64, Notification> =
            seed::notifications().into_iter().map(|n| (n.id, n)).collect();
        let feed = seed::feed();

        let next_workout_id = AtomicU64::new(next_id(workouts.iter().map(|e| *e.key())));
        let next_goal_id = AtomicU64::new(next_id(goals.iter().map(|e| *e.key())));
        let next_post_id = AtomicU64::new(next_id(feed.iter().map(|p| p.id)));

        Self {
            latency,
            workouts,
            next_workout_id,
            profile: RwLock::new(seed::profile()),
            goals,
            next_goal_id,
            achievements: RwLock::new(seed::achievements()),
            feed: RwLock::new(feed),
            next_post_id,
            friends: RwLock::new(seed::friends()),
            suggestions: RwLock::new(seed::suggestions()),
            notifications,
            leaderboards: seed::leaderboards(),
        }
    }

    /// Simulated backend latency. Zero in tests.
    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    // ─── Workouts ────────────────────────────────────────────────

    /// All workouts, most recent first.
    pub async fn list_workouts(&self) -> Vec<Workout> {
        self.simulate_latency().await;
        let mut all: Vec<Workout> = self.workouts.iter().map(|e| e.value().clone()).collect();
        all.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        all
    }

    pub async fn get_workout(&self, id: u64) -> Option<Workout> {
        self.simulate_latency().await;
        self.workouts.get(&id).map(|e| e.value().clone())
    }

    /// Insert a validated workout, assigning the next id.
    pub async fn insert_workout(&self, new: NewWorkout) -> Workout {
        self.simulate_latency().await;
        let id = self.next_workout_id.fetch_add(1, Ordering::Relaxed);
        let workout = Workout {
            id,
            workout_type: new.workout_type,
            date: new.date,
            duration_min: new.duration_min,
            calories: new.calories,
            distance_km: new.distance_km,
            pace: new.pace,
            heart_rate: new.heart_rate,
            notes: new.notes,
            route: None,
            splits: None,
            exercises: None,
        };
        self.workouts.insert(id, workout.clone());
        workout
    }

    pub async fn delete_workout(&self, id: u64) -> bool {
        self.simulate_latency().await;
        self.workouts.remove(&id).is_some()
    }

    // ─── Profile ─────────────────────────────────────────────────

    pub async fn get_profile(&self) -> Profile {
        self.simulate_latency().await;
        self.profile.read().await.clone()
    }

    /// Merge-patch the profile and return the updated record.
    pub async fn update_profile(&self, patch: ProfileUpdate) -> Profile {
        self.simulate_latency().await;
        let mut profile = self.profile.write().await;
        profile.apply(patch);
        profile.clone()
    }

    // ─── Goals & Achievements ────────────────────────────────────

    /// All goals, by id.
    pub async fn list_goals(&self) -> Vec<Goal> {
        self.simulate_latency().await;
        let mut all: Vec<Goal> = self.goals.iter().map(|e| e.value().clone()).collect();
        all.sort_by_key(|g| g.id);
        all
    }

    pub async fn get_goal(&self, id: u64) -> Option<Goal> {
        self.simulate_latency().await;
        self.goals.get(&id).map(|e| e.value().clone())
    }

    pub async fn insert_goal(&self, new: NewGoal) -> Goal {
        self.simulate_latency().await;
        let id = self.next_goal_id.fetch_add(1, Ordering::Relaxed);
        let goal = Goal {
            id,
            goal_type: new.goal_type,
            name: new.goal_type.name().to_string(),
            target: new.target,
            current: 0.0,
            unit: new.goal_type.unit().to_string(),
            start_date: chrono::Utc::now().date_naive(),
            end_date: new.end_date,
            achieved: false,
        };
        self.goals.insert(id, goal.clone());
        goal
    }

    /// Patch a goal's progress; `achieved` is recomputed on every update.
    pub async fn update_goal(&self, id: u64, patch: GoalUpdate) -> Option<Goal> {
        self.simulate_latency().await;
        let mut entry = self.goals.get_mut(&id)?;
        let goal = entry.value_mut();
        if let Some(target) = patch.target {
            goal.target = target;
        }
        if let Some(current) = patch.current {
            goal.current = current;
        }
        if let Some(end_date) = patch.end_date {
            goal.end_date = end_date;
        }
        goal.refresh_achieved();
        Some(goal.clone())
    }

    pub async fn delete_goal(&self, id: u64) -> bool {
        self.simulate_latency().await;
        self.goals.remove(&id).is_some()
    }

    pub async fn list_achievements(&self) -> Vec<Achievement> {
        self.simulate_latency().await;
        self.achievements.read().await.clone()
    }

    // ─── Social ──────────────────────────────────────────────────

    /// The feed, most recent first.
    pub async fn list_feed(&self) -> Vec<FeedPost> {
        self.simulate_latency().await;
        let mut posts = self.feed.read().await.clone();
        posts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        posts
    }

    /// Append a post authored by the signed-in user.
    pub async fn insert_post(&self, new: NewPost) -> FeedPost {
        self.simulate_latency().await;
        let id = self.next_post_id.fetch_add(1, Ordering::Relaxed);
        let post = FeedPost {
            id,
            user: seed::current_user(),
            post_type: new.post_type,
            workout: new.workout,
            achievement: new.achievement,
            goal: new.goal,
            caption: new.caption,
            likes: 0,
            comments: 0,
            timestamp: format_utc_rfc3339(chrono::Utc::now()),
        };
        self.feed.write().await.push(post.clone());
        post
    }

    pub async fn list_friends(&self) -> Vec<Friend> {
        self.simulate_latency().await;
        self.friends.read().await.clone()
    }

    pub async fn list_suggestions(&self) -> Vec<FriendSuggestion> {
        self.simulate_latency().await;
        self.suggestions.read().await.clone()
    }

    // ─── Notifications ───────────────────────────────────────────

    /// All notifications, most recent first.
    pub async fn list_notifications(&self) -> Vec<Notification> {
        self.simulate_latency().await;
        let mut all: Vec<Notification> =
            self.notifications.iter().map(|e| e.value().clone()).collect();
        all.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        all
    }

    pub async fn mark_notification_read(&self, id: u64) -> bool {
        self.simulate_latency().await;
        match self.notifications.get_mut(&id) {
            Some(mut entry) => {
                entry.value_mut().read = true;
                true
            }
            None => false,
        }
    }

    /// Returns how many notifications were newly marked read.
    pub async fn mark_all_notifications_read(&self) -> usize {
        self.simulate_latency().await;
        let mut marked = 0;
        for mut entry in self.notifications.iter_mut() {
            let n = entry.value_mut();
            if !n.read {
                n.read = true;
                marked += 1;
            }
        }
        marked
    }

    // ─── Leaderboards ────────────────────────────────────────────

    pub async fn leaderboard(&self, metric: LeaderboardMetric) -> Vec<LeaderboardEntry> {
        self.simulate_latency().await;
        self.leaderboards.get(&metric).cloned().unwrap_or_default()
    }
}

fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::goal::GoalType;
    use crate::models::workout::WorkoutType;

    fn store() -> MemoryStore {
        MemoryStore::seeded(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_list_workouts_sorted_desc() {
        let store = store();
        let workouts = store.list_workouts().await;
        assert_eq!(workouts.len(), 8);
        for pair in workouts.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[tokio::test]
    async fn test_insert_workout_assigns_next_id() {
        let store = store();
        let new = NewWorkout {
            workout_type: WorkoutType::Running,
            date: "2025-03-18".parse().unwrap(),
            duration_min: 30,
            calories: 300,
            distance_km: Some(4.5),
            pace: Some("6:40".to_string()),
            heart_rate: Some(140),
            notes: None,
        };

        let created = store.insert_workout(new).await;
        assert_eq!(created.id, 9);
        assert!(store.get_workout(9).await.is_some());
    }

    #[tokio::test]
    async fn test_delete_workout() {
        let store = store();
        assert!(store.delete_workout(4).await);
        assert!(!store.delete_workout(4).await);
        assert!(store.get_workout(4).await.is_none());
    }

    #[tokio::test]
    async fn test_update_goal_recomputes_achieved() {
        let store = store();
        let updated = store
            .update_goal(
                1,
                GoalUpdate {
                    current: Some(5.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(updated.achieved);
    }

    #[tokio::test]
    async fn test_insert_goal_starts_unachieved() {
        let store = store();
        let goal = store
            .insert_goal(NewGoal {
                goal_type: GoalType::WeeklyDistance,
                target: 25.0,
                end_date: "2025-04-30".parse().unwrap(),
            })
            .await;

        assert_eq!(goal.id, 5);
        assert_eq!(goal.current, 0.0);
        assert!(!goal.achieved);
        assert_eq!(goal.unit, "km");
    }

    #[tokio::test]
    async fn test_insert_post_assigns_author_and_zero_counts() {
        let store = store();
        let post = store
            .insert_post(NewPost {
                post_type: crate::models::social::PostType::Workout,
                caption: "Quick lunchtime run".to_string(),
                workout: None,
                achievement: None,
                goal: None,
            })
            .await;

        assert_eq!(post.id, 4);
        assert_eq!(post.user.username, "alexj");
        assert_eq!(post.likes, 0);
        assert_eq!(post.comments, 0);
        assert_eq!(store.list_feed().await.len(), 4);
    }

    #[tokio::test]
    async fn test_mark_notifications_read() {
        let store = store();
        assert!(store.mark_notification_read(1).await);
        assert!(!store.mark_notification_read(999).await);

        // 1 was just read; 2 and 3 remain unread
        assert_eq!(store.mark_all_notifications_read().await, 2);
        assert!(store.list_notifications().await.iter().all(|n| n.read));
    }

    #[tokio::test]
    async fn test_profile_merge_patch() {
        let store = store();
        let updated = store
            .update_profile(ProfileUpdate {
                name: Some("Alexandra Johnson".to_string()),
                ..Default::default()
            })
            .await;

        assert_eq!(updated.name, "Alexandra Johnson");
        assert_eq!(updated.username, "alexj");
    }
}
