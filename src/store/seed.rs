// SPDX-License-Identifier: MIT

//! Fixture data standing in for a not-yet-built durable backend.
//!
//! The shapes here mirror what real backend responses will look like,
//! so the route surface does not change when one arrives.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::models::goal::{Achievement, Goal, GoalType};
use crate::models::leaderboard::{LeaderboardEntry, LeaderboardMetric};
use crate::models::notification::{Notification, NotificationKind};
use crate::models::profile::{Preferences, Profile, ProfileStats, Units};
use crate::models::social::{
    FeedAuthor, FeedPost, Friend, FriendSuggestion, PostAchievement, PostGoal, PostType,
    PostWorkout, WorkoutRef,
};
use crate::models::workout::{Exercise, Split, Workout, WorkoutType};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

fn split(km: f64, time: &str, heart_rate: u32) -> Split {
    Split {
        km,
        time: time.to_string(),
        heart_rate,
    }
}

fn exercise(name: &str, sets: u32, reps: u32, weight_lbs: u32) -> Exercise {
    Exercise {
        name: name.to_string(),
        sets,
        reps,
        weight_lbs,
    }
}

/// The seeded workout history, most recent first.
pub fn workouts() -> Vec<Workout> {
    vec![
        Workout {
            id: 1,
            workout_type: WorkoutType::Running,
            date: date(2025, 3, 17),
            duration_min: 35,
            calories: 420,
            distance_km: Some(5.2),
            pace: Some("6:44".to_string()),
            heart_rate: Some(142),
            notes: Some("Felt good today. Increased pace in the last mile.".to_string()),
            route: Some("Central Park Loop".to_string()),
            splits: Some(vec![
                split(1.0, "6:50", 135),
                split(2.0, "6:45", 140),
                split(3.0, "6:40", 145),
                split(4.0, "6:35", 148),
                split(5.0, "6:30", 152),
                split(5.2, "1:20", 155),
            ]),
            exercises: None,
        },
        Workout {
            id: 2,
            workout_type: WorkoutType::WeightTraining,
            date: date(2025, 3, 16),
            duration_min: 45,
            calories: 350,
            distance_km: None,
            pace: None,
            heart_rate: Some(128),
            notes: Some("Focused on upper body. Increased weight on bench press.".to_string()),
            route: None,
            splits: None,
            exercises: Some(vec![
                exercise("Bench Press", 3, 10, 185),
                exercise("Pull-ups", 3, 8, 0),
                exercise("Shoulder Press", 3, 12, 95),
                exercise("Bicep Curls", 3, 15, 35),
                exercise("Tricep Extensions", 3, 15, 30),
            ]),
        },
        Workout {
            id: 3,
            workout_type: WorkoutType::Cycling,
            date: date(2025, 3, 15),
            duration_min: 60,
            calories: 550,
            distance_km: Some(15.0),
            pace: Some("4:00".to_string()),
            heart_rate: Some(155),
            notes: Some("Long ride with some hill climbs. Weather was perfect.".to_string()),
            route: Some("Riverside Drive".to_string()),
            splits: Some(vec![
                split(3.0, "12:00", 140),
                split(6.0, "12:30", 150),
                split(9.0, "12:15", 160),
                split(12.0, "12:45", 155),
                split(15.0, "12:30", 165),
            ]),
            exercises: None,
        },
        Workout {
            id: 4,
            workout_type: WorkoutType::Yoga,
            date: date(2025, 3, 14),
            duration_min: 30,
            calories: 200,
            distance_km: None,
            pace: None,
            heart_rate: Some(95),
            notes: Some("Focused on flexibility and breathing. Felt very relaxed after.".to_string()),
            route: None,
            splits: None,
            exercises: None,
        },
        Workout {
            id: 5,
            workout_type: WorkoutType::Running,
            date: date(2025, 3, 12),
            duration_min: 40,
            calories: 480,
            distance_km: Some(6.0),
            pace: Some("6:40".to_string()),
            heart_rate: Some(148),
            notes: None,
            route: None,
            splits: None,
            exercises: None,
        },
        Workout {
            id: 6,
            workout_type: WorkoutType::Swimming,
            date: date(2025, 3, 10),
            duration_min: 45,
            calories: 400,
            distance_km: Some(1.5),
            pace: Some("29:45".to_string()),
            heart_rate: Some(130),
            notes: None,
            route: None,
            splits: None,
            exercises: None,
        },
        Workout {
            id: 7,
            workout_type: WorkoutType::Hiit,
            date: date(2025, 3, 9),
            duration_min: 25,
            calories: 320,
            distance_km: None,
            pace: None,
            heart_rate: Some(150),
            notes: None,
            route: None,
            splits: None,
            exercises: None,
        },
        Workout {
            id: 8,
            workout_type: WorkoutType::WeightTraining,
            date: date(2025, 3, 7),
            duration_min: 50,
            calories: 380,
            distance_km: None,
            pace: None,
            heart_rate: Some(132),
            notes: None,
            route: None,
            splits: None,
            exercises: None,
        },
    ]
}

/// The seeded user profile.
pub fn profile() -> Profile {
    Profile {
        name: "Alex Johnson".to_string(),
        email: "alex.johnson@example.com".to_string(),
        username: "alexj".to_string(),
        join_date: date(2024, 12, 1),
        height_cm: 180,
        weight_kg: 75.0,
        date_of_birth: date(1990, 5, 15),
        profile_picture: Some("https://randomuser.me/api/portraits/men/32.jpg".to_string()),
        preferences: Preferences {
            dark_mode: false,
            notifications: true,
            email_updates: false,
            units: Units::Metric,
        },
        stats: ProfileStats {
            total_workouts: 87,
            total_distance_km: 423.0,
            total_calories: 32_450,
            weekly_workouts: 4,
            weekly_calories: 2290,
            streak_days: 7,
        },
    }
}

fn goal(id: u64, goal_type: GoalType, target: f64, current: f64, start: NaiveDate, end: NaiveDate) -> Goal {
    let mut goal = Goal {
        id,
        goal_type,
        name: goal_type.name().to_string(),
        target,
        current,
        unit: goal_type.unit().to_string(),
        start_date: start,
        end_date: end,
        achieved: false,
    };
    goal.refresh_achieved();
    goal
}

/// The seeded goals.
pub fn goals() -> Vec<Goal> {
    vec![
        goal(1, GoalType::WeeklyWorkouts, 5.0, 3.0, date(2025, 3, 1), date(2025, 3, 31)),
        goal(2, GoalType::WeeklyDistance, 20.0, 15.5, date(2025, 3, 1), date(2025, 3, 31)),
        goal(3, GoalType::WeeklyCalories, 2500.0, 1850.0, date(2025, 3, 1), date(2025, 3, 31)),
        goal(4, GoalType::TargetWeight, 70.0, 75.0, date(2025, 1, 1), date(2025, 6, 30)),
    ]
}

/// The seeded achievements.
pub fn achievements() -> Vec<Achievement> {
    vec![
        Achievement {
            id: 1,
            name: "5K Completed".to_string(),
            description: "Completed a 5K run".to_string(),
            date: date(2025, 2, 15),
        },
        Achievement {
            id: 2,
            name: "10 Workouts".to_string(),
            description: "Completed 10 workouts".to_string(),
            date: date(2025, 2, 28),
        },
        Achievement {
            id: 3,
            name: "1000 Calories".to_string(),
            description: "Burned 1000 calories in a week".to_string(),
            date: date(2025, 3, 5),
        },
    ]
}

fn author(id: u64, name: &str, username: &str, avatar: &str) -> FeedAuthor {
    FeedAuthor {
        id,
        name: name.to_string(),
        username: username.to_string(),
        avatar: Some(format!("https://randomuser.me/api/portraits/{avatar}.jpg")),
    }
}

/// The signed-in user as a feed author.
pub fn current_user() -> FeedAuthor {
    author(1, "Alex Johnson", "alexj", "men/32")
}

fn sarah() -> FeedAuthor {
    author(2, "Sarah Johnson", "sarahj", "women/44")
}

fn mike() -> FeedAuthor {
    author(3, "Mike Chen", "mikec", "men/22")
}

fn emily() -> FeedAuthor {
    author(4, "Emily Rodriguez", "emilyr", "women/67")
}

fn david() -> FeedAuthor {
    author(5, "David Kim", "davidk", "men/45")
}

/// The seeded social feed, most recent first.
pub fn feed() -> Vec<FeedPost> {
    vec![
        FeedPost {
            id: 1,
            user: sarah(),
            post_type: PostType::Workout,
            workout: Some(PostWorkout {
                workout_type: WorkoutType::Running,
                distance_km: Some(8.5),
                duration_min: 45,
                date: "2025-03-17T09:30:00Z".to_string(),
            }),
            achievement: None,
            goal: None,
            caption: "Morning run along the river! Beautiful day. 🏃‍♀️".to_string(),
            likes: 12,
            comments: 3,
            timestamp: "2025-03-17T09:45:00Z".to_string(),
        },
        FeedPost {
            id: 2,
            user: mike(),
            post_type: PostType::Achievement,
            workout: None,
            achievement: Some(PostAchievement {
                name: "10K Completed".to_string(),
                description: "Completed a 10K run".to_string(),
            }),
            goal: None,
            caption: "Finally hit that 10K milestone! Feeling accomplished. 💪".to_string(),
            likes: 24,
            comments: 5,
            timestamp: "2025-03-16T16:20:00Z".to_string(),
        },
        FeedPost {
            id: 3,
            user: emily(),
            post_type: PostType::Goal,
            workout: None,
            achievement: None,
            goal: Some(PostGoal {
                name: "Weekly Workouts".to_string(),
                target: 5.0,
                achieved: Some(true),
            }),
            caption: "Hit my weekly workout goal! Consistency is key. 🔑".to_string(),
            likes: 18,
            comments: 2,
            timestamp: "2025-03-15T19:10:00Z".to_string(),
        },
    ]
}

/// The seeded friend list.
pub fn friends() -> Vec<Friend> {
    let last = |a: FeedAuthor, ts: &str| Friend {
        id: a.id,
        name: a.name,
        username: a.username,
        avatar: a.avatar,
        last_workout: ts.to_string(),
    };
    vec![
        last(sarah(), "2025-03-17T09:30:00Z"),
        last(mike(), "2025-03-16T16:20:00Z"),
        last(emily(), "2025-03-15T19:10:00Z"),
        last(david(), "2025-03-14T07:45:00Z"),
        last(author(6, "Lisa Patel", "lisap", "women/33"), "2025-03-13T18:30:00Z"),
    ]
}

/// The seeded friend suggestions.
pub fn suggestions() -> Vec<FriendSuggestion> {
    let suggest = |a: FeedAuthor, mutual: u32| FriendSuggestion {
        id: a.id,
        name: a.name,
        username: a.username,
        avatar: a.avatar,
        mutual_friends: mutual,
    };
    vec![
        suggest(author(7, "James Wilson", "jamesw", "men/52"), 3),
        suggest(author(8, "Sophia Lee", "sophial", "women/90"), 2),
        suggest(author(9, "Robert Garcia", "robertg", "men/36"), 1),
    ]
}

/// The seeded notifications.
pub fn notifications() -> Vec<Notification> {
    let blank = |id: u64, kind: NotificationKind, content: &str, ts: &str, read: bool| Notification {
        id,
        kind,
        user: None,
        content: content.to_string(),
        workout: None,
        comment: None,
        achievement: None,
        goal: None,
        timestamp: ts.to_string(),
        read,
    };
    let run_ref = WorkoutRef {
        id: 1,
        workout_type: WorkoutType::Running,
        date: date(2025, 3, 17),
    };

    vec![
        Notification {
            user: Some(sarah()),
            workout: Some(run_ref.clone()),
            ..blank(1, NotificationKind::Like, "liked your workout", "2025-03-17T10:30:00Z", false)
        },
        Notification {
            user: Some(mike()),
            workout: Some(run_ref),
            comment: Some("Great pace! How did you feel during the run?".to_string()),
            ..blank(2, NotificationKind::Comment, "commented on your workout", "2025-03-17T11:15:00Z", false)
        },
        Notification {
            achievement: Some(PostAchievement {
                name: "5K Completed".to_string(),
                description: "Completed a 5K run".to_string(),
            }),
            ..blank(3, NotificationKind::Achievement, "You earned a new achievement", "2025-03-17T09:45:00Z", false)
        },
        Notification {
            user: Some(emily()),
            ..blank(4, NotificationKind::Follow, "started following you", "2025-03-16T14:20:00Z", true)
        },
        Notification {
            goal: Some(PostGoal {
                name: "Weekly Workouts".to_string(),
                target: 5.0,
                achieved: None,
            }),
            ..blank(5, NotificationKind::Goal, "You reached your weekly workout goal", "2025-03-15T23:00:00Z", true)
        },
        Notification {
            user: Some(david()),
            workout: Some(WorkoutRef {
                id: 2,
                workout_type: WorkoutType::WeightTraining,
                date: date(2025, 3, 16),
            }),
            ..blank(6, NotificationKind::Like, "liked your workout", "2025-03-16T18:45:00Z", true)
        },
    ]
}

/// The seeded leaderboards, keyed by metric.
pub fn leaderboards() -> HashMap<LeaderboardMetric, Vec<LeaderboardEntry>> {
    let entry = |user: FeedAuthor, value: f64, rank: u32| LeaderboardEntry {
        is_current_user: user.id == 1,
        user,
        value,
        rank,
    };

    HashMap::from([
        (
            LeaderboardMetric::WeeklyWorkouts,
            vec![
                entry(mike(), 8.0, 1),
                entry(current_user(), 6.0, 2),
                entry(sarah(), 5.0, 3),
                entry(emily(), 4.0, 4),
                entry(david(), 3.0, 5),
            ],
        ),
        (
            LeaderboardMetric::WeeklyDistance,
            vec![
                entry(sarah(), 42.5, 1),
                entry(mike(), 35.2, 2),
                entry(current_user(), 28.7, 3),
                entry(david(), 22.3, 4),
                entry(emily(), 18.5, 5),
            ],
        ),
        (
            LeaderboardMetric::WeeklyCalories,
            vec![
                entry(mike(), 3250.0, 1),
                entry(sarah(), 2980.0, 2),
                entry(david(), 2750.0, 3),
                entry(current_user(), 2290.0, 4),
                entry(emily(), 1950.0, 5),
            ],
        ),
        (
            LeaderboardMetric::Streak,
            vec![
                entry(sarah(), 15.0, 1),
                entry(current_user(), 7.0, 2),
                entry(mike(), 5.0, 3),
                entry(emily(), 3.0, 4),
                entry(david(), 2.0, 5),
            ],
        ),
    ])
}
