//! User profile model for storage and API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Measurement unit system preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Metric,
    Imperial,
}

/// Display and notification preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    pub dark_mode: bool,
    pub notifications: bool,
    pub email_updates: bool,
    pub units: Units,
}

/// Lifetime and rolling-week aggregates shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileStats {
    pub total_workouts: u32,
    pub total_distance_km: f64,
    pub total_calories: u32,
    pub weekly_workouts: u32,
    pub weekly_calories: u32,
    pub streak_days: u32,
}

/// The single user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub username: String,
    pub join_date: NaiveDate,
    pub height_cm: u32,
    pub weight_kg: f64,
    pub date_of_birth: NaiveDate,
    pub profile_picture: Option<String>,
    pub preferences: Preferences,
    pub stats: ProfileStats,
}

/// Merge patch for profile updates: present fields replace, absent
/// fields keep their current values. Stats are derived and cannot be
/// patched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub height_cm: Option<u32>,
    pub weight_kg: Option<f64>,
    pub date_of_birth: Option<NaiveDate>,
    pub profile_picture: Option<String>,
    pub preferences: Option<Preferences>,
}

impl Profile {
    /// Apply a merge patch in place.
    pub fn apply(&mut self, patch: ProfileUpdate) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(height) = patch.height_cm {
            self.height_cm = height;
        }
        if let Some(weight) = patch.weight_kg {
            self.weight_kg = weight;
        }
        if let Some(dob) = patch.date_of_birth {
            self.date_of_birth = dob;
        }
        if let Some(picture) = patch.profile_picture {
            self.profile_picture = Some(picture);
        }
        if let Some(preferences) = patch.preferences {
            self.preferences = preferences;
        }
    }
}
