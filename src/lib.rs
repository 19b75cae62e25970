// SPDX-License-Identifier: MIT

//! FitTrack API: backend for a fitness-tracking app.
//!
//! This crate serves workouts, goals, social, and dashboard data from
//! an in-memory store seeded with fixtures, and hosts the workout
//! comparison engine.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod time_utils;

use config::Config;
use store::MemoryStore;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: MemoryStore,
}
