// SPDX-License-Identifier: MIT

//! Business logic services.

pub mod comparison;
pub mod stats;

pub use comparison::{compare, CompareError, Comparison};
pub use stats::DashboardSummary;
