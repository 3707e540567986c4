//! Feature implementations for tempo.
//!
//! - Workout sessions, the workout log and weekly reports
//! - The routine catalog
//! - Nutrition and workout goal arithmetic
//! - Water and meal logs

pub mod goals;
pub mod intake;
pub mod routines;
pub mod workout;
