//! tempo - interval workouts from the terminal
//!
//! This crate provides a tick-driven workout session engine, a routine
//! catalog and workout log in `SQLite`, water and meal logs, nutrition and
//! weekly goal calculators, and a command-line interface with an interactive
//! timer.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod logging;
pub mod output;
pub mod storage;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::{SessionError, TempoError};
pub use features::workout::{SessionExercise, SessionState, WorkoutSessionEngine};
