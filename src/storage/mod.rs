//! Storage layer for tempo.
//!
//! SQLite-backed persistence for the routine catalog and the workout log.

mod database;
mod migrations;

pub use database::Database;
