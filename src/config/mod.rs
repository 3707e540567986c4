//! Configuration management for tempo.
//!
//! Loads and saves configuration from `~/.tempo/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, WorkoutConfig};
