//! Configuration loading and management for the worktime engine.
//!
//! This module provides the [`CorrectionPolicy`] that controls how missing
//! day boundaries are filled in, and [`ConfigLoader`] to read it from YAML.
//!
//! # Example
//!
//! ```no_run
//! use worktime_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/policy.yaml").unwrap();
//! println!("Day ends at {}", loader.policy().day_end);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::CorrectionPolicy;
