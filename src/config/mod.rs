//! Configuration module for the expense tracker
//!
//! This module provides configuration management including:
//! - Store, settings and audit log path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;
