//! Configuration module for homefin
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::HomefinPaths;
pub use settings::{OutputFormat, Settings};
