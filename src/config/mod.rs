//! Configuration module for teller-cli
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Storage file location

pub mod paths;

pub use paths::TellerPaths;
