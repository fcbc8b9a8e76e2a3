//! teller-cli - Terminal-based client record and balance ledger manager
//!
//! This library provides the core functionality for the teller application:
//! a menu-driven console manager for bank client records persisted to a
//! delimited flat text file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution for the data directory
//! - `error`: Custom error types
//! - `models`: The client record data model
//! - `storage`: Line codec and flat-file store with atomic rewrites
//! - `services`: Business logic (client CRUD and ledger operations)
//! - `display`: Terminal formatting for cards and tables
//! - `menu`: The interactive menu loop and prompts

pub mod config;
pub mod display;
pub mod error;
pub mod menu;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{TellerError, TellerResult};
