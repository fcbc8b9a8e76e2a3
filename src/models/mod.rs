//! Core data models for teller-cli
//!
//! This module contains the data structures that represent the client-record
//! domain: the client record itself and the field set used for updates.

pub mod client;

pub use client::{ClientRecord, ClientUpdate};
