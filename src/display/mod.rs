//! Display formatting for terminal output
//!
//! Provides utilities for formatting client records for terminal display:
//! the single-record card, the fixed-width list table, and the balances
//! table with its total row.

pub mod client;

pub use client::{format_balances, format_client_card, format_client_list};
