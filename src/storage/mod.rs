//! Storage layer for teller-cli
//!
//! Provides delimited-text file storage with atomic rewrites and a lenient,
//! policy-driven decoder for corrupt lines.

pub mod clients;
pub mod codec;
pub mod file_io;

pub use clients::{find_by_account, mark_deleted, replace_record, ClientStore};
pub use codec::{decode_record, encode_record, CorruptLinePolicy};
