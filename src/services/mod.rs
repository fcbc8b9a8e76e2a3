//! Service layer for teller-cli
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, duplicate checks, and balance rules.

pub mod clients;
pub mod ledger;

pub use clients::ClientService;
pub use ledger::LedgerService;
