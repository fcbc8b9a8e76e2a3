//! Client store for the delimited-text clients file
//!
//! Owns the storage path and the corrupt-line policy; all operations work on
//! explicit record snapshots rather than ambient shared state. Collection
//! order is file order and is preserved through every operation.

use std::path::PathBuf;

use log::warn;

use crate::error::TellerError;
use crate::models::{ClientRecord, ClientUpdate};

use super::codec::{decode_record, encode_record, CorruptLinePolicy};
use super::file_io::{append_line, read_lines, write_lines_atomic};

/// Store for client record persistence
pub struct ClientStore {
    path: PathBuf,
    policy: CorruptLinePolicy,
}

impl ClientStore {
    /// Create a store over the given clients file
    pub fn new(path: PathBuf, policy: CorruptLinePolicy) -> Self {
        Self { path, policy }
    }

    /// Get the storage path
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load all records from storage
    ///
    /// A missing file yields an empty collection. Blank lines are skipped.
    /// Lines that fail to decode are dropped per the corrupt-line policy;
    /// they never abort the load.
    pub fn load(&self) -> Result<Vec<ClientRecord>, TellerError> {
        let mut clients = Vec::new();

        for (number, line) in read_lines(&self.path)?.iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            match decode_record(line) {
                Some(client) => clients.push(client),
                None => {
                    if self.policy == CorruptLinePolicy::Warn {
                        warn!(
                            "{}:{}: skipping corrupt record line",
                            self.path.display(),
                            number + 1
                        );
                    }
                }
            }
        }

        Ok(clients)
    }

    /// Append a single brand-new record to storage
    ///
    /// Callers must first check the account number is unused via
    /// [`find_by_account`]; append never scans existing contents.
    pub fn append(&self, client: &ClientRecord) -> Result<(), TellerError> {
        append_line(&self.path, &encode_record(client))
    }

    /// Rewrite storage to hold exactly the non-deleted records, in order
    pub fn rewrite_all(&self, clients: &[ClientRecord]) -> Result<(), TellerError> {
        let lines: Vec<String> = clients
            .iter()
            .filter(|client| !client.pending_delete)
            .map(encode_record)
            .collect();

        write_lines_atomic(&self.path, &lines)
    }

    /// Delete a record: mark, rewrite storage without it, then reload
    ///
    /// The reload is part of the contract — after a completed delete the
    /// in-memory view matches the persisted view exactly, and no record with
    /// `pending_delete` set survives into the returned snapshot. Returns
    /// `None` when the account was not found (nothing written).
    pub fn delete_and_reload(
        &self,
        clients: Vec<ClientRecord>,
        account_number: &str,
    ) -> Result<Option<Vec<ClientRecord>>, TellerError> {
        let (marked, found) = mark_deleted(clients, account_number);
        if !found {
            return Ok(None);
        }

        self.rewrite_all(&marked)?;
        self.load().map(Some)
    }
}

/// Find a record by account number: linear scan, first match wins
///
/// Accounts are expected to be unique; if duplicates exist due to corruption,
/// the earliest wins. Matching is case-sensitive and exact.
pub fn find_by_account<'a>(
    clients: &'a [ClientRecord],
    account_number: &str,
) -> Option<&'a ClientRecord> {
    clients
        .iter()
        .find(|client| client.account_number == account_number)
}

/// Set the delete marker on the first matching record
///
/// Returns the new snapshot and whether a match was found.
pub fn mark_deleted(
    mut clients: Vec<ClientRecord>,
    account_number: &str,
) -> (Vec<ClientRecord>, bool) {
    match clients
        .iter_mut()
        .find(|client| client.account_number == account_number)
    {
        Some(client) => {
            client.pending_delete = true;
            (clients, true)
        }
        None => (clients, false),
    }
}

/// Replace the mutable fields of the first matching record
///
/// The account number itself is preserved. Returns the new snapshot and
/// whether a match was found.
pub fn replace_record(
    mut clients: Vec<ClientRecord>,
    account_number: &str,
    update: ClientUpdate,
) -> (Vec<ClientRecord>, bool) {
    match clients
        .iter_mut()
        .find(|client| client.account_number == account_number)
    {
        Some(client) => {
            *client = client.apply_update(update);
            (clients, true)
        }
        None => (clients, false),
    }
}
