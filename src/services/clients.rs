//! Client service
//!
//! Business logic for client record management: validation, duplicate
//! checks, and the create/update/delete flows over the store. Operations
//! take a record snapshot and return the snapshot that results, so callers
//! always hold a view consistent with what was persisted.

use crate::error::{TellerError, TellerResult};
use crate::models::{ClientRecord, ClientUpdate};
use crate::storage::{find_by_account, replace_record, ClientStore};

/// Service for client record management
pub struct ClientService<'a> {
    store: &'a ClientStore,
}

impl<'a> ClientService<'a> {
    /// Create a new client service
    pub fn new(store: &'a ClientStore) -> Self {
        Self { store }
    }

    /// Add a brand-new client record
    ///
    /// Validates the record, rejects duplicate account numbers, and appends
    /// a single line to storage without rewriting the rest.
    pub fn add(
        &self,
        clients: Vec<ClientRecord>,
        client: ClientRecord,
    ) -> TellerResult<Vec<ClientRecord>> {
        client
            .validate()
            .map_err(|e| TellerError::Validation(e.to_string()))?;

        if find_by_account(&clients, &client.account_number).is_some() {
            return Err(TellerError::client_exists(&client.account_number));
        }

        self.store.append(&client)?;

        let mut clients = clients;
        clients.push(client);
        Ok(clients)
    }

    /// Replace the mutable fields of an existing record and persist
    ///
    /// The account number is preserved. Returns `NotFound` when no record
    /// matches; nothing is written in that case.
    pub fn update(
        &self,
        clients: Vec<ClientRecord>,
        account_number: &str,
        update: ClientUpdate,
    ) -> TellerResult<Vec<ClientRecord>> {
        let current = find_by_account(&clients, account_number)
            .ok_or_else(|| TellerError::client_not_found(account_number))?;

        let candidate = current.apply_update(update.clone());
        candidate
            .validate()
            .map_err(|e| TellerError::Validation(e.to_string()))?;

        let (clients, _) = replace_record(clients, account_number, update);
        self.store.rewrite_all(&clients)?;
        Ok(clients)
    }

    /// Delete a record and return the reloaded snapshot
    ///
    /// Marks, rewrites storage without the record, then reloads so no
    /// phantom deleted record survives in memory for later operations.
    pub fn delete(
        &self,
        clients: Vec<ClientRecord>,
        account_number: &str,
    ) -> TellerResult<Vec<ClientRecord>> {
        self.store
            .delete_and_reload(clients, account_number)?
            .ok_or_else(|| TellerError::client_not_found(account_number))
    }

    /// Look up a record by account number
    ///
    /// Not-found is a normal result, not an error; callers branch on it and
    /// report it distinctly from success.
    pub fn find<'b>(
        &self,
        clients: &'b [ClientRecord],
        account_number: &str,
    ) -> Option<&'b ClientRecord> {
        find_by_account(clients, account_number)
    }
}
