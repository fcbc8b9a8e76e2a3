//! Ledger operations
//!
//! Deposit and withdrawal logic with the balance rules enforced at the
//! operation boundary: amounts must be finite and positive, and a withdrawal
//! may never exceed the current balance. The check step computes a candidate
//! balance without committing anything; the UI places its confirmation gate
//! between check and commit, and declining leaves state fully unchanged.

use crate::error::{TellerError, TellerResult};
use crate::models::ClientRecord;
use crate::storage::{find_by_account, ClientStore};

/// Service for balance-mutating operations
pub struct LedgerService<'a> {
    store: &'a ClientStore,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(store: &'a ClientStore) -> Self {
        Self { store }
    }

    /// Validate a deposit and return the candidate new balance
    pub fn check_deposit(&self, client: &ClientRecord, amount: f64) -> TellerResult<f64> {
        check_amount(amount)?;
        Ok(client.balance + amount)
    }

    /// Validate a withdrawal and return the candidate new balance
    ///
    /// Fails with `InsufficientFunds` when the amount exceeds the balance;
    /// the operation never proceeds with a partial or clamped amount.
    pub fn check_withdrawal(&self, client: &ClientRecord, amount: f64) -> TellerResult<f64> {
        check_amount(amount)?;

        if amount > client.balance {
            return Err(TellerError::InsufficientFunds {
                account: client.account_number.clone(),
                needed: amount,
                available: client.balance,
            });
        }

        Ok(client.balance - amount)
    }

    /// Deposit into an account and persist the full collection
    pub fn deposit(
        &self,
        clients: Vec<ClientRecord>,
        account_number: &str,
        amount: f64,
    ) -> TellerResult<(Vec<ClientRecord>, f64)> {
        let client = find_by_account(&clients, account_number)
            .ok_or_else(|| TellerError::client_not_found(account_number))?;

        let new_balance = self.check_deposit(client, amount)?;
        let clients = self.commit_balance(clients, account_number, new_balance)?;
        Ok((clients, new_balance))
    }

    /// Withdraw from an account and persist the full collection
    pub fn withdraw(
        &self,
        clients: Vec<ClientRecord>,
        account_number: &str,
        amount: f64,
    ) -> TellerResult<(Vec<ClientRecord>, f64)> {
        let client = find_by_account(&clients, account_number)
            .ok_or_else(|| TellerError::client_not_found(account_number))?;

        let new_balance = self.check_withdrawal(client, amount)?;
        let clients = self.commit_balance(clients, account_number, new_balance)?;
        Ok((clients, new_balance))
    }

    /// Merge a new balance into the record matching the account number and
    /// rewrite storage
    fn commit_balance(
        &self,
        clients: Vec<ClientRecord>,
        account_number: &str,
        new_balance: f64,
    ) -> TellerResult<Vec<ClientRecord>> {
        let clients: Vec<ClientRecord> = clients
            .into_iter()
            .map(|client| {
                if client.account_number == account_number {
                    client.with_balance(new_balance)
                } else {
                    client
                }
            })
            .collect();

        self.store.rewrite_all(&clients)?;
        Ok(clients)
    }
}

/// Sum of balances across all non-deleted records
pub fn total_balance(clients: &[ClientRecord]) -> f64 {
    clients
        .iter()
        .filter(|client| !client.pending_delete)
        .map(|client| client.balance)
        .sum()
}

fn check_amount(amount: f64) -> TellerResult<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(TellerError::Validation(
            "Amount must be a positive number".into(),
        ));
    }
    Ok(())
}
