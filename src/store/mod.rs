use std::sync::Arc;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::account::{Account, AccountError, AccountId};

pub mod in_memory_store;

#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    #[error("User {0} not found")]
    NotFound(AccountId),
    #[error("User {0} already exists")]
    DuplicateAccount(AccountId),
    #[error(transparent)]
    AccountErr(#[from] AccountError),
}

/// Store handle shared between request handlers.
pub type SharedLedger = Arc<dyn LedgerStore>;

/// Every operation runs as one critical section: all checks happen before the
/// first mutation, and no caller can observe a half-applied change.
pub trait LedgerStore: Send + Sync {
    fn get(&self, id: AccountId) -> Result<Account, LedgerError>;

    fn credit(&self, id: AccountId, amount: Decimal) -> Result<Account, LedgerError>;

    fn transfer(
        &self,
        from_id: AccountId,
        to_id: AccountId,
        amount: Decimal,
    ) -> Result<(), LedgerError>;

    /// Snapshot of all accounts ordered by id, taken in a single critical section.
    fn accounts(&self) -> Vec<Account>;
}
