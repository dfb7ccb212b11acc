use std::{
    collections::{HashMap, hash_map::Entry},
    sync::{Mutex, MutexGuard, PoisonError},
};

use rust_decimal::Decimal;

use crate::account::{Account, AccountId};

use super::{LedgerError, LedgerStore};

/// Accounts every fresh process starts with.
pub fn seed_accounts() -> Vec<Account> {
    vec![
        Account::new(1, "Alice", Decimal::new(1000, 1)),
        Account::new(2, "Bob", Decimal::new(500, 1)),
    ]
}

/// Single coarse lock over the whole ledger. Unrelated account pairs are
/// serialized too.
#[derive(Debug)]
pub struct InMemoryLedgerStore {
    accounts: Mutex<HashMap<AccountId, Account>>,
}

impl InMemoryLedgerStore {
    pub fn new(accounts: impl IntoIterator<Item = Account>) -> Result<Self, LedgerError> {
        let mut map = HashMap::new();
        for acc in accounts {
            match map.entry(acc.id()) {
                Entry::Occupied(entry) => {
                    return Err(LedgerError::DuplicateAccount(*entry.key()));
                }
                Entry::Vacant(entry) => {
                    entry.insert(acc);
                }
            }
        }
        Ok(Self {
            accounts: Mutex::new(map),
        })
    }

    pub fn seeded() -> Self {
        Self {
            accounts: Mutex::new(
                seed_accounts()
                    .into_iter()
                    .map(|acc| (acc.id(), acc))
                    .collect(),
            ),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<AccountId, Account>> {
        // state only changes through `Account::apply`, which cannot panic,
        // so a poisoned map is still consistent
        self.accounts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LedgerStore for InMemoryLedgerStore {
    fn get(&self, id: AccountId) -> Result<Account, LedgerError> {
        self.lock()
            .get(&id)
            .cloned()
            .ok_or(LedgerError::NotFound(id))
    }

    fn credit(&self, id: AccountId, amount: Decimal) -> Result<Account, LedgerError> {
        let mut accounts = self.lock();
        let acc = accounts.get_mut(&id).ok_or(LedgerError::NotFound(id))?;
        let evt = acc.handle_credit(amount)?;
        acc.apply(&evt);
        tracing::debug!(id, kind = ?evt.kind(), amount = %evt.amount(), balance = %acc.balance(), "event applied");
        Ok(acc.clone())
    }

    fn transfer(
        &self,
        from_id: AccountId,
        to_id: AccountId,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        let mut accounts = self.lock();
        let from = accounts
            .get(&from_id)
            .ok_or(LedgerError::NotFound(from_id))?;
        let to = accounts.get(&to_id).ok_or(LedgerError::NotFound(to_id))?;

        let debit_evt = from.handle_debit(amount)?;
        if from_id == to_id {
            // funds are checked, but moving money onto itself changes nothing
            return Ok(());
        }
        let credit_evt = to.handle_credit(amount)?;

        // both sides validated, nothing below can fail
        for (id, evt) in [(from_id, &debit_evt), (to_id, &credit_evt)] {
            if let Some(acc) = accounts.get_mut(&id) {
                acc.apply(evt);
                tracing::debug!(id, kind = ?evt.kind(), amount = %evt.amount(), balance = %acc.balance(), "event applied");
            }
        }
        Ok(())
    }

    fn accounts(&self) -> Vec<Account> {
        let mut list: Vec<Account> = self.lock().values().cloned().collect();
        list.sort_by_key(Account::id);
        list
    }
}
