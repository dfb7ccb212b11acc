use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

pub type AccountId = i64;

#[derive(Debug, PartialEq, Eq)]
pub enum AccountEventKind {
    Credited,
    Debited,
}

/// Balance change computed against the current account state.
/// Carries the resulting balance, so applying it is a plain store.
#[derive(Debug)]
pub struct AccountEvent {
    amount: Decimal,
    balance: Decimal,
    kind: AccountEventKind,
}

impl AccountEvent {
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn kind(&self) -> &AccountEventKind {
        &self.kind
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum AccountError {
    #[error("Insufficient funds: available {available}, requested {requested}")]
    InsufficientFunds {
        available: Decimal,
        requested: Decimal,
    },
    #[error("Balance would leave the representable range")]
    BalanceOverflow,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    id: AccountId,
    name: String,
    #[serde(with = "rust_decimal::serde::float")]
    balance: Decimal,
}

impl Account {
    pub fn new(id: AccountId, name: impl Into<String>, balance: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            balance,
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn apply(&mut self, event: &AccountEvent) {
        self.balance = event.balance;
    }

    /// Any delta is accepted, negative ones included, so a credit may leave
    /// the balance below zero.
    pub fn handle_credit(&self, amount: Decimal) -> Result<AccountEvent, AccountError> {
        let balance = self
            .balance
            .checked_add(amount)
            .ok_or(AccountError::BalanceOverflow)?;
        Ok(AccountEvent {
            amount,
            balance,
            kind: AccountEventKind::Credited,
        })
    }

    pub fn handle_debit(&self, amount: Decimal) -> Result<AccountEvent, AccountError> {
        if self.balance < amount {
            return Err(AccountError::InsufficientFunds {
                available: self.balance,
                requested: amount,
            });
        }
        let balance = self
            .balance
            .checked_sub(amount)
            .ok_or(AccountError::BalanceOverflow)?;
        Ok(AccountEvent {
            amount,
            balance,
            kind: AccountEventKind::Debited,
        })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::prelude::{FromPrimitive, Zero};

    use super::*;

    fn alice(balance: u32) -> Account {
        Account::new(1, "Alice", Decimal::from_u32(balance).unwrap())
    }

    #[test]
    fn apply_events() {
        let mut acc = alice(100);
        let evt = acc.handle_credit(Decimal::from_u32(20).unwrap()).unwrap();
        // nothing changes until the event is applied
        assert_eq!(acc.balance(), Decimal::from_u32(100).unwrap());
        acc.apply(&evt);
        assert_eq!(acc.balance(), Decimal::from_u32(120).unwrap());

        let evt = acc.handle_debit(Decimal::from_u32(120).unwrap()).unwrap();
        acc.apply(&evt);
        assert_eq!(acc.balance(), Decimal::zero());
    }

    #[test]
    fn handle_credit() {
        let acc = alice(50);
        let evt = acc.handle_credit(Decimal::from_u32(20).unwrap()).unwrap();
        assert_eq!(evt.amount(), Decimal::from_u32(20).unwrap());
        assert_eq!(evt.kind(), &AccountEventKind::Credited);

        // negative delta is a plain balance adjustment and may go below zero
        let mut acc = alice(10);
        let evt = acc.handle_credit(Decimal::from_i32(-25).unwrap()).unwrap();
        acc.apply(&evt);
        assert_eq!(acc.balance(), Decimal::from_i32(-15).unwrap());

        let acc = Account::new(1, "Alice", Decimal::MAX);
        let err = acc.handle_credit(Decimal::ONE).unwrap_err();
        assert_eq!(err, AccountError::BalanceOverflow);
    }

    #[test]
    fn handle_debit() {
        let acc = alice(70);

        let err = acc
            .handle_debit(Decimal::from_u32(1000).unwrap())
            .unwrap_err();
        assert_eq!(
            err,
            AccountError::InsufficientFunds {
                available: Decimal::from_u32(70).unwrap(),
                requested: Decimal::from_u32(1000).unwrap(),
            }
        );
        assert_eq!(
            err.to_string(),
            "Insufficient funds: available 70, requested 1000"
        );

        // whole balance can be moved out
        let evt = acc.handle_debit(Decimal::from_u32(70).unwrap()).unwrap();
        assert_eq!(evt.kind(), &AccountEventKind::Debited);

        // non-positive amounts pass the funds check
        let mut acc = alice(0);
        let evt = acc.handle_debit(Decimal::from_i32(-5).unwrap()).unwrap();
        acc.apply(&evt);
        assert_eq!(acc.balance(), Decimal::from_u32(5).unwrap());

        let acc = Account::new(1, "Alice", Decimal::MAX);
        let err = acc.handle_debit(Decimal::MIN).unwrap_err();
        assert_eq!(err, AccountError::BalanceOverflow);
    }

    #[test]
    fn serializes_balance_as_number() {
        let acc = Account::new(2, "Bob", Decimal::new(800, 1));
        let json = serde_json::to_string(&acc).unwrap();
        assert_eq!(json, r#"{"id":2,"name":"Bob","balance":80.0}"#);
    }
}
