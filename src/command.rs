use rust_decimal::Decimal;
use serde::{Deserialize, de::DeserializeOwned};
use thiserror::Error;

use crate::account::AccountId;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Invalid user ID")]
    InvalidAccountId,
    #[error("Invalid request payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
    #[error("Invalid request payload: empty body")]
    EmptyPayload,
}

/// Query string of a balance lookup. The id stays raw here, so a bad value is
/// reported as [`CommandError::InvalidAccountId`] rather than as a query error.
#[derive(Debug, Default, Deserialize)]
pub struct BalanceQuery {
    pub id: Option<String>,
}

impl BalanceQuery {
    pub fn account_id(&self) -> Result<AccountId, CommandError> {
        self.id
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .ok_or(CommandError::InvalidAccountId)
    }
}

/// Adds `balance` to the account. The name is accepted on the wire but ignored.
///
/// Missing numeric fields read as zero, so `{"id": 1}` is a no-op credit.
#[derive(Debug, Deserialize)]
pub struct CreditCommand {
    #[serde(default)]
    pub id: AccountId,
    pub name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

/// Missing ids read as zero and then fail the account lookup.
#[derive(Debug, Deserialize)]
pub struct TransferCommand {
    #[serde(default)]
    pub from_id: AccountId,
    #[serde(default)]
    pub to_id: AccountId,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

impl CreditCommand {
    pub fn parse(body: &[u8]) -> Result<Self, CommandError> {
        decode_first(body)
    }
}

impl TransferCommand {
    pub fn parse(body: &[u8]) -> Result<Self, CommandError> {
        decode_first(body)
    }
}

/// Decodes the first JSON value in `body`; whatever follows it is ignored.
fn decode_first<T: DeserializeOwned>(body: &[u8]) -> Result<T, CommandError> {
    serde_json::Deserializer::from_slice(body)
        .into_iter()
        .next()
        .ok_or(CommandError::EmptyPayload)?
        .map_err(CommandError::from)
}
