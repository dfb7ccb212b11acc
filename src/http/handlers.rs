use axum::{
    body::Bytes,
    extract::{Query, State, rejection::QueryRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::{
    command::{BalanceQuery, CreditCommand, TransferCommand},
    store::SharedLedger,
};

use super::error::ApiError;

/// `GET /getBalance?id=<int>`
///
/// An unreadable query string behaves like a missing id.
pub async fn get_balance(
    State(ledger): State<SharedLedger>,
    query: Result<Query<BalanceQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let query = query.map(|Query(query)| query).unwrap_or_default();
    let id = query.account_id()?;
    let account = ledger.get(id)?;
    let body = serde_json::to_vec(&account).map_err(ApiError::Encode)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}

/// `POST /updateBalance`, body `{id, name?, balance}` where `balance` is the delta.
///
/// Bodies are decoded as JSON whatever their content type.
pub async fn update_balance(
    State(ledger): State<SharedLedger>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let cmd = CreditCommand::parse(&body)?;
    let account = ledger.credit(cmd.id, cmd.balance)?;
    tracing::info!(id = cmd.id, delta = %cmd.balance, balance = %account.balance(), "balance updated");
    Ok(StatusCode::OK)
}

/// `POST /transferBalance`, body `{from_id, to_id, amount}`.
pub async fn transfer_balance(
    State(ledger): State<SharedLedger>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let cmd = TransferCommand::parse(&body)?;
    ledger.transfer(cmd.from_id, cmd.to_id, cmd.amount)?;
    tracing::info!(from_id = cmd.from_id, to_id = cmd.to_id, amount = %cmd.amount, "transfer completed");
    Ok(StatusCode::OK)
}
