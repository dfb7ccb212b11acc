use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::{account::AccountError, command::CommandError, store::LedgerError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    BadRequest(#[from] CommandError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("Failed to encode response: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ApiError {
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Ledger(LedgerError::NotFound(_)) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::Ledger(LedgerError::AccountErr(AccountError::InsufficientFunds {
                ..
            })) => (StatusCode::BAD_REQUEST, "insufficient_funds"),
            ApiError::Ledger(LedgerError::AccountErr(AccountError::BalanceOverflow)) => {
                (StatusCode::BAD_REQUEST, "balance_overflow")
            }
            ApiError::Ledger(LedgerError::DuplicateAccount(_)) | ApiError::Encode(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "Internal server error".to_string()
        } else {
            tracing::debug!(error = %self, "request rejected");
            self.to_string()
        };
        (
            status,
            Json(json!({
                "error": code,
                "message": message,
            })),
        )
            .into_response()
    }
}
