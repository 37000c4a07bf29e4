//! Resource endpoint handlers.
//!
//! Handlers only see authenticated requests (the bearer gate runs first)
//! and serve the seeded mock data in CDS envelopes.

use std::sync::Arc;

use axum::extract::{OriginalUri, Path, State};
use axum::Json;

use crate::errors::ApiError;
use crate::models::banking::{
    AccountListData, Links, Meta, ResponseBankingAccountList, ResponseBankingTransactionList,
    TransactionListData,
};
use crate::AppState;

/// `GET /cds-au/v1/banking/accounts`
pub async fn get_accounts(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
) -> Json<ResponseBankingAccountList> {
    let accounts = state.accounts.clone();
    let total_records = accounts.len();

    Json(ResponseBankingAccountList {
        data: AccountListData { accounts },
        links: Links {
            self_link: uri.to_string(),
        },
        meta: Meta {
            total_records,
            total_pages: 1,
        },
    })
}

/// `GET /cds-au/v1/banking/accounts/:account_id/transactions`
pub async fn get_transactions(
    State(state): State<Arc<AppState>>,
    Path(account_id): Path<String>,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<ResponseBankingTransactionList>, ApiError> {
    let transactions = state
        .transactions
        .get(&account_id)
        .ok_or(ApiError::AccountNotFound)?
        .clone();
    let total_records = transactions.len();

    Ok(Json(ResponseBankingTransactionList {
        data: TransactionListData { transactions },
        links: Links {
            self_link: uri.to_string(),
        },
        meta: Meta {
            total_records,
            total_pages: 1,
        },
    }))
}
