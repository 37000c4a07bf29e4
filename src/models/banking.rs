//! CDS banking payload shapes — the subset the sandbox serves.
//!
//! Field names follow the Consumer Data Standards wire format (camelCase),
//! so the serialized output matches what a real data holder returns.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub account_id: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    pub masked_number: String,
    pub open_status: OpenStatus,
    pub product_category: String,
    pub product_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OpenStatus {
    Open,
    Closed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub transaction_id: String,
    pub account_id: String,
    pub status: TransactionStatus,
    pub description: String,
    /// CDS AmountString: fixed-point decimal carried as a string.
    pub amount: String,
    pub currency: String,
    pub posting_date_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Posted,
    Pending,
}

// ── Response envelopes ───────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ResponseBankingAccountList {
    pub data: AccountListData,
    pub links: Links,
    pub meta: Meta,
}

#[derive(Debug, Serialize)]
pub struct AccountListData {
    pub accounts: Vec<Account>,
}

#[derive(Debug, Serialize)]
pub struct ResponseBankingTransactionList {
    pub data: TransactionListData,
    pub links: Links,
    pub meta: Meta,
}

#[derive(Debug, Serialize)]
pub struct TransactionListData {
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Serialize)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub total_records: usize,
    pub total_pages: usize,
}

// ── Seed data ────────────────────────────────────────────────

/// Fixed mock accounts for the sandbox customer.
pub fn seed_accounts() -> Vec<Account> {
    vec![
        Account {
            account_id: "acc-001".into(),
            display_name: "Everyday Transaction".into(),
            nickname: Some("spending".into()),
            masked_number: "xxxx-xxxx-xxxx-1234".into(),
            open_status: OpenStatus::Open,
            product_category: "TRANS_AND_SAVINGS_ACCOUNTS".into(),
            product_name: "Everyday Access".into(),
        },
        Account {
            account_id: "acc-002".into(),
            display_name: "Online Saver".into(),
            nickname: None,
            masked_number: "xxxx-xxxx-xxxx-5678".into(),
            open_status: OpenStatus::Open,
            product_category: "TRANS_AND_SAVINGS_ACCOUNTS".into(),
            product_name: "Bonus Saver".into(),
        },
        Account {
            account_id: "acc-003".into(),
            display_name: "Old Home Loan".into(),
            nickname: None,
            masked_number: "xxxx-0912".into(),
            open_status: OpenStatus::Closed,
            product_category: "RESIDENTIAL_MORTGAGES".into(),
            product_name: "Standard Variable".into(),
        },
    ]
}

/// Fixed mock transactions, keyed by account id.
pub fn seed_transactions(accounts: &[Account]) -> std::collections::HashMap<String, Vec<Transaction>> {
    let mut map = std::collections::HashMap::new();
    for account in accounts {
        map.insert(account.account_id.clone(), transactions_for(account));
    }
    map
}

fn transactions_for(account: &Account) -> Vec<Transaction> {
    vec![
        Transaction {
            transaction_id: format!("{}-txn-001", account.account_id),
            account_id: account.account_id.clone(),
            status: TransactionStatus::Posted,
            description: "Direct debit — utilities".into(),
            amount: "-104.85".into(),
            currency: "AUD".into(),
            posting_date_time: Utc.with_ymd_and_hms(2025, 7, 1, 3, 21, 45).unwrap(),
        },
        Transaction {
            transaction_id: format!("{}-txn-002", account.account_id),
            account_id: account.account_id.clone(),
            status: TransactionStatus::Pending,
            description: "Card purchase — grocery".into(),
            amount: "-62.30".into(),
            currency: "AUD".into(),
            posting_date_time: Utc.with_ymd_and_hms(2025, 7, 2, 9, 2, 11).unwrap(),
        },
    ]
}
