use super::ids::{TRANSACTION_ID_LEN, random_token};
use super::money::Amount;
use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "deposit",
            TransactionType::Withdrawal => "withdrawal",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    #[default]
    Completed,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "completed",
        }
    }
}

/// One immutable ledger event.
///
/// Fields are private: a transaction is fully determined at construction and
/// only exposes read accessors afterwards.
#[derive(Debug, PartialEq, Clone)]
pub struct Transaction {
    id: String,
    r#type: TransactionType,
    amount: Amount,
    description: String,
    timestamp: DateTime<Local>,
    status: TransactionStatus,
}

/// Flat, serializable rendering of a [`Transaction`] for display or transport.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct TransactionView {
    pub transaction_id: String,
    #[serde(rename = "type")]
    pub r#type: TransactionType,
    pub amount: Decimal,
    pub description: String,
    pub timestamp: String,
    pub status: TransactionStatus,
}

impl Transaction {
    pub fn new(r#type: TransactionType, amount: Amount, description: impl Into<String>) -> Self {
        Self {
            id: random_token(TRANSACTION_ID_LEN),
            r#type,
            amount,
            description: description.into(),
            timestamp: Local::now(),
            status: TransactionStatus::Completed,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn r#type(&self) -> TransactionType {
        self.r#type
    }

    pub fn amount(&self) -> Decimal {
        self.amount.value()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn status(&self) -> TransactionStatus {
        self.status
    }

    pub fn view(&self) -> TransactionView {
        TransactionView {
            transaction_id: self.id.clone(),
            r#type: self.r#type,
            amount: self.amount.value(),
            description: self.description.clone(),
            timestamp: self.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            status: self.status,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transaction {}: {} of {:.2} at {}",
            self.id,
            self.r#type,
            self.amount.value(),
            self.timestamp.format("%Y-%m-%d %H:%M")
        )
    }
}
