use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

/// Errors raised by the ledger engine.
///
/// Every variant is recoverable: it rejects a single operation and leaves the
/// ledger in the state it had before the call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("amount must be positive")]
    InvalidAmount,
    #[error("insufficient funds, available: {available:.2}")]
    InsufficientFunds { available: Decimal },
    #[error("account {0} is inactive")]
    InactiveAccount(String),
    #[error("account {0} not found")]
    NotFound(String),
    #[error("account holder name cannot be empty")]
    EmptyHolderName,
    #[error("initial deposit cannot be negative")]
    NegativeInitialDeposit,
    #[error("unknown account type: {0}")]
    UnknownAccountType(String),
    #[error("cannot close account with balance {balance:.2}, settle it first")]
    NonZeroBalance { balance: Decimal },
    #[error("cannot transfer from account {0} to itself")]
    SelfTransfer(String),
    #[error("account number {0} is already taken")]
    DuplicateAccountNumber(String),
    #[error("amount is out of range for the account balance")]
    AmountOverflow,
    #[error("{0} cannot be negative")]
    NegativeAccountOption(&'static str),
}

/// Stable, machine-checkable classification of a [`LedgerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidAmount,
    InsufficientFunds,
    InactiveAccount,
    NotFound,
    EmptyHolderName,
    NegativeInitialDeposit,
    UnknownAccountType,
    NonZeroBalance,
    SelfTransfer,
    DuplicateAccountNumber,
    AmountOverflow,
    NegativeAccountOption,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidAmount => "invalid_amount",
            ErrorKind::InsufficientFunds => "insufficient_funds",
            ErrorKind::InactiveAccount => "inactive_account",
            ErrorKind::NotFound => "not_found",
            ErrorKind::EmptyHolderName => "empty_holder_name",
            ErrorKind::NegativeInitialDeposit => "negative_initial_deposit",
            ErrorKind::UnknownAccountType => "unknown_account_type",
            ErrorKind::NonZeroBalance => "non_zero_balance",
            ErrorKind::SelfTransfer => "self_transfer",
            ErrorKind::DuplicateAccountNumber => "duplicate_account_number",
            ErrorKind::AmountOverflow => "amount_overflow",
            ErrorKind::NegativeAccountOption => "negative_account_option",
        }
    }
}

impl LedgerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::InvalidAmount => ErrorKind::InvalidAmount,
            LedgerError::InsufficientFunds { .. } => ErrorKind::InsufficientFunds,
            LedgerError::InactiveAccount(_) => ErrorKind::InactiveAccount,
            LedgerError::NotFound(_) => ErrorKind::NotFound,
            LedgerError::EmptyHolderName => ErrorKind::EmptyHolderName,
            LedgerError::NegativeInitialDeposit => ErrorKind::NegativeInitialDeposit,
            LedgerError::UnknownAccountType(_) => ErrorKind::UnknownAccountType,
            LedgerError::NonZeroBalance { .. } => ErrorKind::NonZeroBalance,
            LedgerError::SelfTransfer(_) => ErrorKind::SelfTransfer,
            LedgerError::DuplicateAccountNumber(_) => ErrorKind::DuplicateAccountNumber,
            LedgerError::AmountOverflow => ErrorKind::AmountOverflow,
            LedgerError::NegativeAccountOption(_) => ErrorKind::NegativeAccountOption,
        }
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
