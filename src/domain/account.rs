use super::ids::AccountNumber;
use super::money::{Amount, Balance, round_to_cents};
use super::transaction::{Transaction, TransactionType};
use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

pub const DEFAULT_DEPOSIT_DESCRIPTION: &str = "Deposit";
pub const DEFAULT_WITHDRAWAL_DESCRIPTION: &str = "Withdrawal";
pub const INITIAL_DEPOSIT_DESCRIPTION: &str = "Initial deposit";
pub const INTEREST_DESCRIPTION: &str = "Monthly interest";

/// Account variant requested by a caller, without its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountType {
    Savings,
    Current,
}

impl FromStr for AccountType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "savings" => Ok(AccountType::Savings),
            "current" => Ok(AccountType::Current),
            _ => Err(LedgerError::UnknownAccountType(s.to_string())),
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountType::Savings => f.write_str("SavingsAccount"),
            AccountType::Current => f.write_str("CurrentAccount"),
        }
    }
}

/// Variant-specific behavior and parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccountKind {
    /// Earns monthly simple interest; annual `interest_rate` is a percentage.
    Savings { interest_rate: Decimal },
    /// May be overdrawn down to `-overdraft_limit`.
    Current { overdraft_limit: Decimal },
}

impl AccountKind {
    pub fn account_type(&self) -> AccountType {
        match self {
            AccountKind::Savings { .. } => AccountType::Savings,
            AccountKind::Current { .. } => AccountType::Current,
        }
    }
}

/// Serializable summary of an account.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct AccountInfo {
    pub account_number: AccountNumber,
    pub account_holder: String,
    pub account_type: String,
    pub balance: Decimal,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overdraft_limit: Option<Decimal>,
}

/// A holder's balance together with its append-only transaction log.
///
/// Balance and history only change through [`Account::deposit`] and
/// [`Account::withdraw`], and each successful call appends exactly one
/// [`Transaction`] matching the balance movement.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    number: AccountNumber,
    holder: String,
    balance: Balance,
    active: bool,
    history: Vec<Transaction>,
    kind: AccountKind,
}

impl Account {
    /// Opens an account. A positive `initial_deposit` is recorded as an
    /// "Initial deposit" transaction; anything else starts the account at zero.
    pub fn open(
        number: AccountNumber,
        holder: impl Into<String>,
        initial_deposit: Decimal,
        kind: AccountKind,
    ) -> Self {
        let mut account = Self {
            number,
            holder: holder.into(),
            balance: Balance::ZERO,
            active: true,
            history: Vec::new(),
            kind,
        };
        if let Ok(amount) = Amount::new(initial_deposit) {
            account.balance = amount.into();
            account.history.push(Transaction::new(
                TransactionType::Deposit,
                amount,
                INITIAL_DEPOSIT_DESCRIPTION,
            ));
        }
        account
    }

    pub fn number(&self) -> &AccountNumber {
        &self.number
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn balance(&self) -> Balance {
        self.balance
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn interest_rate(&self) -> Option<Decimal> {
        match self.kind {
            AccountKind::Savings { interest_rate } => Some(interest_rate),
            AccountKind::Current { .. } => None,
        }
    }

    pub fn overdraft_limit(&self) -> Option<Decimal> {
        match self.kind {
            AccountKind::Savings { .. } => None,
            AccountKind::Current { overdraft_limit } => Some(overdraft_limit),
        }
    }

    /// Returns a snapshot of the transaction log in chronological order.
    pub fn history(&self) -> Vec<Transaction> {
        self.history.clone()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn deposit(&mut self, amount: Decimal, description: &str) -> Result<()> {
        self.ensure_active()?;
        let amount = Amount::new(amount)?;
        self.credit(amount, description)
    }

    pub fn withdraw(&mut self, amount: Decimal, description: &str) -> Result<()> {
        self.ensure_active()?;
        let amount = Amount::new(amount)?;

        let available = self.available_funds();
        if amount.value() > available {
            return Err(LedgerError::InsufficientFunds { available });
        }

        self.balance = self
            .balance
            .checked_sub(amount.into())
            .ok_or(LedgerError::AmountOverflow)?;
        self.history.push(Transaction::new(
            TransactionType::Withdrawal,
            amount,
            description,
        ));
        debug!(
            account = %self.number,
            amount = %amount.value(),
            balance = %self.balance.0,
            "withdrawal recorded"
        );
        Ok(())
    }

    /// Funds a withdrawal may draw on: the balance, plus the overdraft limit
    /// for current accounts. Saturates at the largest representable value.
    pub fn available_funds(&self) -> Decimal {
        match self.kind {
            AccountKind::Savings { .. } => self.balance.0,
            AccountKind::Current { overdraft_limit } => {
                self.balance.0.saturating_add(overdraft_limit)
            }
        }
    }

    /// Monthly simple interest on the current balance, `None` for accounts
    /// that do not earn interest.
    ///
    /// Fails with [`LedgerError::AmountOverflow`] when the balance is too
    /// large for the product with the rate to be represented.
    pub fn calculate_interest(&self) -> Result<Option<Decimal>> {
        match self.kind {
            AccountKind::Savings { interest_rate } => self
                .balance
                .0
                .checked_mul(interest_rate)
                .map(|yearly| Some(yearly / Decimal::ONE_HUNDRED / Decimal::from(12)))
                .ok_or(LedgerError::AmountOverflow),
            AccountKind::Current { .. } => Ok(None),
        }
    }

    /// Credits one month of interest, rounded to cents.
    ///
    /// Returns the amount credited, or `None` when nothing was due.
    pub fn apply_interest(&mut self) -> Result<Option<Decimal>> {
        let interest = match self.calculate_interest()? {
            Some(interest) => round_to_cents(interest),
            None => return Ok(None),
        };
        if interest <= Decimal::ZERO {
            return Ok(None);
        }
        self.deposit(interest, INTEREST_DESCRIPTION)?;
        Ok(Some(interest))
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn info(&self) -> AccountInfo {
        AccountInfo {
            account_number: self.number.clone(),
            account_holder: self.holder.clone(),
            account_type: self.kind.account_type().to_string(),
            balance: self.balance.0,
            is_active: self.active,
            interest_rate: self.interest_rate(),
            overdraft_limit: self.overdraft_limit(),
        }
    }

    fn ensure_active(&self) -> Result<()> {
        if self.active {
            Ok(())
        } else {
            Err(LedgerError::InactiveAccount(self.number.to_string()))
        }
    }

    fn credit(&mut self, amount: Amount, description: &str) -> Result<()> {
        self.balance = self
            .balance
            .checked_add(amount.into())
            .ok_or(LedgerError::AmountOverflow)?;
        self.history
            .push(Transaction::new(TransactionType::Deposit, amount, description));
        debug!(
            account = %self.number,
            amount = %amount.value(),
            balance = %self.balance.0,
            "deposit recorded"
        );
        Ok(())
    }
}
