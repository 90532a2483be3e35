#![allow(dead_code)]

use bank_ledger::application::ledger::{AccountOptions, Ledger};
use bank_ledger::config::LedgerConfig;
use bank_ledger::domain::ids::AccountNumber;
use rand::Rng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;

pub fn ledger() -> Ledger {
    Ledger::in_memory(LedgerConfig::default())
}

pub async fn open_savings(ledger: &Ledger, holder: &str, initial: Decimal) -> AccountNumber {
    open(ledger, holder, "savings", initial, AccountOptions::default()).await
}

pub async fn open_current(
    ledger: &Ledger,
    holder: &str,
    initial: Decimal,
    overdraft_limit: Decimal,
) -> AccountNumber {
    let options = AccountOptions {
        overdraft_limit: Some(overdraft_limit),
        ..Default::default()
    };
    open(ledger, holder, "current", initial, options).await
}

pub async fn open(
    ledger: &Ledger,
    holder: &str,
    account_type: &str,
    initial: Decimal,
    options: AccountOptions,
) -> AccountNumber {
    let handle = ledger
        .create_account(holder, account_type, initial, options)
        .await
        .expect("Failed to create account");
    let number = handle.lock().await.number().clone();
    number
}

/// A random positive amount between 0.01 and `max_cents / 100`.
pub fn random_amount(rng: &mut StdRng, max_cents: i64) -> Decimal {
    Decimal::new(rng.gen_range(1..=max_cents), 2)
}
