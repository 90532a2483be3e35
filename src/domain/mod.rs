//! Ledger domain: money, identifiers, transactions and accounts, plus the
//! directory port the application layer depends on.

pub mod account;
pub mod ids;
pub mod money;
pub mod ports;
pub mod transaction;
