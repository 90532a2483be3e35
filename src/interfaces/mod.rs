//! Transports driving the ledger: the interactive console and CSV reports.

pub mod console;
pub mod csv;
