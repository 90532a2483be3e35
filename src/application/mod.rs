//! Application layer orchestrating the domain.
//!
//! This module defines the `Ledger`, the entry point transports call into. It
//! owns the account directory and coordinates operations that touch more than
//! one account, such as transfers.

pub mod ledger;
