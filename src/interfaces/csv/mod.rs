pub mod account_writer;
pub mod statement_writer;
