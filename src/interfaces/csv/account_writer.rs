use crate::domain::account::AccountInfo;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct AccountRow<'a> {
    account_number: &'a str,
    holder: &'a str,
    account_type: &'a str,
    balance: String,
    active: bool,
}

/// Writes account summaries as CSV.
///
/// Balances are rendered with two decimals; the header row is
/// `account_number,holder,account_type,balance,active`.
pub struct AccountWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> AccountWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_accounts<'a, I>(&mut self, accounts: I) -> Result<(), csv::Error>
    where
        I: IntoIterator<Item = &'a AccountInfo>,
    {
        for account in accounts {
            self.writer.serialize(AccountRow {
                account_number: account.account_number.as_str(),
                holder: &account.account_holder,
                account_type: &account.account_type,
                balance: format!("{:.2}", account.balance),
                active: account.is_active,
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
