use crate::domain::transaction::Transaction;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct StatementRow<'a> {
    transaction_id: &'a str,
    r#type: &'a str,
    amount: String,
    description: &'a str,
    timestamp: String,
    status: &'a str,
}

/// Writes an account's transaction history as a CSV statement, oldest first.
pub struct StatementWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> StatementWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_transactions(&mut self, transactions: &[Transaction]) -> Result<(), csv::Error> {
        for tx in transactions {
            let view = tx.view();
            self.writer.serialize(StatementRow {
                transaction_id: tx.id(),
                r#type: tx.r#type().as_str(),
                amount: format!("{:.2}", view.amount),
                description: tx.description(),
                timestamp: view.timestamp,
                status: tx.status().as_str(),
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::{Account, AccountKind};
    use crate::domain::ids::AccountNumber;
    use rust_decimal_macros::dec;

    #[test]
    fn test_write_statement() {
        let mut account = Account::open(
            AccountNumber::new("AAAA0001"),
            "Alice",
            dec!(1000),
            AccountKind::Savings {
                interest_rate: dec!(2.5),
            },
        );
        account.withdraw(dec!(12.5), "Groceries").unwrap();
        let history = account.history();

        let mut out = Vec::new();
        StatementWriter::new(&mut out)
            .write_transactions(&history)
            .unwrap();
        let csv = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "transaction_id,type,amount,description,timestamp,status"
        );
        assert!(lines[1].starts_with(&format!(
            "{},deposit,1000.00,Initial deposit,",
            history[0].id()
        )));
        assert!(lines[2].starts_with(&format!(
            "{},withdrawal,12.50,Groceries,",
            history[1].id()
        )));
        assert!(lines[2].ends_with(",completed"));
    }

    #[test]
    fn test_empty_statement_writes_nothing() {
        let mut out = Vec::new();
        StatementWriter::new(&mut out).write_transactions(&[]).unwrap();
        assert!(out.is_empty());
    }
}
