use crate::application::ledger::{AccountOptions, Ledger};
use crate::domain::ids::AccountNumber;
use crate::domain::money::Money;
use crate::error::LedgerError;
use crate::interfaces::csv::account_writer::AccountWriter;
use crate::interfaces::csv::statement_writer::StatementWriter;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

const RULE_WIDTH: usize = 50;

/// Line-based, numbered-menu front end over a [`Ledger`].
///
/// All parsing of typed input happens here; the ledger only ever receives
/// already-parsed decimals and normalized account numbers. End of input ends
/// the session.
pub struct Console<'a, R, W> {
    ledger: &'a Ledger,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(ledger: &'a Ledger, input: R, output: W) -> Self {
        Self {
            ledger,
            input,
            output,
        }
    }

    pub async fn run(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "Starting {} Banking Application...",
            self.ledger.name()
        )?;

        loop {
            self.display_menu()?;
            let Some(choice) = self.prompt("Enter your choice (0-11): ")? else {
                break;
            };
            match choice.as_str() {
                "1" => self.create_account_flow().await?,
                "2" => self.deposit_flow().await?,
                "3" => self.withdraw_flow().await?,
                "4" => self.check_balance_flow().await?,
                "5" => self.transaction_history_flow().await?,
                "6" => self.transfer_flow().await?,
                "7" => self.account_info_flow().await?,
                "8" => self.close_account_flow().await?,
                "9" => self.apply_interest_flow().await?,
                "10" => self.bank_summary_flow().await?,
                "11" => self.export_statement_flow().await?,
                "0" => break,
                _ => writeln!(
                    self.output,
                    "Invalid choice. Please enter a number between 0-11."
                )?,
            }
        }

        writeln!(
            self.output,
            "\nThank you for banking with {}!",
            self.ledger.name()
        )?;
        self.output.flush()
    }

    fn display_menu(&mut self) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.output, "\n{rule}")?;
        writeln!(
            self.output,
            "    WELCOME TO {}",
            self.ledger.name().to_uppercase()
        )?;
        writeln!(self.output, "{rule}")?;
        for line in [
            "1. Create Account",
            "2. Deposit Money",
            "3. Withdraw Money",
            "4. Check Balance",
            "5. View Transaction History",
            "6. Transfer Funds",
            "7. View Account Information",
            "8. Close Account",
            "9. Apply Monthly Interest",
            "10. Bank Summary (CSV)",
            "11. Export Statement (CSV)",
            "0. Exit",
        ] {
            writeln!(self.output, "{line}")?;
        }
        writeln!(self.output, "{rule}")
    }

    async fn create_account_flow(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Create New Account ---")?;
        let Some(holder) = self.prompt("Enter account holder name: ")? else {
            return Ok(());
        };
        if holder.trim().is_empty() {
            return writeln!(self.output, "Account holder name is required.");
        }

        let config = self.ledger.config();
        let savings_line = format!(
            "1. Savings Account ({}% interest)",
            config.default_interest_rate
        );
        let current_line = format!(
            "2. Current Account ({} overdraft)",
            money(self.ledger, config.default_overdraft_limit)
        );
        writeln!(self.output, "\nAccount Types:\n{savings_line}\n{current_line}")?;

        let Some(choice) = self.prompt("Choose account type (1 or 2): ")? else {
            return Ok(());
        };
        let account_type = match choice.as_str() {
            "1" => "savings",
            "2" => "current",
            _ => {
                writeln!(self.output, "Invalid choice. Defaulting to Savings Account.")?;
                "savings"
            }
        };

        let label = format!(
            "Enter initial deposit amount ({}): ",
            self.ledger.currency_symbol()
        );
        let Some(raw) = self.prompt(&label)? else {
            return Ok(());
        };
        let zero = money(self.ledger, Decimal::ZERO);
        let initial_deposit = match parse_amount(&raw) {
            Some(amount) if amount < Decimal::ZERO => {
                writeln!(
                    self.output,
                    "Initial deposit cannot be negative. Setting to {zero}"
                )?;
                Decimal::ZERO
            }
            Some(amount) => amount,
            None => {
                writeln!(
                    self.output,
                    "Invalid amount. Setting initial deposit to {zero}"
                )?;
                Decimal::ZERO
            }
        };

        match self
            .ledger
            .create_account(
                &holder,
                account_type,
                initial_deposit,
                AccountOptions::default(),
            )
            .await
        {
            Ok(handle) => {
                let info = handle.lock().await.info();
                writeln!(self.output, "\n=== Account Created Successfully ===")?;
                writeln!(self.output, "Bank: {}", self.ledger.name())?;
                writeln!(self.output, "Account Holder: {}", info.account_holder)?;
                writeln!(self.output, "Account Number: {}", info.account_number)?;
                writeln!(self.output, "Account Type: {}", info.account_type)?;
                writeln!(self.output, "Initial Balance: {}", money(self.ledger, info.balance))?;
                writeln!(
                    self.output,
                    "Account created successfully! Your account number is: {}",
                    info.account_number
                )
            }
            Err(err) => self.report(&err),
        }
    }

    async fn deposit_flow(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Deposit Money ---")?;
        let Some(number) = self.account_input().await? else {
            return Ok(());
        };
        let Some(amount) = self.amount_input("Enter deposit amount").await? else {
            return Ok(());
        };
        let Some(description) = self.prompt("Enter description (optional): ")? else {
            return Ok(());
        };
        let description = Some(description.trim()).filter(|d| !d.is_empty());

        match self.ledger.deposit(&number, amount, description).await {
            Ok(balance) => writeln!(
                self.output,
                "Successfully deposited {}. New balance: {}",
                money(self.ledger, amount),
                money(self.ledger, balance)
            ),
            Err(err) => self.report(&err),
        }
    }

    async fn withdraw_flow(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Withdraw Money ---")?;
        let Some(number) = self.account_input().await? else {
            return Ok(());
        };
        let Some(amount) = self.amount_input("Enter withdrawal amount").await? else {
            return Ok(());
        };
        let Some(description) = self.prompt("Enter description (optional): ")? else {
            return Ok(());
        };
        let description = Some(description.trim()).filter(|d| !d.is_empty());

        match self.ledger.withdraw(&number, amount, description).await {
            Ok(balance) => writeln!(
                self.output,
                "Successfully withdrew {}. New balance: {}",
                money(self.ledger, amount),
                money(self.ledger, balance)
            ),
            Err(err) => self.report(&err),
        }
    }

    async fn check_balance_flow(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Check Balance ---")?;
        let Some(number) = self.account_input().await? else {
            return Ok(());
        };
        match self.ledger.balance(&number).await {
            Ok(balance) => writeln!(
                self.output,
                "Account Balance: {}",
                money(self.ledger, balance)
            ),
            Err(err) => self.report(&err),
        }
    }

    async fn transaction_history_flow(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Transaction History ---")?;
        let Some(number) = self.account_input().await? else {
            return Ok(());
        };
        let history = match self.ledger.history(&number).await {
            Ok(history) => history,
            Err(err) => return self.report(&err),
        };
        if history.is_empty() {
            return writeln!(self.output, "No transactions found.");
        }

        let rule = "-".repeat(60);
        writeln!(self.output, "\nTransaction History for Account {number}:")?;
        writeln!(self.output, "{rule}")?;
        for tx in &history {
            let view = tx.view();
            writeln!(
                self.output,
                "{} - {:<10} {:>12} - {}",
                view.timestamp,
                view.r#type.as_str().to_uppercase(),
                money(self.ledger, view.amount),
                view.description
            )?;
        }
        writeln!(self.output, "{rule}")
    }

    async fn transfer_flow(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Transfer Funds ---")?;
        let Some(from) = self.prompt("Enter your account number: ")? else {
            return Ok(());
        };
        let Some(to) = self.prompt("Enter recipient account number: ")? else {
            return Ok(());
        };
        let Some(amount) = self.amount_input("Enter transfer amount").await? else {
            return Ok(());
        };
        let (from, to) = (AccountNumber::new(from), AccountNumber::new(to));

        match self.ledger.transfer_funds(&from, &to, amount).await {
            Ok(()) => writeln!(
                self.output,
                "Successfully transferred {} from {from} to {to}",
                money(self.ledger, amount)
            ),
            Err(err) => self.report(&err),
        }
    }

    async fn account_info_flow(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Account Information ---")?;
        let Some(number) = self.account_input().await? else {
            return Ok(());
        };
        let info = match self.ledger.account_info(&number).await {
            Ok(info) => info,
            Err(err) => return self.report(&err),
        };

        writeln!(self.output, "\nAccount Information:")?;
        writeln!(self.output, "Bank: {}", self.ledger.name())?;
        writeln!(self.output, "Account Number: {}", info.account_number)?;
        writeln!(self.output, "Account Holder: {}", info.account_holder)?;
        writeln!(self.output, "Account Type: {}", info.account_type)?;
        writeln!(self.output, "Balance: {}", money(self.ledger, info.balance))?;
        let status = if info.is_active { "Active" } else { "Inactive" };
        writeln!(self.output, "Status: {status}")?;
        if let Some(rate) = info.interest_rate {
            writeln!(self.output, "Interest Rate: {rate}%")?;
        }
        if let Some(limit) = info.overdraft_limit {
            writeln!(self.output, "Overdraft Limit: {}", money(self.ledger, limit))?;
        }
        Ok(())
    }

    async fn close_account_flow(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Close Account ---")?;
        let Some(number) = self.account_input().await? else {
            return Ok(());
        };
        match self.ledger.close_account(&number).await {
            Ok(()) => writeln!(self.output, "Account {number} has been closed."),
            Err(err) => self.report(&err),
        }
    }

    async fn apply_interest_flow(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Apply Monthly Interest ---")?;
        let Some(number) = self.account_input().await? else {
            return Ok(());
        };
        match self.ledger.apply_interest(&number).await {
            Ok(Some(interest)) => {
                let balance = match self.ledger.balance(&number).await {
                    Ok(balance) => balance,
                    Err(err) => return self.report(&err),
                };
                writeln!(
                    self.output,
                    "Interest of {} applied. New balance: {}",
                    money(self.ledger, interest),
                    money(self.ledger, balance)
                )
            }
            Ok(None) => writeln!(self.output, "No interest due for this account."),
            Err(err) => self.report(&err),
        }
    }

    async fn bank_summary_flow(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Bank Summary ---")?;
        let (accounts, total) = match (
            self.ledger.all_accounts().await,
            self.ledger.total_balance().await,
        ) {
            (Ok(accounts), Ok(total)) => (accounts, total),
            (Err(err), _) | (_, Err(err)) => return self.report(&err),
        };

        AccountWriter::new(&mut self.output)
            .write_accounts(&accounts)
            .map_err(io::Error::other)?;
        writeln!(self.output, "Accounts: {}", accounts.len())?;
        writeln!(
            self.output,
            "Total bank balance: {} ({})",
            money(self.ledger, total),
            self.ledger.currency()
        )
    }

    async fn export_statement_flow(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Export Statement ---")?;
        let Some(number) = self.account_input().await? else {
            return Ok(());
        };
        let Some(path) = self.prompt("Enter output file path: ")? else {
            return Ok(());
        };
        let path = path.trim();
        if path.is_empty() {
            return writeln!(self.output, "Output file path is required.");
        }

        let history = match self.ledger.history(&number).await {
            Ok(history) => history,
            Err(err) => return self.report(&err),
        };
        let written = File::create(path)
            .map_err(csv::Error::from)
            .and_then(|file| StatementWriter::new(file).write_transactions(&history));
        match written {
            Ok(()) => writeln!(
                self.output,
                "Statement with {} transactions written to {path}",
                history.len()
            ),
            Err(err) => writeln!(self.output, "Could not write statement: {err}"),
        }
    }

    /// Prompts for an account number and checks that it exists.
    async fn account_input(&mut self) -> io::Result<Option<AccountNumber>> {
        let Some(raw) = self.prompt("Enter account number: ")? else {
            return Ok(None);
        };
        let number = AccountNumber::new(raw);
        match self.ledger.get_account(&number).await {
            Ok(Some(_)) => Ok(Some(number)),
            Ok(None) => {
                writeln!(
                    self.output,
                    "Account not found. Please check the account number."
                )?;
                Ok(None)
            }
            Err(err) => {
                self.report(&err)?;
                Ok(None)
            }
        }
    }

    async fn amount_input(&mut self, label: &str) -> io::Result<Option<Decimal>> {
        let label = format!("{label} ({}): ", self.ledger.currency_symbol());
        let Some(raw) = self.prompt(&label)? else {
            return Ok(None);
        };
        match parse_amount(&raw) {
            Some(amount) => Ok(Some(amount)),
            None => {
                writeln!(self.output, "Invalid amount. Please enter a valid number.")?;
                Ok(None)
            }
        }
    }

    /// Writes `label` and reads one line. `None` means end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn report(&mut self, err: &LedgerError) -> io::Result<()> {
        writeln!(self.output, "Error ({}): {err}", err.kind().as_str())
    }
}

fn money(ledger: &Ledger, value: impl Into<Decimal>) -> String {
    Money::new(value, ledger.currency_symbol()).to_string()
}

/// Parses a typed amount such as `"1500"`, `"12.50"` or `" 3.1 "`.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim()).ok()
}
