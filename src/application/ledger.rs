use crate::config::LedgerConfig;
use crate::domain::account::{
    Account, AccountInfo, AccountKind, AccountType, DEFAULT_DEPOSIT_DESCRIPTION,
    DEFAULT_WITHDRAWAL_DESCRIPTION,
};
use crate::domain::ids::AccountNumber;
use crate::domain::money::Balance;
use crate::domain::ports::{AccountDirectoryBox, AccountHandle};
use crate::domain::transaction::Transaction;
use crate::error::{LedgerError, Result};
use crate::infrastructure::in_memory::InMemoryAccountDirectory;
use rust_decimal::Decimal;
use tracing::{error, info, warn};

/// How many fresh account numbers to try before giving up on a collision.
const MAX_NUMBER_ATTEMPTS: usize = 16;

pub const ROLLBACK_DESCRIPTION: &str = "Rollback failed transfer";

/// Variant parameters for a new account. Unset values fall back to the
/// ledger's configured defaults; negative values are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AccountOptions {
    pub interest_rate: Option<Decimal>,
    pub overdraft_limit: Option<Decimal>,
}

/// The bank: owns the account directory and orchestrates operations that span
/// accounts.
///
/// Every account is behind its own lock. Single-account operations hold that
/// lock for their whole duration; transfers hold both locks, acquired in
/// ascending account-number order so opposite transfers cannot deadlock.
pub struct Ledger {
    config: LedgerConfig,
    directory: AccountDirectoryBox,
}

impl Ledger {
    /// Creates a new `Ledger` over the given directory.
    ///
    /// # Arguments
    ///
    /// * `config` - Bank name, currency and account defaults.
    /// * `directory` - Storage for the accounts opened by this ledger.
    pub fn new(config: LedgerConfig, directory: AccountDirectoryBox) -> Self {
        Self { config, directory }
    }

    /// Creates a ledger backed by an empty in-memory directory.
    pub fn in_memory(config: LedgerConfig) -> Self {
        Self::new(config, Box::new(InMemoryAccountDirectory::new()))
    }

    pub fn name(&self) -> &str {
        &self.config.bank_name
    }

    pub fn currency(&self) -> &str {
        &self.config.currency
    }

    pub fn currency_symbol(&self) -> &str {
        &self.config.currency_symbol
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Opens a new account and registers it under a fresh account number.
    ///
    /// `account_type` is `"savings"` or `"current"`, case-insensitive.
    pub async fn create_account(
        &self,
        holder: &str,
        account_type: &str,
        initial_deposit: Decimal,
        options: AccountOptions,
    ) -> Result<AccountHandle> {
        let holder = holder.trim();
        if holder.is_empty() {
            return Err(LedgerError::EmptyHolderName);
        }
        if initial_deposit < Decimal::ZERO {
            return Err(LedgerError::NegativeInitialDeposit);
        }
        let kind = match account_type.parse::<AccountType>()? {
            AccountType::Savings => AccountKind::Savings {
                interest_rate: non_negative(
                    "interest_rate",
                    options
                        .interest_rate
                        .unwrap_or(self.config.default_interest_rate),
                )?,
            },
            AccountType::Current => AccountKind::Current {
                overdraft_limit: non_negative(
                    "overdraft_limit",
                    options
                        .overdraft_limit
                        .unwrap_or(self.config.default_overdraft_limit),
                )?,
            },
        };

        let mut last_collision = None;
        for _ in 0..MAX_NUMBER_ATTEMPTS {
            let account = Account::open(AccountNumber::generate(), holder, initial_deposit, kind);
            let number = account.number().clone();
            match self.directory.insert(account).await {
                Ok(handle) => {
                    info!(
                        account = %number,
                        holder,
                        account_type = %kind.account_type(),
                        initial_deposit = %initial_deposit,
                        "account created"
                    );
                    return Ok(handle);
                }
                Err(LedgerError::DuplicateAccountNumber(taken)) => {
                    warn!(account = %taken, "account number collision, regenerating");
                    last_collision = Some(taken);
                }
                Err(e) => return Err(e),
            }
        }
        Err(LedgerError::DuplicateAccountNumber(
            last_collision.unwrap_or_default(),
        ))
    }

    pub async fn get_account(&self, number: &AccountNumber) -> Result<Option<AccountHandle>> {
        self.directory.get(number).await
    }

    pub async fn account_count(&self) -> Result<usize> {
        self.directory.len().await
    }

    /// Deposits into an account and returns its new balance.
    pub async fn deposit(
        &self,
        number: &AccountNumber,
        amount: Decimal,
        description: Option<&str>,
    ) -> Result<Balance> {
        let handle = self.require(number).await?;
        let mut account = handle.lock().await;
        account.deposit(amount, description.unwrap_or(DEFAULT_DEPOSIT_DESCRIPTION))?;
        Ok(account.balance())
    }

    /// Withdraws from an account and returns its new balance.
    pub async fn withdraw(
        &self,
        number: &AccountNumber,
        amount: Decimal,
        description: Option<&str>,
    ) -> Result<Balance> {
        let handle = self.require(number).await?;
        let mut account = handle.lock().await;
        account.withdraw(amount, description.unwrap_or(DEFAULT_WITHDRAWAL_DESCRIPTION))?;
        Ok(account.balance())
    }

    pub async fn balance(&self, number: &AccountNumber) -> Result<Balance> {
        let handle = self.require(number).await?;
        let account = handle.lock().await;
        Ok(account.balance())
    }

    pub async fn history(&self, number: &AccountNumber) -> Result<Vec<Transaction>> {
        let handle = self.require(number).await?;
        let account = handle.lock().await;
        Ok(account.history())
    }

    pub async fn account_info(&self, number: &AccountNumber) -> Result<AccountInfo> {
        let handle = self.require(number).await?;
        let account = handle.lock().await;
        Ok(account.info())
    }

    /// Credits one month of interest to a savings account. Returns the amount
    /// credited, `None` if nothing was due or the account earns no interest.
    pub async fn apply_interest(&self, number: &AccountNumber) -> Result<Option<Decimal>> {
        let handle = self.require(number).await?;
        let mut account = handle.lock().await;
        let credited = account.apply_interest()?;
        if let Some(interest) = credited {
            info!(account = %number, interest = %interest, "interest applied");
        }
        Ok(credited)
    }

    /// Applies monthly interest to every active savings account and returns
    /// the total credited. An account whose interest cannot be credited is
    /// logged and skipped.
    pub async fn apply_monthly_interest(&self) -> Result<Decimal> {
        let mut total = Decimal::ZERO;
        for handle in self.directory.all().await? {
            let mut account = handle.lock().await;
            if !account.is_active() {
                continue;
            }
            match account.apply_interest() {
                Ok(Some(interest)) => {
                    total = total
                        .checked_add(interest)
                        .ok_or(LedgerError::AmountOverflow)?;
                }
                Ok(None) => {}
                Err(err) => {
                    warn!(account = %account.number(), error = %err, "interest not applied");
                }
            }
        }
        info!(total = %total, "monthly interest run complete");
        Ok(total)
    }

    /// Soft-closes an account. Only accounts with a zero balance can be
    /// closed; the directory entry is kept for later lookups.
    pub async fn close_account(&self, number: &AccountNumber) -> Result<()> {
        let handle = self.require(number).await?;
        let mut account = handle.lock().await;
        let balance = account.balance();
        if balance != Balance::ZERO {
            return Err(LedgerError::NonZeroBalance {
                balance: balance.value(),
            });
        }
        account.deactivate();
        info!(account = %number, "account closed");
        Ok(())
    }

    /// Moves `amount` from one account to another.
    ///
    /// The source is debited first. If crediting the destination fails, the
    /// source is credited back with a compensating transaction and the
    /// destination's error is returned.
    pub async fn transfer_funds(
        &self,
        from: &AccountNumber,
        to: &AccountNumber,
        amount: Decimal,
    ) -> Result<()> {
        let source_handle = self.require(from).await?;
        let destination_handle = self.require(to).await?;
        if from == to {
            return Err(LedgerError::SelfTransfer(from.to_string()));
        }

        let (mut source, mut destination) = if from < to {
            let s = source_handle.lock().await;
            let d = destination_handle.lock().await;
            (s, d)
        } else {
            let d = destination_handle.lock().await;
            let s = source_handle.lock().await;
            (s, d)
        };

        if !source.is_active() {
            return Err(LedgerError::InactiveAccount(from.to_string()));
        }
        if !destination.is_active() {
            return Err(LedgerError::InactiveAccount(to.to_string()));
        }
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount);
        }

        settle_transfer(&mut source, &mut destination, amount)
    }

    /// Sum of every account balance, for reporting.
    pub async fn total_balance(&self) -> Result<Balance> {
        let mut total = Balance::ZERO;
        for handle in self.directory.all().await? {
            let balance = handle.lock().await.balance();
            total = total
                .checked_add(balance)
                .ok_or(LedgerError::AmountOverflow)?;
        }
        Ok(total)
    }

    /// Summaries of every account, ordered by account number.
    pub async fn all_accounts(&self) -> Result<Vec<AccountInfo>> {
        let mut accounts = Vec::new();
        for handle in self.directory.all().await? {
            accounts.push(handle.lock().await.info());
        }
        Ok(accounts)
    }

    async fn require(&self, number: &AccountNumber) -> Result<AccountHandle> {
        self.directory
            .get(number)
            .await?
            .ok_or_else(|| LedgerError::NotFound(number.to_string()))
    }
}

fn non_negative(option: &'static str, value: Decimal) -> Result<Decimal> {
    if value < Decimal::ZERO {
        return Err(LedgerError::NegativeAccountOption(option));
    }
    Ok(value)
}

/// Runs the two legs of a transfer on already-locked accounts.
fn settle_transfer(
    source: &mut Account,
    destination: &mut Account,
    amount: Decimal,
) -> Result<()> {
    let from = source.number().clone();
    let to = destination.number().clone();

    source.withdraw(amount, &format!("Transfer to {to}"))?;

    if let Err(err) = destination.deposit(amount, &format!("Transfer from {from}")) {
        warn!(
            from = %from,
            to = %to,
            amount = %amount,
            error = %err,
            "transfer credit failed, rolling back"
        );
        if let Err(rollback_err) = source.deposit(amount, ROLLBACK_DESCRIPTION) {
            error!(
                from = %from,
                amount = %amount,
                error = %rollback_err,
                "transfer rollback failed"
            );
        }
        return Err(err);
    }

    info!(from = %from, to = %to, amount = %amount, "transfer completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::TransactionType;
    use rust_decimal_macros::dec;

    fn ledger() -> Ledger {
        Ledger::in_memory(LedgerConfig::default())
    }

    async fn open(ledger: &Ledger, holder: &str, kind: &str, initial: Decimal) -> AccountNumber {
        let handle = ledger
            .create_account(holder, kind, initial, AccountOptions::default())
            .await
            .unwrap();
        let number = handle.lock().await.number().clone();
        number
    }

    #[tokio::test]
    async fn test_bank_identity() {
        let ledger = ledger();
        assert_eq!(ledger.name(), "Axizulo African Bank");
        assert_eq!(ledger.currency(), "ZAR");
        assert_eq!(ledger.currency_symbol(), "R");
    }

    #[tokio::test]
    async fn test_create_account() {
        let ledger = ledger();
        let handle = ledger
            .create_account("  Test User ", "savings", dec!(1000.0), AccountOptions::default())
            .await
            .unwrap();

        let account = handle.lock().await;
        assert_eq!(account.holder(), "Test User");
        assert_eq!(account.balance(), Balance::new(dec!(1000.0)));
        assert_eq!(account.interest_rate(), Some(dec!(2.5)));
        assert!(account.is_active());
        assert_eq!(account.history_len(), 1);
        assert_eq!(ledger.account_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_account_uses_options() {
        let ledger = ledger();
        let handle = ledger
            .create_account(
                "Bob",
                "CURRENT",
                dec!(100.0),
                AccountOptions {
                    overdraft_limit: Some(dec!(500.0)),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(handle.lock().await.overdraft_limit(), Some(dec!(500.0)));
    }

    #[tokio::test]
    async fn test_create_account_validation() {
        let ledger = ledger();
        let options = AccountOptions::default();

        let result = ledger.create_account("   ", "savings", dec!(0), options).await;
        assert!(matches!(result, Err(LedgerError::EmptyHolderName)));

        let result = ledger.create_account("Al", "savings", dec!(-1), options).await;
        assert!(matches!(result, Err(LedgerError::NegativeInitialDeposit)));

        let result = ledger.create_account("Al", "checking", dec!(0), options).await;
        assert!(matches!(result, Err(LedgerError::UnknownAccountType(_))));

        assert_eq!(ledger.account_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_account_rejects_negative_options() {
        let ledger = ledger();

        let result = ledger
            .create_account(
                "Bob",
                "current",
                dec!(50),
                AccountOptions {
                    overdraft_limit: Some(dec!(-100)),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(
            result,
            Err(LedgerError::NegativeAccountOption("overdraft_limit"))
        ));

        let result = ledger
            .create_account(
                "Alice",
                "savings",
                dec!(50),
                AccountOptions {
                    interest_rate: Some(dec!(-2.5)),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(
            result,
            Err(LedgerError::NegativeAccountOption("interest_rate"))
        ));

        assert_eq!(ledger.account_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_zero_overdraft_limit_behaves_like_a_floor() {
        let ledger = ledger();
        let handle = ledger
            .create_account(
                "Bob",
                "current",
                dec!(50),
                AccountOptions {
                    overdraft_limit: Some(Decimal::ZERO),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let bob = handle.lock().await.number().clone();

        assert_eq!(
            ledger.withdraw(&bob, dec!(50.01), None).await,
            Err(LedgerError::InsufficientFunds {
                available: dec!(50)
            })
        );
        assert_eq!(ledger.withdraw(&bob, dec!(50), None).await.unwrap(), Balance::ZERO);
    }

    #[tokio::test]
    async fn test_unknown_number_is_not_found() {
        let ledger = ledger();
        let missing = AccountNumber::new("NOPE0000");

        assert!(ledger.get_account(&missing).await.unwrap().is_none());
        assert!(matches!(
            ledger.balance(&missing).await,
            Err(LedgerError::NotFound(_))
        ));
        assert!(matches!(
            ledger.deposit(&missing, dec!(1), None).await,
            Err(LedgerError::NotFound(_))
        ));
        assert!(matches!(
            ledger.close_account(&missing).await,
            Err(LedgerError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_lookup_is_case_insensitive() {
        let ledger = ledger();
        let number = open(&ledger, "Alice", "savings", dec!(10)).await;
        let lower = AccountNumber::new(number.as_str().to_lowercase());
        assert_eq!(ledger.balance(&lower).await.unwrap(), Balance::new(dec!(10)));
    }

    #[tokio::test]
    async fn test_deposit_and_withdraw_by_number() {
        let ledger = ledger();
        let number = open(&ledger, "Alice", "savings", dec!(100)).await;

        let balance = ledger.deposit(&number, dec!(50), Some("Gift")).await.unwrap();
        assert_eq!(balance, Balance::new(dec!(150)));
        let balance = ledger.withdraw(&number, dec!(20), None).await.unwrap();
        assert_eq!(balance, Balance::new(dec!(130)));

        let history = ledger.history(&number).await.unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[1].description(), "Gift");
        assert_eq!(history[2].description(), DEFAULT_WITHDRAWAL_DESCRIPTION);
    }

    #[tokio::test]
    async fn test_close_account() {
        let ledger = ledger();
        let number = open(&ledger, "Alice", "savings", dec!(25)).await;

        assert_eq!(
            ledger.close_account(&number).await,
            Err(LedgerError::NonZeroBalance { balance: dec!(25) })
        );

        ledger.withdraw(&number, dec!(25), None).await.unwrap();
        ledger.close_account(&number).await.unwrap();

        let info = ledger.account_info(&number).await.unwrap();
        assert!(!info.is_active);
        assert!(matches!(
            ledger.deposit(&number, dec!(1), None).await,
            Err(LedgerError::InactiveAccount(_))
        ));
    }

    #[tokio::test]
    async fn test_close_overdrawn_account_fails() {
        let ledger = ledger();
        let number = open(&ledger, "Bob", "current", dec!(0)).await;
        ledger.withdraw(&number, dec!(10), None).await.unwrap();

        assert_eq!(
            ledger.close_account(&number).await,
            Err(LedgerError::NonZeroBalance { balance: dec!(-10) })
        );
    }

    #[tokio::test]
    async fn test_transfer_funds() {
        let ledger = ledger();
        let alice = open(&ledger, "Alice", "savings", dec!(1000)).await;
        let bob = open(&ledger, "Bob", "current", dec!(100)).await;

        ledger.transfer_funds(&alice, &bob, dec!(250)).await.unwrap();

        assert_eq!(ledger.balance(&alice).await.unwrap(), Balance::new(dec!(750)));
        assert_eq!(ledger.balance(&bob).await.unwrap(), Balance::new(dec!(350)));

        let sent = ledger.history(&alice).await.unwrap().pop().unwrap();
        assert_eq!(sent.r#type(), TransactionType::Withdrawal);
        assert_eq!(sent.description(), format!("Transfer to {bob}"));

        let received = ledger.history(&bob).await.unwrap().pop().unwrap();
        assert_eq!(received.r#type(), TransactionType::Deposit);
        assert_eq!(received.description(), format!("Transfer from {alice}"));
    }

    #[tokio::test]
    async fn test_transfer_validation_order() {
        let ledger = ledger();
        let alice = open(&ledger, "Alice", "savings", dec!(100)).await;
        let bob = open(&ledger, "Bob", "savings", dec!(0)).await;
        let missing = AccountNumber::new("NOPE0000");

        assert!(matches!(
            ledger.transfer_funds(&alice, &missing, dec!(-1)).await,
            Err(LedgerError::NotFound(_))
        ));
        assert!(matches!(
            ledger.transfer_funds(&alice, &alice, dec!(1)).await,
            Err(LedgerError::SelfTransfer(_))
        ));
        assert_eq!(
            ledger.transfer_funds(&alice, &bob, dec!(0)).await,
            Err(LedgerError::InvalidAmount)
        );

        ledger.close_account(&bob).await.unwrap();
        assert_eq!(
            ledger.transfer_funds(&alice, &bob, dec!(-1)).await,
            Err(LedgerError::InactiveAccount(bob.to_string()))
        );
    }

    #[tokio::test]
    async fn test_transfer_insufficient_funds_changes_nothing() {
        let ledger = ledger();
        let alice = open(&ledger, "Alice", "savings", dec!(100)).await;
        let bob = open(&ledger, "Bob", "savings", dec!(0)).await;

        assert_eq!(
            ledger.transfer_funds(&alice, &bob, dec!(100.01)).await,
            Err(LedgerError::InsufficientFunds {
                available: dec!(100)
            })
        );
        assert_eq!(ledger.balance(&alice).await.unwrap(), Balance::new(dec!(100)));
        assert_eq!(ledger.history(&alice).await.unwrap().len(), 1);
        assert!(ledger.history(&bob).await.unwrap().is_empty());
    }

    #[test]
    fn test_settle_transfer_rolls_back_when_credit_fails() {
        let mut source = Account::open(
            AccountNumber::new("SRC00001"),
            "Alice",
            dec!(100),
            AccountKind::Savings {
                interest_rate: dec!(2.5),
            },
        );
        let mut destination = Account::open(
            AccountNumber::new("DST00001"),
            "Bob",
            dec!(0),
            AccountKind::Savings {
                interest_rate: dec!(2.5),
            },
        );
        destination.deactivate();

        let result = settle_transfer(&mut source, &mut destination, dec!(40));

        assert_eq!(result, Err(LedgerError::InactiveAccount("DST00001".to_string())));
        assert_eq!(source.balance(), Balance::new(dec!(100)));
        assert!(destination.history().is_empty());

        let history = source.history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[1].r#type(), TransactionType::Withdrawal);
        assert_eq!(history[1].description(), "Transfer to DST00001");
        assert_eq!(history[2].r#type(), TransactionType::Deposit);
        assert_eq!(history[2].description(), ROLLBACK_DESCRIPTION);
        assert_eq!(history[2].amount(), dec!(40));
    }

    #[tokio::test]
    async fn test_overflowing_operations_are_rejected() {
        let ledger = ledger();
        let rich = open(&ledger, "Rich", "savings", Decimal::MAX).await;

        assert_eq!(
            ledger.deposit(&rich, Decimal::ONE, None).await,
            Err(LedgerError::AmountOverflow)
        );
        assert_eq!(ledger.apply_interest(&rich).await, Err(LedgerError::AmountOverflow));
        assert_eq!(ledger.balance(&rich).await.unwrap(), Balance::new(Decimal::MAX));
        assert_eq!(ledger.history(&rich).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_transfer_into_full_account_is_rolled_back() {
        let ledger = ledger();
        let alice = open(&ledger, "Alice", "savings", dec!(100)).await;
        let rich = open(&ledger, "Rich", "savings", Decimal::MAX).await;

        assert_eq!(
            ledger.transfer_funds(&alice, &rich, dec!(40)).await,
            Err(LedgerError::AmountOverflow)
        );
        assert_eq!(ledger.balance(&alice).await.unwrap(), Balance::new(dec!(100)));
        assert_eq!(ledger.balance(&rich).await.unwrap(), Balance::new(Decimal::MAX));

        let history = ledger.history(&alice).await.unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[2].description(), ROLLBACK_DESCRIPTION);
        assert_eq!(ledger.history(&rich).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_total_balance_out_of_range_is_an_error() {
        let ledger = ledger();
        open(&ledger, "First", "savings", Decimal::MAX).await;
        open(&ledger, "Second", "savings", Decimal::MAX).await;

        assert_eq!(ledger.total_balance().await, Err(LedgerError::AmountOverflow));
    }

    #[tokio::test]
    async fn test_monthly_interest_skips_accounts_it_cannot_credit() {
        let ledger = ledger();
        let saver = open(&ledger, "Saver", "savings", dec!(1200)).await;
        let rich = open(&ledger, "Rich", "savings", Decimal::MAX).await;

        let total = ledger.apply_monthly_interest().await.unwrap();

        assert_eq!(total, dec!(2.50));
        assert_eq!(ledger.balance(&saver).await.unwrap(), Balance::new(dec!(1202.50)));
        assert_eq!(ledger.balance(&rich).await.unwrap(), Balance::new(Decimal::MAX));
    }

    #[tokio::test]
    async fn test_total_balance_and_listing() {
        let ledger = ledger();
        open(&ledger, "Alice", "savings", dec!(1000)).await;
        let bob = open(&ledger, "Bob", "current", dec!(0)).await;
        ledger.withdraw(&bob, dec!(300), None).await.unwrap();

        assert_eq!(ledger.total_balance().await.unwrap(), Balance::new(dec!(700)));

        let accounts = ledger.all_accounts().await.unwrap();
        assert_eq!(accounts.len(), 2);
        assert!(accounts.iter().any(|a| a.account_holder == "Bob"
            && a.balance == dec!(-300)
            && a.account_type == "CurrentAccount"));
    }

    #[tokio::test]
    async fn test_apply_monthly_interest_skips_current_and_inactive() {
        let ledger = ledger();
        let saver = open(&ledger, "Saver", "savings", dec!(1200)).await;
        let spender = open(&ledger, "Spender", "current", dec!(1200)).await;
        let closed = open(&ledger, "Closed", "savings", dec!(0)).await;
        ledger.close_account(&closed).await.unwrap();

        let total = ledger.apply_monthly_interest().await.unwrap();

        assert_eq!(total, dec!(2.50));
        assert_eq!(ledger.balance(&saver).await.unwrap(), Balance::new(dec!(1202.50)));
        assert_eq!(ledger.balance(&spender).await.unwrap(), Balance::new(dec!(1200)));
    }

    #[tokio::test]
    async fn test_apply_interest_by_number() {
        let ledger = ledger();
        let saver = open(&ledger, "Saver", "savings", dec!(1200)).await;
        let spender = open(&ledger, "Spender", "current", dec!(1200)).await;

        assert_eq!(ledger.apply_interest(&saver).await.unwrap(), Some(dec!(2.50)));
        assert_eq!(ledger.apply_interest(&spender).await.unwrap(), None);
    }
}
