use bank_ledger::application::ledger::Ledger;
use bank_ledger::config::LedgerConfig;
use bank_ledger::interfaces::console::Console;
use bank_ledger::telemetry;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON configuration file. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Bank name shown in the menu and reports
    #[arg(long)]
    bank_name: Option<String>,

    /// Currency code shown in reports
    #[arg(long)]
    currency: Option<String>,

    /// Symbol prefixed to every displayed amount
    #[arg(long)]
    currency_symbol: Option<String>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn ledger_config(&self) -> Result<LedgerConfig> {
        let mut config = match &self.config {
            Some(path) => LedgerConfig::from_json_file(path).into_diagnostic()?,
            None => LedgerConfig::default(),
        };
        if let Some(name) = &self.bank_name {
            config.bank_name = name.clone();
        }
        if let Some(currency) = &self.currency {
            config.currency = currency.clone();
        }
        if let Some(symbol) = &self.currency_symbol {
            config.currency_symbol = symbol.clone();
        }
        config.validate().into_diagnostic()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(&cli.log_level);

    let config = cli.ledger_config()?;
    info!(bank = %config.bank_name, currency = %config.currency, "starting ledger");

    // The ledger lives for the whole session; accounts vanish on exit.
    let ledger = Ledger::in_memory(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(&ledger, stdin.lock(), stdout.lock());
    console.run().await.into_diagnostic()?;

    Ok(())
}
