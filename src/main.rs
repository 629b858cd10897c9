use clap::Parser;
use comanda::application::engine::{EngineConfig, OrderEngine};
use comanda::application::payment::PaymentSimulator;
use comanda::application::session::SessionRunner;
use comanda::domain::money::Money;
use comanda::domain::ports::{DynMenuStore, DynOrderStore, MenuStore};
use comanda::infrastructure::in_memory::{InMemoryMenuStore, InMemoryOrderStore};
use comanda::interfaces::csv::menu_reader::MenuReader;
use comanda::interfaces::csv::report_writer::ReportWriter;
use comanda::interfaces::csv::session_reader::SessionReader;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Menu catalog CSV file
    menu: PathBuf,

    /// Session script CSV file
    session: PathBuf,

    /// Cancellation window before the kitchen locks an order, in milliseconds
    #[arg(long)]
    confirm_delay_ms: Option<u64>,

    /// Flat surcharge per chosen addition
    #[arg(long)]
    surcharge: Option<Decimal>,

    /// Service fee rate applied at bill time (e.g. 0.10)
    #[arg(long)]
    service_fee: Option<Decimal>,

    /// First order id handed out
    #[arg(long)]
    first_order_id: Option<u32>,

    /// Payment settlement delay, in milliseconds
    #[arg(long)]
    settle_delay_ms: Option<u64>,

    /// Emit the report as JSON instead of CSV
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn engine_config(&self) -> EngineConfig {
        let mut config = EngineConfig::default();
        if let Some(ms) = self.confirm_delay_ms {
            config.confirmation_delay = Duration::from_millis(ms);
        }
        if let Some(surcharge) = self.surcharge {
            config.surcharge_per_addition = Money::new(surcharge);
        }
        if let Some(rate) = self.service_fee {
            config.service_fee_rate = rate;
        }
        if let Some(id) = self.first_order_id {
            config.first_order_id = id;
        }
        config
    }
}

/// Logs go to stderr so the report owns stdout.
fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();

    // Load the catalog
    let menu_store = Arc::new(InMemoryMenuStore::new());
    let menu_file = File::open(&cli.menu).into_diagnostic()?;
    for item_result in MenuReader::new(menu_file).items() {
        match item_result {
            Ok(item) => menu_store.upsert(item).await.into_diagnostic()?,
            Err(e) => eprintln!("Error reading menu item: {}", e),
        }
    }

    let orders: DynOrderStore = Arc::new(InMemoryOrderStore::new());
    let engine = OrderEngine::new(orders, cli.engine_config());
    let payments = match cli.settle_delay_ms {
        Some(ms) => PaymentSimulator::new(Duration::from_millis(ms)),
        None => PaymentSimulator::default(),
    };
    let mut runner = SessionRunner::new(
        engine.clone(),
        menu_store.clone() as DynMenuStore,
        payments,
    );

    // Replay the session; per-record failures are reported and skipped.
    let session_file = File::open(&cli.session).into_diagnostic()?;
    for record_result in SessionReader::new(session_file).records() {
        match record_result {
            Ok(record) => {
                if let Err(e) = runner.apply(record).await {
                    eprintln!("Error applying action: {}", e);
                }
            }
            Err(e) => eprintln!("Error reading session record: {}", e),
        }
    }

    // Collect final state from the engine
    let orders = engine.orders().await.into_diagnostic()?;
    let bill = engine.bill().await.into_diagnostic()?;

    let stdout = io::stdout();
    if cli.json {
        let report = serde_json::json!({
            "orders": orders,
            "bill": bill,
            "receipts": runner.receipts(),
        });
        serde_json::to_writer_pretty(stdout.lock(), &report).into_diagnostic()?;
        println!();
    } else {
        let mut writer = ReportWriter::new(stdout.lock());
        writer.write_orders(&orders).into_diagnostic()?;
        println!();
        writer.write_bill(&bill).into_diagnostic()?;
    }

    Ok(())
}
