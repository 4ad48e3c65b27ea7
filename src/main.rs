use std::io::{stderr, stdout};
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use csv::WriterBuilder;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use transfer_wizard::config::WizardConfig;
use transfer_wizard::rates::CsvRateSource;
use transfer_wizard::session::SessionRunner;
use transfer_wizard::storage::TransferStorage;
use transfer_wizard::validators::SystemClock;
use transfer_wizard::wizard::{TracingNotifier, WizardController};

#[derive(Serialize)]
struct TransferRow<'a> {
    transfer: u32,
    country: &'a str,
    amount_usd: Decimal,
    fee_usd: Decimal,
    rate: Option<Decimal>,
    received: Decimal,
    currency: &'a str,
    recipient: &'a str
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: transfer-wizard [session].csv [log_level:optional] [rates].csv:optional > [output].csv");
        eprintln!("Log levels: off, error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let path = &args[1];
    let log_level = args.get(2).map_or(LevelFilter::ERROR, |level| parse_log_level(level));

    setup_logging(log_level);

    let config = WizardConfig::load()?;
    let rates = Arc::new(config.rates_provider());

    match args.get(3) {
        Some(rates_path) => rates.refresh(&CsvRateSource::new(rates_path)).await,
        None => warn!("No rates file given, using fallback rates")
    }

    let storage = Arc::new(TransferStorage::new());
    let wizard = WizardController::from_config(&config, Arc::new(SystemClock), Arc::new(TracingNotifier), storage.clone());
    let mut runner = SessionRunner::new(wizard, rates);

    let timer = Instant::now();
    let report = runner.run(path).await?;
    let duration = timer.elapsed();

    info!("Replayed session in: {duration:?} ({} applied, {} refused)", report.applied, report.refused);

    write_results_to_stdout(&storage)?;

    Ok(())
}

/// Accepts any level name `tracing` understands, including `off`; anything else keeps errors only.
fn parse_log_level(level: &str) -> LevelFilter {
    level.parse::<LevelFilter>().unwrap_or_else(|_| {
        eprintln!("Unknown log level [{level}], logging errors only");
        LevelFilter::ERROR
    })
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the transfer CSV
    let wizard_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(wizard_log)
        .init();
}

fn write_results_to_stdout(storage: &TransferStorage) -> Result<()> {
    let mut output = WriterBuilder::new()
        .has_headers(false)
        .from_writer(stdout().lock());

    output.write_record(["transfer", "country", "amount_usd", "fee_usd", "rate", "received", "currency", "recipient"])?;

    for transfer in storage.all() {
        let summary = &transfer.summary;

        output.serialize(TransferRow {
            transfer: transfer.transfer_id,
            country: &summary.destination.code,
            amount_usd: summary.amount_usd,
            fee_usd: summary.fee_usd,
            rate: summary.exchange_rate,
            received: summary.received.unwrap_or(Decimal::ZERO),
            currency: summary.target_currency(),
            recipient: &summary.recipient_name
        })?;
    }

    output.flush()?;

    Ok(())
}
