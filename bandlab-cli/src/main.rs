//! Bandlab CLI: fetch prices, run the Bollinger band strategy, report.
//!
//! Usage:
//!   bandlab SPY 2023-01-01 2024-01-01
//!   bandlab SPY 2023-01-01 2024-01-01 -n 10 -k 1.5 --units 25
//!   bandlab SPY 2023-01-01 2024-01-01 --csv prices.csv --output results

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use bandlab_core::data::{CsvProvider, PriceProvider, YahooProvider};
use bandlab_core::Strategy as _;
use bandlab_core::{BollingerStrategy, StrategyEngine, StrategyReport};

#[derive(Parser)]
#[command(
    name = "bandlab",
    about = "Bollinger band strategy runner over daily prices"
)]
struct Cli {
    /// Ticker symbol (e.g., SPY).
    symbol: String,

    /// Start date (YYYY-MM-DD), inclusive.
    start: String,

    /// End date (YYYY-MM-DD), inclusive.
    end: String,

    /// Trailing window length.
    #[arg(short = 'n', long = "window", default_value_t = 20)]
    window: usize,

    /// Band width in standard deviations.
    #[arg(short = 'k', long = "width", default_value_t = 0.75)]
    width: f64,

    /// Trade size per crossing.
    #[arg(long, default_value_t = 10.0)]
    units: f64,

    /// Read prices from a date,price CSV file instead of Yahoo Finance.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Directory to write the full report as JSON.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let start = parse_date(&cli.start).context("invalid start date")?;
    let end = parse_date(&cli.end).context("invalid end date")?;
    if end < start {
        bail!("end date {end} is before start date {start}");
    }

    let provider: Box<dyn PriceProvider> = match &cli.csv {
        Some(path) => Box::new(CsvProvider::new(path)),
        None => Box::new(YahooProvider::new()),
    };

    println!(
        "Fetching {} from {start} to {end} via {}...",
        cli.symbol,
        provider.name()
    );
    let series = provider
        .fetch(&cli.symbol, start, end)
        .with_context(|| format!("failed to fetch prices for {}", cli.symbol))?;
    println!("Fetched {} price points", series.len());

    let strategy = BollingerStrategy::new(cli.window, cli.width, cli.units)
        .context("invalid strategy configuration")?;

    let mut engine = StrategyEngine::new(series);
    engine.register("bollinger", Box::new(strategy));
    engine.start();

    let report = engine
        .strategy("bollinger")
        .expect("strategy was registered")
        .report();

    print_summary(&cli, &report);

    if let Some(dir) = &cli.output {
        let path = save_report(dir, &cli.symbol, &report)?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("expected YYYY-MM-DD, got '{s}'"))
}

fn print_summary(cli: &Cli, report: &StrategyReport) {
    let warming = report
        .upper_bands
        .iter()
        .take_while(|b| b.is_none())
        .count();

    println!();
    println!(
        "Strategy {}: n={}, k={}, units={}",
        report.name, cli.window, cli.width, cli.units
    );
    println!(
        "Ticks: {} ({} warming, {} active)",
        report.len(),
        warming,
        report.len() - warming
    );

    if report.transactions.is_empty() {
        println!("No band crossings.");
        return;
    }

    println!("Transactions:");
    for t in &report.transactions {
        let side = if t.is_buy() { "BUY " } else { "SELL" };
        println!(
            "  {}  {}  {:>8.2} units @ {:>10.4}  value {:>12.2}",
            t.date,
            side,
            t.units.abs(),
            t.price,
            t.value()
        );
    }

    if let Some(&(date, position)) = report.position_series().last() {
        println!("Final position: {position} units (as of {date})");
    }
    if let Some(&(date, pnl)) = report.pnl_series().last() {
        println!("Cumulative P/L: {pnl:.2} (as of {date})");
    }
}

fn save_report(dir: &PathBuf, symbol: &str, report: &StrategyReport) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let path = dir.join(format!("{}_{}.json", symbol.to_lowercase(), report.name));
    let json = serde_json::to_string_pretty(report)?;
    fs::write(&path, json)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    Ok(path)
}
