use std::{path::PathBuf, sync::Arc};

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ha_screener::{
    config::ScreenerConfig,
    policy::FreshnessPolicy,
    report,
    scan::{DEFAULT_CHART_TAIL, Screener, chart_data},
    symbols,
};
use market_data::{models::interval::Interval, providers::yahoo::YahooProvider};

#[derive(Parser)]
#[command(version, about = "Heikin-Ashi reversal screener")]
struct Cli {
    /// Path to screener.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Scan a symbol list for red-to-green Heikin-Ashi reversals
    Scan {
        /// Inline symbol blob, commas and/or whitespace separated
        #[arg(long)]
        symbols: Option<String>,

        /// Text file with symbols, same format as --symbols
        #[arg(long, value_name = "FILE")]
        symbols_file: Option<PathBuf>,

        /// Bar interval: daily or weekly
        #[arg(long)]
        timeframe: Option<Interval>,

        /// Candle selection: closed-only or live
        #[arg(long)]
        policy: Option<FreshnessPolicy>,

        /// Also print the trailing dates each symbol's selection saw
        #[arg(long)]
        debug_dates: bool,
    },

    /// Print the trailing Heikin-Ashi candles for one symbol
    Chart {
        symbol: String,

        /// Bar interval: daily or weekly
        #[arg(long)]
        timeframe: Option<Interval>,

        /// Number of trailing candles (20-50)
        #[arg(long)]
        tail: Option<usize>,
    },
}

const DEFAULT_CONFIG_PATH: &str = "screener.toml";

fn load_config(cli_path: Option<&PathBuf>) -> Result<ScreenerConfig> {
    match cli_path {
        Some(path) => ScreenerConfig::load(path),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_PATH);
            if default.exists() {
                ScreenerConfig::load(&default)
            } else {
                Ok(ScreenerConfig::default())
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_level(true)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    let provider = Arc::new(YahooProvider::new()?);
    let screener = Screener::new(provider);

    match cli.cmd {
        Cmd::Scan {
            symbols,
            symbols_file,
            timeframe,
            policy,
            debug_dates,
        } => {
            let blob = match symbols_file {
                Some(path) => Some(std::fs::read_to_string(path)?),
                None => symbols,
            };
            let list = match blob {
                Some(text) => symbols::symbols_or_default(&text),
                None => config
                    .symbols
                    .clone()
                    .unwrap_or_else(symbols::default_symbols),
            };
            let interval = timeframe.or(config.timeframe).unwrap_or(Interval::Daily);
            let policy = policy.or(config.policy).unwrap_or_default();

            let today = Utc::now().date_naive();
            let (signals, monitor) = screener
                .scan_with_debug(&list, interval, policy, today)
                .await;

            if signals.is_empty() {
                println!(
                    "No reversal signals found across {} symbol(s) ({interval}, {policy}).",
                    list.len()
                );
            } else {
                println!("{} reversal signal(s) found:", signals.len());
                println!("{}", report::signal_table(&signals));
            }

            if debug_dates {
                println!();
                println!("Trailing dates per symbol:");
                println!("{}", report::monitor_table(&monitor));
            }
        }

        Cmd::Chart {
            symbol,
            timeframe,
            tail,
        } => {
            let interval = timeframe.or(config.timeframe).unwrap_or(Interval::Daily);
            let tail = tail.or(config.chart_tail).unwrap_or(DEFAULT_CHART_TAIL);
            let symbol = symbol.trim().to_uppercase();

            match screener.ha_series(&symbol, interval).await {
                Some(series) => {
                    println!("{symbol} ({interval}), Heikin-Ashi:");
                    println!("{}", report::candle_table(chart_data(&series, tail)));
                }
                None => println!("No data for {symbol} ({interval})."),
            }
        }
    }

    Ok(())
}
