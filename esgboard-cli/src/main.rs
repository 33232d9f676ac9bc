//! `esgboard`: ESG risk scores from the command line.

mod connector;
mod render;

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use esgboard::{BatchReport, Dashboard, Lookup, Notice, ScoreCard, Ticker};
use esgboard_core::{DEFAULT_BATCH_LIMIT, DEFAULT_TICKER_COLUMN};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use crate::connector::{USE_MOCK_ENV, get_connector};

#[derive(Debug, Parser)]
#[command(
    name = "esgboard",
    version,
    about = "Environmental, Social and Governance risk scores for listed companies"
)]
struct Cli {
    /// Serve data from offline fixtures instead of Yahoo Finance.
    #[arg(long, global = true)]
    mock: bool,

    /// Per-provider timeout in seconds.
    #[arg(long, global = true, default_value_t = 10)]
    timeout_secs: u64,

    /// Print JSON instead of text tables.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the landing page.
    Welcome,
    /// Look up the ESG scores of one ticker.
    View {
        /// Ticker symbol, e.g. AAPL.
        ticker: Ticker,
    },
    /// Compare category scores of two tickers.
    Compare {
        /// First ticker.
        first: Ticker,
        /// Second ticker.
        second: Ticker,
    },
    /// Look up every ticker listed in a CSV file (`-` reads stdin).
    Upload {
        /// CSV file with a header row.
        file: PathBuf,
        /// Column holding the ticker symbols.
        #[arg(long, default_value = DEFAULT_TICKER_COLUMN)]
        column: String,
        /// Maximum number of rows to read.
        #[arg(long, default_value_t = DEFAULT_BATCH_LIMIT)]
        limit: usize,
    },
    /// Look up a list of tickers given on the command line.
    Batch {
        /// Ticker symbols.
        #[arg(required = true)]
        tickers: Vec<Ticker>,
        /// Maximum number of tickers to look up.
        #[arg(long, default_value_t = DEFAULT_BATCH_LIMIT)]
        limit: usize,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn print_notices<'a>(notices: impl IntoIterator<Item = &'a Notice>) {
    for n in notices {
        eprintln!("{n}");
    }
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_report(report: &BatchReport, as_json: bool) -> Result<()> {
    print_notices(&report.notices);
    if as_json {
        return print_json(report);
    }
    if !report.rows.is_empty() {
        print!("{}", render::table(&report.table()));
    }
    if report.dropped > 0 {
        eprintln!(
            "note: {} entries past the batch limit were ignored",
            report.dropped
        );
    }
    Ok(())
}

async fn view(dash: &Dashboard, ticker: &Ticker, as_json: bool) -> Result<ExitCode> {
    let row = match dash.lookup(ticker).await {
        Lookup::Found(row) => row,
        other => {
            print_notices(other.notice().as_ref());
            return Ok(ExitCode::FAILURE);
        }
    };
    let card = ScoreCard::from_row(&row);
    print_notices(&card.notices);
    if as_json {
        print_json(&json!({ "row": row, "score_card": card }))?;
    } else {
        print!("{}", render::tiles(&card));
        println!();
        print!("{}", render::row(&row));
    }
    Ok(ExitCode::SUCCESS)
}

async fn compare(dash: &Dashboard, a: &Ticker, b: &Ticker, as_json: bool) -> Result<ExitCode> {
    let cmp = match dash.compare(a, b).await {
        Ok(cmp) => cmp,
        Err(e) => {
            eprintln!("{}", Notice::error(format!("Error comparing {a} and {b}: {e}")));
            return Ok(ExitCode::FAILURE);
        }
    };
    if as_json {
        print_json(&json!({ "rows": cmp.rows, "table": cmp.table }))?;
    } else {
        print!("{}", render::comparison(&cmp.table));
    }
    Ok(ExitCode::SUCCESS)
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let command = cli.command.unwrap_or(Command::Welcome);
    if matches!(command, Command::Welcome) {
        print!("{}", render::welcome());
        return Ok(ExitCode::SUCCESS);
    }

    let use_mock = cli.mock || std::env::var_os(USE_MOCK_ENV).is_some();
    let timeout = Duration::from_secs(cli.timeout_secs);
    let builder = Dashboard::builder()
        .with_connector(get_connector(use_mock, timeout)?)
        .provider_timeout(timeout);

    match command {
        Command::Welcome => Ok(ExitCode::SUCCESS),
        Command::View { ticker } => view(&builder.build()?, &ticker, cli.json).await,
        Command::Compare { first, second } => {
            compare(&builder.build()?, &first, &second, cli.json).await
        }
        Command::Upload {
            file,
            column,
            limit,
        } => {
            let dash = builder.ticker_column(column).batch_limit(limit).build()?;
            let reader: Box<dyn Read> = if file.as_os_str() == "-" {
                Box::new(io::stdin().lock())
            } else {
                Box::new(
                    File::open(&file)
                        .with_context(|| format!("cannot open {}", file.display()))?,
                )
            };
            let report = dash.upload(reader).await?;
            print_report(&report, cli.json)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Batch { tickers, limit } => {
            let dash = builder.batch_limit(limit).build()?;
            let report = dash.aggregate(tickers).await;
            print_report(&report, cli.json)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    init_tracing();
    run(Cli::parse()).await
}
