//! # toporders
//!
//! A CLI tool that prints the most profitable orders from a CSV of sales orders.
//!
//! ## Overview
//!
//! toporders is built on top of toporderslib. It loads the order table, ranks
//! orders by `TotalProfit` (highest first, file order among ties) and prints
//! the top three with their `OrderID`, `CustomerID`, `TotalProfit` and
//! `OrderDate`.
//!
//! ## Usage
//!
//! ```bash
//! # Report from data/Order.csv in the current directory
//! toporders
//!
//! # Report from another file
//! toporders exports/orders-2024.csv
//!
//! # Show the top 10 instead of the top 3
//! toporders --top 10
//!
//! # Output as JSON
//! toporders --output json
//! ```
//!
//! Diagnostics go to stderr and are controlled with `RUST_LOG`
//! (e.g. `RUST_LOG=debug toporders`).

use std::process::ExitCode;

use anyhow::Context;
use clap::{value_parser, Arg, ArgMatches, Command};
use console::style;
use toporderslib::{top_orders, RankOptions, TopOrdersError, DEFAULT_LIMIT};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

mod render;

use render::{render_report, OutputMode};

/// Input file used when no path is given
const DEFAULT_PATH: &str = "data/Order.csv";

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("toporders")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print the most profitable orders from a CSV of sales orders")
        .arg(
            Arg::new("path")
                .help("CSV file with OrderID, CustomerID, TotalProfit and OrderDate columns")
                .default_value(DEFAULT_PATH),
        )
        .arg(
            Arg::new("top")
                .short('n')
                .long("top")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help(format!(
                    "Number of orders to report [default: {}]",
                    DEFAULT_LIMIT
                )),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["auto", "term", "text", "json"])
                .default_value("auto")
                .help("Output format"),
        )
}

/// Install the stderr log subscriber; RUST_LOG overrides the default level
fn init_logging() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .with_ansi(console::colors_enabled_stderr())
        .init();
}

/// Load, rank and render the report
fn report_handler(matches: &ArgMatches) -> anyhow::Result<String> {
    let path = matches
        .get_one::<String>("path")
        .map(|s| s.as_str())
        .unwrap_or(DEFAULT_PATH);
    let limit = matches
        .get_one::<usize>("top")
        .copied()
        .unwrap_or(DEFAULT_LIMIT);
    let mode = matches
        .get_one::<String>("output")
        .and_then(|s| OutputMode::from_arg(s))
        .unwrap_or_default();

    debug!(path, limit, ?mode, "building report");

    let report = top_orders(path, RankOptions::new().limit(limit))
        .with_context(|| format!("failed to load orders from '{}'", path))?;

    render_report(&report, mode)
}

fn main() -> ExitCode {
    init_logging();
    let matches = build_command().get_matches();

    match report_handler(&matches) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            if let Some(err) = e.downcast_ref::<TopOrdersError>() {
                debug!(kind = ?err.kind(), "report failed");
            }
            eprintln!("{} {:#}", style("Error:").red().bold().for_stderr(), e);
            ExitCode::FAILURE
        }
    }
}
