//! `date-groups` CLI — expand, count, label and format poll date options.
//!
//! ## Usage
//!
//! ```sh
//! # Every Fri-Sun in February as JSON groups
//! date-groups generate --pattern weekday-range:5-0 --start 2025-02-01 --end 2025-02-28
//!
//! # Patterns can also be given in their JSON form
//! date-groups generate --pattern '{"type":"weekend"}' --start 2025-01-18 --end 2025-01-26
//!
//! # How many options a range would produce, without generating them
//! date-groups count --pattern custom:5 --start 2025-01-01 --end 2025-01-31
//!
//! # Label of the 3rd option
//! date-groups label --pattern two-weeks --index 3
//!
//! # Compact range text
//! date-groups format 2024-12-28 2025-01-04
//!
//! # Rebuild groups from stored poll dates (stdin or file)
//! echo '[["2025-01-18","2025-01-19"]]' | date-groups restore --pattern weekend
//! ```
//!
//! Logs go to stderr; set `RUST_LOG` or pass `--verbose` to see them.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use date_groups::{DatePattern, DateRange, RangeLimits, StoredDates};
use serde::Serialize;
use std::io::{self, IsTerminal, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "date-groups",
    version,
    about = "Expand date ranges and recurrence patterns into poll voting options"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the voting options for a pattern over a date range
    Generate {
        #[command(flatten)]
        query: RangeQuery,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Count options and leftover days without generating them
    Count {
        #[command(flatten)]
        query: RangeQuery,
    },
    /// Print the label of the option at a 1-based index
    Label {
        /// Pattern shorthand (e.g. "weekend", "custom:5") or JSON object
        #[arg(short, long)]
        pattern: DatePattern,
        /// 1-based option index
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        index: u64,
    },
    /// Format a run of YYYY-MM-DD dates as compact range text
    Format {
        /// Dates in order; only the first and last are used
        dates: Vec<String>,
    },
    /// Rebuild groups from stored poll dates
    Restore {
        /// Pattern the poll was created with
        #[arg(short, long)]
        pattern: DatePattern,
        /// Stored dates JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

#[derive(Args)]
struct RangeQuery {
    /// Pattern shorthand (e.g. "weekend", "weekday-range:5-0") or JSON object
    #[arg(short, long)]
    pattern: DatePattern,
    /// First day of the range (YYYY-MM-DD)
    #[arg(short, long)]
    start: String,
    /// Last day of the range, inclusive (YYYY-MM-DD)
    #[arg(short, long)]
    end: String,
    /// Widest range accepted, in days
    #[arg(long, env = "DATE_GROUPS_MAX_RANGE_DAYS")]
    max_range_days: Option<u32>,
}

impl RangeQuery {
    /// Parse and bound-check the range.
    fn range(&self) -> Result<DateRange> {
        let range = DateRange::parse(&self.start, &self.end).context("Invalid date range")?;
        let limits = match self.max_range_days {
            Some(max_days) => RangeLimits { max_days },
            None => RangeLimits::default(),
        };
        range
            .check_limits(&limits)
            .context("Date range rejected")?;
        Ok(range)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CountSummary {
    groups: usize,
    remaining_days: u32,
    pattern_days: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate { query, output } => {
            let range = query.range()?;
            debug!(pattern = %query.pattern, "generating");
            let groups = date_groups::generate_date_groups(&query.pattern, &range);
            let json = serde_json::to_string_pretty(&groups)?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Count { query } => {
            let range = query.range()?;
            let summary = CountSummary {
                groups: date_groups::count_possible_groups(&query.pattern, &range),
                remaining_days: date_groups::remaining_days(&query.pattern, &range),
                pattern_days: date_groups::pattern_days(&query.pattern),
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Label { pattern, index } => {
            let index = usize::try_from(index).context("Index too large")?;
            println!("{}", date_groups::group_label(&pattern, index));
        }
        Commands::Format { dates } => {
            let text = date_groups::format_iso_group_range(&dates)
                .context("Failed to format date range")?;
            println!("{}", text);
        }
        Commands::Restore { pattern, input } => {
            let json = read_input(input.as_deref())?;
            let stored: StoredDates =
                serde_json::from_str(&json).context("Invalid stored dates JSON")?;
            let groups = date_groups::restore_groups(&pattern, &stored)
                .context("Failed to restore groups")?;
            println!("{}", serde_json::to_string_pretty(&groups)?);
        }
    }

    Ok(())
}

/// Install a stderr fmt subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
