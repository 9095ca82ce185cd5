// rrule-tool
// Command line front end for the recurrence engine

use std::path::PathBuf;

use anyhow::{Context, Result};
use calendar_recurrence::{EngineConfig, ParseMode, RecurrenceService};
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};

const DEFAULT_EXPAND_LIMIT: usize = 10;

#[derive(Parser)]
#[command(author, version, about)]
struct Opt {
    /// Reject malformed rule parts instead of skipping them
    #[arg(long, global = true)]
    strict: bool,
    /// Path to a TOML config file [default: per-user config file]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the rule in canonical form
    Normalize { rule: String },
    /// Print the structured rule as JSON
    Parse { rule: String },
    /// Print a human-readable description of the rule
    Describe {
        rule: String,
        /// Series start date (YYYY-MM-DD)
        #[arg(short, long)]
        start: Option<NaiveDate>,
    },
    /// Print occurrence start times of the series
    Expand {
        rule: String,
        /// Series start (YYYY-MM-DDTHH:MM:SS)
        #[arg(short, long)]
        start: NaiveDateTime,
        /// Maximum number of occurrences to print
        #[arg(short, long, default_value_t = DEFAULT_EXPAND_LIMIT)]
        limit: usize,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let opt = Opt::parse();
    let mut config = EngineConfig::load(opt.config.as_deref())?;
    if opt.strict {
        config.parse_mode = ParseMode::Strict;
    }

    let service = RecurrenceService::new(&config);

    match opt.command {
        Command::Normalize { rule } => {
            let parsed = service.parse(&rule).context("failed to parse rule")?;
            println!("{}", service.to_rule_string(&parsed));
        }
        Command::Parse { rule } => {
            let parsed = service.parse(&rule).context("failed to parse rule")?;
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }
        Command::Describe { rule, start } => {
            let parsed = service.parse(&rule).context("failed to parse rule")?;
            println!("{}", service.describe(&parsed, start));
        }
        Command::Expand { rule, start, limit } => {
            let parsed = service.parse(&rule).context("failed to parse rule")?;
            for occurrence in service.expand(&parsed, start, limit) {
                println!("{}", occurrence.format("%Y-%m-%dT%H:%M:%S"));
            }
        }
    }

    log::debug!("rrule-tool finished");
    Ok(())
}
