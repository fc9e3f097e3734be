//! `liturgy` - liturgical calendar on the command line.

mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use liturgy_engine::{
    compute_easter, holy_days_for_year, resolve_collect, resolve_season, resolve_today,
    season_spans, upcoming_holy_days, CollectStore, LiturgicalDay, MemoryCollectStore,
    DEFAULT_UPCOMING_LIMIT, MAX_YEAR, MIN_YEAR,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::render::{CalendarListing, CollectReport, EasterDate};

#[derive(Parser, Debug)]
#[command(name = "liturgy", version, about = "Anglican liturgical calendar")]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct GlobalOpts {
    /// IANA timezone whose calendar day counts as "today".
    #[arg(long, global = true, env = "LITURGY_TZ", default_value = "Africa/Nairobi")]
    timezone: String,

    /// Compute for this date (YYYY-MM-DD) instead of today.
    #[arg(long, global = true)]
    date: Option<String>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log debug output to stderr (overrides LITURGY_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the date of Easter Sunday for one or more years.
    Easter {
        #[arg(required = true, value_parser = year_parser())]
        years: Vec<i32>,
    },
    /// Print the season containing the day.
    Season,
    /// Print the next named holy days.
    Upcoming {
        #[arg(long, default_value_t = DEFAULT_UPCOMING_LIMIT)]
        limit: usize,
    },
    /// Print the collect appointed for the day.
    Collect {
        /// JSON file of liturgical texts to look the collect up in.
        #[arg(long)]
        texts: Option<PathBuf>,
    },
    /// Print the full snapshot for the day.
    Today {
        #[arg(long, default_value_t = DEFAULT_UPCOMING_LIMIT)]
        limit: usize,
    },
    /// Print every season span and holy day of a civil year.
    Calendar {
        #[arg(value_parser = year_parser())]
        year: i32,
    },
}

/// Years the engine can compute for, checked at parse time.
fn year_parser() -> clap::builder::RangedI64ValueParser<i32> {
    clap::value_parser!(i32).range(i64::from(MIN_YEAR)..=i64::from(MAX_YEAR))
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("LITURGY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);
    debug!(?cli, "parsed arguments");
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let global = cli.global;
    // The one clock read for this invocation.
    let now = Utc::now();
    let today = || -> Result<NaiveDate> {
        resolve_today(global.date.as_deref(), now, &global.timezone)
            .context("cannot determine the calendar day")
    };

    let out = match cli.command {
        Command::Easter { years } => {
            let dates: Vec<EasterDate> = years
                .into_iter()
                .map(|year| EasterDate {
                    year,
                    easter: compute_easter(year),
                })
                .collect();
            render::emit(global.format, dates.as_slice(), render::easter_text)?
        }
        Command::Season => {
            let window = resolve_season(today()?);
            render::emit(global.format, &window, render::season_text)?
        }
        Command::Upcoming { limit } => {
            let days = upcoming_holy_days(today()?, limit);
            render::emit(global.format, days.as_slice(), render::holy_days_text)?
        }
        Command::Collect { texts } => {
            let collect = resolve_collect(today()?);
            let store_given = texts.is_some();
            let text = match texts {
                Some(path) => {
                    let store = load_store(&path)?;
                    store.collect(&collect.slug())
                }
                None => None,
            };
            let report = CollectReport {
                slug: collect.slug(),
                title: collect.title(),
                text,
                store_given,
            };
            render::emit(global.format, &report, render::collect_text)?
        }
        Command::Today { limit } => {
            let day = LiturgicalDay::for_date(today()?, limit);
            render::emit(global.format, &day, render::day_text)?
        }
        Command::Calendar { year } => {
            let listing = CalendarListing {
                year,
                easter: compute_easter(year),
                seasons: season_spans(year),
                holy_days: holy_days_for_year(year),
            };
            render::emit(global.format, &listing, render::calendar_text)?
        }
    };

    print!("{out}");
    Ok(())
}

fn load_store(path: &Path) -> Result<MemoryCollectStore> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read texts file {}", path.display()))?;
    let store = MemoryCollectStore::from_json(&json)
        .with_context(|| format!("cannot load texts from {}", path.display()))?;
    debug!(texts = store.len(), missing = store.missing().len(), "loaded collect store");
    Ok(store)
}
