//! `shelter-schedule` CLI: compute weekly visit availability for an animal
//! from a JSON data snapshot.
//!
//! ## Usage
//!
//! ```sh
//! # Full weekly schedule as pretty JSON
//! shelter-schedule week --data shelter.json --animal rex --user alice --week-start 2024-03-04
//!
//! # Write the schedule to a file
//! shelter-schedule week --data shelter.json --animal rex --user alice \
//!     --week-start 2024-03-04 -o week.json
//!
//! # One line per available block
//! shelter-schedule free --data shelter.json --animal rex --user alice --week-start 2024-03-04
//!
//! # First block of at least 90 minutes
//! shelter-schedule free --data shelter.json --animal rex --user alice \
//!     --week-start 2024-03-04 --min-minutes 90
//!
//! # With a TOML configuration and debug logs
//! shelter-schedule --config schedule.toml -v week ...
//! ```

mod logging;

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use shelter_schedule::{
    find_first_available_block, AnimalWeeklySchedule, Caller, InMemoryStore, ScheduleConfig,
    ScheduleError, TimeBlock, WeeklyScheduleHandler, WeeklyScheduleQuery,
};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "shelter-schedule",
    version,
    about = "Weekly visit availability for shelter animals"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML configuration file (defaults apply when omitted)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args)]
struct QueryArgs {
    /// JSON data snapshot with shelters, animals, fosterings and slots
    #[arg(short, long)]
    data: String,
    /// Animal to compute the schedule for
    #[arg(short, long)]
    animal: String,
    /// User requesting the schedule; must actively foster the animal
    #[arg(short, long)]
    user: String,
    /// First day of the week (a Monday, YYYY-MM-DD)
    #[arg(short, long)]
    week_start: NaiveDate,
    /// Reference date for week-start validation (defaults to today, UTC)
    #[arg(long)]
    today: Option<NaiveDate>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full weekly schedule as JSON
    Week {
        #[command(flatten)]
        query: QueryArgs,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// List available blocks, one per line
    Free {
        #[command(flatten)]
        query: QueryArgs,
        /// Only print the first block lasting at least this many minutes
        #[arg(long)]
        min_minutes: Option<i64>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        match err.downcast_ref::<ScheduleError>() {
            Some(schedule_err) => {
                eprintln!("error: {:#} (status {})", err, schedule_err.status_code())
            }
            None => eprintln!("error: {:#}", err),
        }
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = match cli.config.as_deref() {
        Some(path) => ScheduleConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path))?,
        None => ScheduleConfig::default(),
    };
    logging::init_logger(&config.logging, cli.verbose);

    match cli.command {
        Commands::Week { query, output } => {
            let schedule = compute_schedule(&query, &config).await?;
            let json = serde_json::to_string_pretty(&schedule)?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Free { query, min_minutes } => {
            let schedule = compute_schedule(&query, &config).await?;
            let blocks: Vec<TimeBlock> = schedule
                .days
                .iter()
                .flat_map(|day| day.available.iter().cloned())
                .collect();

            match min_minutes {
                Some(min) => match find_first_available_block(&blocks, min) {
                    Some(block) => println!("{}", format_block(block)),
                    None => println!("No available block of at least {} minutes", min),
                },
                None => {
                    for block in &blocks {
                        println!("{}", format_block(block));
                    }
                }
            }
        }
    }

    Ok(())
}

async fn compute_schedule(
    args: &QueryArgs,
    config: &ScheduleConfig,
) -> Result<AnimalWeeklySchedule> {
    let json = std::fs::read_to_string(&args.data)
        .with_context(|| format!("Failed to read data snapshot: {}", args.data))?;
    let store = Arc::new(InMemoryStore::from_json(&json)?);
    debug!(
        path = %args.data,
        animals = store.snapshot().animals.len(),
        "loaded data snapshot"
    );

    let today = args.today.unwrap_or_else(|| Utc::now().date_naive());
    let query =
        WeeklyScheduleQuery::new(&args.animal, args.week_start, today, &config.week_start)?;

    let handler = WeeklyScheduleHandler::from_store(store);
    let schedule = handler.handle(&query, &Caller::new(&args.user)).await?;
    Ok(schedule)
}

/// `2024-03-04 09:00-10:00 (60 min)`
fn format_block(block: &TimeBlock) -> String {
    format!(
        "{} {}-{} ({} min)",
        block.date,
        block.start.format("%H:%M"),
        block.end.format("%H:%M"),
        block.duration_minutes
    )
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
