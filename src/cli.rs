//! CLI interface for fittrack.
//!
//! Each subcommand is one view or one action: arguments in, rendered view
//! out. Mutations re-render the view they touched.
//!
//! - `fittrack` / `fittrack dashboard` — today's meters.
//! - `fittrack activity list|add|remove` — the activity log.
//! - `fittrack meal list|add|remove` — the meal planner.
//! - `fittrack insights` — weekly charts.
//! - `fittrack summary` — JSON export of everything.
//! - `fittrack reset --yes` — back to seed data.

mod activity;
mod format;
mod meal;

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jiff::Zoned;

use fittrack::config::Config;
use fittrack::model::Metric;
use fittrack::storage::Storage;
use fittrack::tracker::Tracker;

use activity::ActivityCommand;
use format::{format_bar_chart, format_clock, format_meter};
use meal::MealCommand;

/// fittrack — steps, calories, water, activities, and meals.
#[derive(Debug, Parser)]
#[command(name = "fittrack", after_long_help = USAGE_HELP)]
pub struct Cli {
    /// Tracker database to use instead of the configured one.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

const USAGE_HELP: &str = r#"Examples:
  fittrack activity add "Swim" --duration 40 --calories 300 --time afternoon
  fittrack activity list --filter morning
  fittrack meal add lunch "Rice" --calories 200
  fittrack meal remove lunch "Rice"
  fittrack summary --out today.json"#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show today's progress toward each goal (the default).
    Dashboard,

    /// Log, list, or remove activities.
    Activity {
        #[command(subcommand)]
        command: ActivityCommand,
    },

    /// Plan, list, or remove meal items.
    Meal {
        #[command(subcommand)]
        command: MealCommand,
    },

    /// Show the weekly charts.
    Insights,

    /// Export everything as JSON.
    ///
    /// Written to `--out` (if given) or stdout.
    Summary {
        /// Write the summary to this file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Erase all tracked data and restore the starting sample data.
    Reset {
        /// Confirm the reset. Without it nothing is changed.
        #[arg(long)]
        yes: bool,
    },
}

/// Run the CLI, returning an error message on failure.
pub fn run(config: &Config) -> Result<(), String> {
    let cli = Cli::parse();

    let path = cli
        .data
        .or_else(|| config.data_file.clone())
        .or_else(Storage::default_path)
        .ok_or("could not determine home directory")?;
    let storage = Storage::open(&path)
        .map_err(|e| format!("failed to open {}: {e}", path.display()))?;
    let mut tracker = Tracker::load(storage);

    match cli.command.unwrap_or(Command::Dashboard) {
        Command::Dashboard => cmd_dashboard(&tracker),
        Command::Activity { command } => activity::run(&mut tracker, command),
        Command::Meal { command } => meal::run(&mut tracker, command),
        Command::Insights => cmd_insights(&tracker),
        Command::Summary { out } => cmd_summary(&tracker, out),
        Command::Reset { yes } => cmd_reset(&mut tracker, yes),
    }
}

fn cmd_dashboard(tracker: &Tracker) -> Result<(), String> {
    println!("Daily Wellness Overview");
    println!("{}", format_clock(&Zoned::now()));
    println!();
    for metric in Metric::ALL {
        println!(
            "{}",
            format_meter(
                metric,
                tracker.metrics().value(metric),
                tracker.goals().target(metric),
                tracker.progress_percent(metric),
            )
        );
    }
    Ok(())
}

fn cmd_insights(tracker: &Tracker) -> Result<(), String> {
    println!("Insights & Summary");
    for series in &tracker.insights() {
        println!();
        println!("{}", format_bar_chart(series));
    }
    Ok(())
}

fn cmd_summary(tracker: &Tracker, out: Option<PathBuf>) -> Result<(), String> {
    let json = serde_json::to_string_pretty(&tracker.summary())
        .map_err(|e| format!("failed to serialize summary: {e}"))?;

    match out {
        Some(path) => {
            fs::write(&path, &json)
                .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
            eprintln!("Summary written to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_reset(tracker: &mut Tracker, confirmed: bool) -> Result<(), String> {
    if !confirmed {
        return Err("reset erases all tracked data; re-run with --yes to confirm".to_string());
    }
    tracker
        .reset_all()
        .map_err(|e| format!("failed to clear stored data: {e}"))?;
    eprintln!("All data reset");
    cmd_dashboard(tracker)
}
