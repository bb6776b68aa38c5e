//! Activity log commands: list, add, remove.

use clap::Subcommand;

use fittrack::{
    model::{ActivityDraft, ActivityFilter, TimeOfDay},
    tracker::Tracker,
};

use super::format::format_activity;

#[derive(Debug, Subcommand)]
pub enum ActivityCommand {
    /// List logged activities, newest first.
    List {
        /// `all`, `morning`, `afternoon`, or `evening`.
        #[arg(long, default_value = "all")]
        filter: String,
    },

    /// Log an activity.
    Add {
        /// Activity name (e.g. "Morning Run").
        name: String,

        /// Duration in minutes.
        #[arg(long, allow_negative_numbers = true)]
        duration: i64,

        /// Calories burned.
        #[arg(long, allow_negative_numbers = true)]
        calories: i64,

        /// `morning`, `afternoon`, or `evening`.
        #[arg(long)]
        time: String,
    },

    /// Remove the first activity with this name and time of day.
    Remove {
        /// Activity name.
        name: String,

        /// `morning`, `afternoon`, or `evening`.
        #[arg(long)]
        time: String,
    },
}

pub(super) fn run(tracker: &mut Tracker, command: ActivityCommand) -> Result<(), String> {
    match command {
        ActivityCommand::List { filter } => {
            let filter = filter.parse::<ActivityFilter>().map_err(|e| e.to_string())?;
            cmd_list(tracker, filter)
        }
        ActivityCommand::Add {
            name,
            duration,
            calories,
            time,
        } => {
            let draft = ActivityDraft {
                name,
                duration,
                calories,
                time,
            };
            let entry = tracker
                .add_activity(&draft)
                .map_err(|e| format!("failed to add activity: {e}"))?;
            eprintln!("Activity {} added", entry.name);
            cmd_list(tracker, ActivityFilter::All)
        }
        ActivityCommand::Remove { name, time } => {
            let time = time.parse::<TimeOfDay>().map_err(|e| e.to_string())?;
            let entry = tracker
                .remove_activity(&name, time)
                .map_err(|e| format!("failed to remove activity: {e}"))?;
            eprintln!("Activity {} removed", entry.name);
            cmd_list(tracker, ActivityFilter::All)
        }
    }
}

fn cmd_list(tracker: &Tracker, filter: ActivityFilter) -> Result<(), String> {
    let entries = tracker.list_activities(filter);
    println!("Logged Activities [{filter}]");

    if entries.is_empty() {
        println!("No activities");
        return Ok(());
    }

    for entry in entries {
        println!("{}", format_activity(entry));
    }
    println!(
        "Calories burned today: {} kcal",
        tracker.metrics().calories_burned
    );
    Ok(())
}
