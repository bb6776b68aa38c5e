//! Meal planner commands: list, add, remove.

use clap::Subcommand;

use fittrack::{
    model::{MealCategory, MealDraft},
    tracker::Tracker,
};

use super::format::format_meal_tile;

#[derive(Debug, Subcommand)]
pub enum MealCommand {
    /// Show every meal and the total daily intake.
    List,

    /// Add an item to a meal.
    Add {
        /// `breakfast`, `lunch`, or `dinner`.
        category: String,

        /// Item name (e.g. "Oatmeal").
        name: String,

        /// Calories in the item.
        #[arg(long, allow_negative_numbers = true)]
        calories: i64,
    },

    /// Remove the first item with this name from a meal.
    Remove {
        /// `breakfast`, `lunch`, or `dinner`.
        category: String,

        /// Item name.
        name: String,
    },
}

pub(super) fn run(tracker: &mut Tracker, command: MealCommand) -> Result<(), String> {
    match command {
        MealCommand::List => cmd_list(tracker),
        MealCommand::Add {
            category,
            name,
            calories,
        } => {
            let draft = MealDraft { name, calories };
            let item = tracker
                .add_meal_item(&category, &draft)
                .map_err(|e| format!("failed to add meal item: {e}"))?;
            eprintln!("Meal item {} added to {}", item.name, category.trim());
            cmd_list(tracker)
        }
        MealCommand::Remove { category, name } => {
            let category = category.parse::<MealCategory>().map_err(|e| e.to_string())?;
            let item = tracker
                .remove_meal_item(category, &name)
                .map_err(|e| format!("failed to remove meal item: {e}"))?;
            eprintln!("Meal item {} removed from {category}", item.name);
            cmd_list(tracker)
        }
    }
}

fn cmd_list(tracker: &Tracker) -> Result<(), String> {
    println!("Meal Planner");
    for category in MealCategory::ALL {
        println!();
        println!("{}", format_meal_tile(category, tracker.meals().items(category)));
    }
    println!();
    println!(
        "Total Daily Calorie Intake: {} kcal",
        tracker.total_meal_calories()
    );
    Ok(())
}
