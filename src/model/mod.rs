//! Core data model for fittrack.
//!
//! These types hold the day's state: goals and metrics, the activity
//! ledger, the meal plan, and the sample weekly insights.

mod activity;
mod insights;
mod meal;
mod validation;
mod wellness;

pub use activity::{ActivityDraft, ActivityEntry, ActivityFilter, ActivityLedger, TimeOfDay};
pub use insights::{DailyPoint, WeeklySeries, weekly_activity, weekly_calories};
pub use meal::{MealCategory, MealDraft, MealItem, MealPlan};
pub use validation::{NotFoundError, ValidationError};
pub use wellness::{DailyMetrics, Goals, Metric, progress_percent};
