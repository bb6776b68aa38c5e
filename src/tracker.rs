//! The tracker: one owner for the day's state and its persistence.
//!
//! Every mutation goes through here so that `caloriesBurned` always equals
//! the sum of the ledger. After each successful mutation the whole state is
//! written as one snapshot. A failed write is logged and the in-memory change
//! stands.

use jiff::Timestamp;
use serde::Serialize;

use crate::model::{
    ActivityDraft, ActivityEntry, ActivityFilter, ActivityLedger, DailyMetrics, Goals, MealCategory,
    MealDraft, MealItem, MealPlan, Metric, NotFoundError, TimeOfDay, ValidationError, WeeklySeries,
    progress_percent, weekly_activity, weekly_calories,
};
use crate::storage::{self, Slot, Storage};

/// A rejected tracker operation. State is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackerError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("not found: {0}")]
    NotFound(#[from] NotFoundError),
}

/// Application state: goals, metrics, ledger, and meal plan, plus the store
/// they are saved to.
pub struct Tracker {
    storage: Storage,
    goals: Goals,
    metrics: DailyMetrics,
    ledger: ActivityLedger,
    meals: MealPlan,
}

impl Tracker {
    /// Loads state from `storage`, falling back to seed data per slot.
    ///
    /// `caloriesBurned` is recomputed from the loaded ledger rather than
    /// trusted from the metrics slot.
    pub fn load(storage: Storage) -> Self {
        let ledger: Option<ActivityLedger> = load_or_log(&storage, Slot::ActivityLog);
        let meals: Option<MealPlan> = load_or_log(&storage, Slot::MealData);
        let metrics: Option<DailyMetrics> = load_or_log(&storage, Slot::Metrics);

        let ledger = ledger.unwrap_or_else(ActivityLedger::seed);
        let mut metrics = metrics.unwrap_or(DailyMetrics::SEED);
        let derived = ledger.total_calories();
        if metrics.calories_burned != derived {
            tracing::info!(
                stored = metrics.calories_burned,
                derived,
                "correcting calories burned from activity log"
            );
            metrics.calories_burned = derived;
        }

        Self {
            storage,
            goals: Goals::DEFAULT,
            metrics,
            ledger,
            meals: meals.unwrap_or_else(MealPlan::seed),
        }
    }

    pub fn goals(&self) -> &Goals {
        &self.goals
    }

    pub fn metrics(&self) -> &DailyMetrics {
        &self.metrics
    }

    pub fn ledger(&self) -> &ActivityLedger {
        &self.ledger
    }

    pub fn meals(&self) -> &MealPlan {
        &self.meals
    }

    /// Progress toward today's goal for `metric`, capped at 100.
    pub fn progress_percent(&self, metric: Metric) -> f64 {
        progress_percent(self.metrics.value(metric), self.goals.target(metric))
    }

    // ── Activities ──

    /// Logs a new activity at the front of the ledger.
    pub fn add_activity(&mut self, draft: &ActivityDraft) -> Result<ActivityEntry, TrackerError> {
        let entry = self.ledger.add(draft)?;
        self.metrics.calories_burned = self.ledger.total_calories();
        tracing::debug!(name = %entry.name, time = %entry.time, calories = entry.calories, "activity added");
        self.persist();
        Ok(entry)
    }

    /// Removes the first activity matching `(name, time)`.
    pub fn remove_activity(
        &mut self,
        name: &str,
        time: TimeOfDay,
    ) -> Result<ActivityEntry, TrackerError> {
        let entry = self.ledger.remove(name, time)?;
        self.metrics.calories_burned = self.ledger.total_calories();
        tracing::debug!(name = %entry.name, time = %entry.time, calories = entry.calories, "activity removed");
        self.persist();
        Ok(entry)
    }

    pub fn list_activities(&self, filter: ActivityFilter) -> Vec<&ActivityEntry> {
        self.ledger.list_by_filter(filter)
    }

    // ── Meals ──

    /// Appends a meal item to `category`.
    pub fn add_meal_item(
        &mut self,
        category: &str,
        draft: &MealDraft,
    ) -> Result<MealItem, TrackerError> {
        let item = self.meals.add_item(category, draft)?;
        tracing::debug!(category, name = %item.name, calories = item.calories, "meal item added");
        self.persist();
        Ok(item)
    }

    /// Removes the first item named `name` from `category`.
    pub fn remove_meal_item(
        &mut self,
        category: MealCategory,
        name: &str,
    ) -> Result<MealItem, TrackerError> {
        let item = self.meals.remove_item(category, name)?;
        tracing::debug!(%category, name = %item.name, "meal item removed");
        self.persist();
        Ok(item)
    }

    /// Total planned intake across all meals.
    pub fn total_meal_calories(&self) -> u64 {
        self.meals.total_calories()
    }

    // ── Insights ──

    /// The two weekly chart series: activity count, then calorie intake.
    pub fn insights(&self) -> [WeeklySeries; 2] {
        [weekly_activity(), weekly_calories()]
    }

    /// Everything on every view, in one serializable value.
    pub fn summary(&self) -> Summary<'_> {
        Summary {
            generated_at: Timestamp::now(),
            goals: self.goals,
            metrics: self.metrics,
            progress: Metric::ALL.map(|metric| MetricProgress {
                metric,
                value: self.metrics.value(metric),
                goal: self.goals.target(metric),
                percent: self.progress_percent(metric),
            }),
            activities: self.ledger.entries(),
            meals: &self.meals,
            total_meal_calories: self.meals.total_calories(),
            weekly_activity: weekly_activity(),
            weekly_calories: weekly_calories(),
        }
    }

    // ── Reset ──

    /// Clears every slot and restores seed data.
    ///
    /// Destructive: callers confirm with the user first. Unlike the other
    /// mutations, a failed clear is returned to the caller.
    pub fn reset_all(&mut self) -> storage::Result<()> {
        self.ledger = ActivityLedger::seed();
        self.meals = MealPlan::seed();
        self.metrics = DailyMetrics {
            calories_burned: self.ledger.total_calories(),
            ..DailyMetrics::SEED
        };
        tracing::info!("tracker reset to seed data");
        self.storage.clear_all()
    }

    /// Writes the whole state as one snapshot, logging on failure.
    fn persist(&self) {
        if let Err(e) = self.save_snapshot() {
            tracing::warn!(error = %e, "failed to save tracker state; keeping in-memory changes");
        }
    }

    fn save_snapshot(&self) -> storage::Result<()> {
        self.storage.save_snapshot(&[
            (Slot::Metrics, serde_json::to_string(&self.metrics)?),
            (Slot::ActivityLog, serde_json::to_string(&self.ledger)?),
            (Slot::MealData, serde_json::to_string(&self.meals)?),
        ])
    }
}

/// Loads a slot, treating a storage failure like an unset slot.
fn load_or_log<T: serde::de::DeserializeOwned>(storage: &Storage, slot: Slot) -> Option<T> {
    storage.load(slot).unwrap_or_else(|e| {
        tracing::warn!(slot = slot.key(), error = %e, "failed to load slot; using seed data");
        None
    })
}

/// One dashboard meter.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricProgress {
    pub metric: Metric,
    pub value: u64,
    pub goal: u64,
    pub percent: f64,
}

/// A read-only export of the tracker.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary<'a> {
    pub generated_at: Timestamp,
    pub goals: Goals,
    pub metrics: DailyMetrics,
    pub progress: [MetricProgress; 3],
    pub activities: &'a [ActivityEntry],
    pub meals: &'a MealPlan,
    pub total_meal_calories: u64,
    pub weekly_activity: WeeklySeries,
    pub weekly_calories: WeeklySeries,
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    fn test_tracker() -> Tracker {
        Tracker::load(Storage::in_memory().unwrap())
    }

    fn activity(name: &str, duration: i64, calories: i64, time: &str) -> ActivityDraft {
        ActivityDraft {
            name: name.into(),
            duration,
            calories,
            time: time.into(),
        }
    }

    fn meal(name: &str, calories: i64) -> MealDraft {
        MealDraft {
            name: name.into(),
            calories,
        }
    }

    fn assert_calories_match_ledger(tracker: &Tracker) {
        assert_eq!(
            tracker.metrics().calories_burned,
            tracker.ledger().total_calories()
        );
    }

    #[test]
    fn fresh_store_uses_seed_data() {
        let tracker = test_tracker();

        assert_eq!(*tracker.metrics(), DailyMetrics::SEED);
        assert_eq!(tracker.ledger().len(), 2);
        assert_eq!(tracker.total_meal_calories(), 1_050);
        assert_calories_match_ledger(&tracker);
    }

    #[test]
    fn adding_swim_scenario() {
        let mut tracker = test_tracker();
        assert_eq!(tracker.metrics().calories_burned, 350);

        tracker
            .add_activity(&activity("Swim", 40, 300, "Afternoon"))
            .unwrap();

        assert_eq!(tracker.metrics().calories_burned, 650);
        assert_eq!(tracker.ledger().entries()[0].name, "Swim");
    }

    #[test]
    fn zero_duration_changes_nothing() {
        let mut tracker = test_tracker();
        let ledger = tracker.ledger().clone();
        let metrics = *tracker.metrics();

        let err = tracker
            .add_activity(&activity("Swim", 0, 300, "Afternoon"))
            .unwrap_err();

        assert_eq!(
            err,
            TrackerError::Validation(ValidationError::NonPositiveDuration(0))
        );
        assert_eq!(*tracker.ledger(), ledger);
        assert_eq!(*tracker.metrics(), metrics);
    }

    #[test]
    fn removing_ghost_changes_nothing() {
        let mut tracker = test_tracker();
        let ledger = tracker.ledger().clone();

        let err = tracker
            .remove_activity("Ghost", TimeOfDay::Morning)
            .unwrap_err();

        assert!(matches!(err, TrackerError::NotFound(_)));
        assert_eq!(*tracker.ledger(), ledger);
        assert_eq!(tracker.metrics().calories_burned, 350);
    }

    #[test]
    fn add_then_remove_round_trips() {
        let mut tracker = test_tracker();
        let ledger = tracker.ledger().clone();
        let metrics = *tracker.metrics();

        tracker
            .add_activity(&activity("Row", 20, 180, "Evening"))
            .unwrap();
        tracker.remove_activity("Row", TimeOfDay::Evening).unwrap();

        assert_eq!(*tracker.ledger(), ledger);
        assert_eq!(*tracker.metrics(), metrics);
    }

    #[test]
    fn calories_track_ledger_through_mixed_operations() {
        let mut tracker = test_tracker();
        let ops: [(&str, &str, i64); 6] = [
            ("Run", "Morning", 250),
            ("Run", "Morning", 260),
            ("Bike", "Afternoon", 400),
            ("Lift", "Evening", 300),
            ("Walk", "Evening", 90),
            ("Walk", "Evening", 95),
        ];
        for (name, time, calories) in ops {
            tracker
                .add_activity(&activity(name, 30, calories, time))
                .unwrap();
            assert_calories_match_ledger(&tracker);
        }
        for (name, time) in [
            ("Run", TimeOfDay::Morning),
            ("Walk", TimeOfDay::Evening),
            ("Yoga Session", TimeOfDay::Morning),
            ("Bike", TimeOfDay::Afternoon),
        ] {
            tracker.remove_activity(name, time).unwrap();
            assert_calories_match_ledger(&tracker);
        }
        assert_eq!(tracker.ledger().len(), 4);
    }

    #[test]
    fn adding_rice_to_lunch_scenario() {
        let mut tracker = test_tracker();
        let before = tracker.total_meal_calories();

        tracker.add_meal_item("lunch", &meal("Rice", 200)).unwrap();

        let lunch: Vec<_> = tracker
            .meals()
            .items(MealCategory::Lunch)
            .iter()
            .map(|i| (i.name.as_str(), i.calories))
            .collect();
        assert_eq!(lunch, [("Chicken Salad", 350), ("Rice", 200)]);
        assert_eq!(tracker.total_meal_calories(), before + 200);
    }

    #[test]
    fn removing_meal_item_lowers_total() {
        let mut tracker = test_tracker();
        let before = tracker.total_meal_calories();

        let removed = tracker
            .remove_meal_item(MealCategory::Dinner, "Salmon & Veggies")
            .unwrap();

        assert_eq!(tracker.total_meal_calories(), before - u64::from(removed.calories));
        assert!(tracker.meals().items(MealCategory::Dinner).is_empty());
    }

    #[test]
    fn mutations_persist_across_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.sqlite");

        let mut tracker = Tracker::load(Storage::open(&path).unwrap());
        tracker
            .add_activity(&activity("Swim", 40, 300, "Afternoon"))
            .unwrap();
        tracker.add_meal_item("dinner", &meal("Bread", 120)).unwrap();
        let ledger = tracker.ledger().clone();
        let meals = tracker.meals().clone();
        drop(tracker);

        let tracker = Tracker::load(Storage::open(&path).unwrap());
        assert_eq!(*tracker.ledger(), ledger);
        assert_eq!(*tracker.meals(), meals);
        assert_eq!(tracker.metrics().calories_burned, 650);
    }

    #[test]
    fn stale_metrics_are_corrected_on_load() {
        let storage = Storage::in_memory().unwrap();
        storage
            .save(
                Slot::Metrics,
                &DailyMetrics {
                    steps: 1_234,
                    calories_burned: 9_999,
                    water_intake: 500,
                },
            )
            .unwrap();
        storage
            .save_snapshot(&[(
                Slot::ActivityLog,
                r#"[{"name":"Cycling","duration":60,"calories":400,"time":"Afternoon"}]"#.into(),
            )])
            .unwrap();

        let tracker = Tracker::load(storage);

        assert_eq!(tracker.metrics().steps, 1_234);
        assert_eq!(tracker.metrics().water_intake, 500);
        assert_eq!(tracker.metrics().calories_burned, 400);
    }

    #[test]
    fn malformed_slot_falls_back_to_seed() {
        let storage = Storage::in_memory().unwrap();
        storage
            .save_snapshot(&[(Slot::MealData, "[[[".into())])
            .unwrap();

        let tracker = Tracker::load(storage);

        let seed = MealPlan::seed();
        for category in MealCategory::ALL {
            let loaded: Vec<_> = tracker
                .meals()
                .items(category)
                .iter()
                .map(|i| (i.name.as_str(), i.calories))
                .collect();
            let expected: Vec<_> = seed
                .items(category)
                .iter()
                .map(|i| (i.name.as_str(), i.calories))
                .collect();
            assert_eq!(loaded, expected);
        }
    }

    #[test]
    fn invalid_stored_activity_falls_back_to_seed() {
        let storage = Storage::in_memory().unwrap();
        storage
            .save_snapshot(&[(
                Slot::ActivityLog,
                r#"[{"name":"","duration":0,"calories":0,"time":"Morning"}]"#.into(),
            )])
            .unwrap();

        let tracker = Tracker::load(storage);

        let names: Vec<_> = tracker
            .ledger()
            .entries()
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, ["Morning Run", "Yoga Session"]);
        assert_eq!(tracker.metrics().calories_burned, 350);
        assert_calories_match_ledger(&tracker);
    }

    #[test]
    fn invalid_stored_meal_item_falls_back_to_seed() {
        let storage = Storage::in_memory().unwrap();
        storage
            .save_snapshot(&[(
                Slot::MealData,
                r#"{"lunch":[{"name":"Rice","calories":0}]}"#.into(),
            )])
            .unwrap();

        let tracker = Tracker::load(storage);

        assert_eq!(tracker.total_meal_calories(), 1_050);
        assert!(
            tracker
                .meals()
                .items(MealCategory::Lunch)
                .iter()
                .all(|i| i.name != "Rice")
        );
    }

    #[test]
    fn storage_failure_keeps_in_memory_change() {
        let storage = Storage::in_memory().unwrap();
        let mut tracker = Tracker::load(storage);
        tracker.storage.break_for_test();

        let entry = tracker
            .add_activity(&activity("Swim", 40, 300, "Afternoon"))
            .unwrap();

        assert_eq!(tracker.ledger().entries()[0], entry);
        assert_eq!(tracker.metrics().calories_burned, 650);
    }

    #[test]
    fn progress_is_capped() {
        let mut tracker = test_tracker();
        tracker
            .add_activity(&activity("Marathon", 240, 2_600, "Morning"))
            .unwrap();

        assert!((tracker.progress_percent(Metric::CaloriesBurned) - 100.0).abs() < f64::EPSILON);
        assert!((tracker.progress_percent(Metric::Steps) - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn reset_clears_store_and_restores_seed() {
        let mut tracker = test_tracker();
        tracker
            .add_activity(&activity("Swim", 40, 300, "Afternoon"))
            .unwrap();
        tracker.add_meal_item("lunch", &meal("Rice", 200)).unwrap();

        tracker.reset_all().unwrap();

        assert_eq!(*tracker.metrics(), DailyMetrics::SEED);
        assert_eq!(tracker.ledger().len(), 2);
        assert_eq!(tracker.total_meal_calories(), 1_050);
        for slot in Slot::ALL {
            assert!(tracker.storage.load_raw(slot).unwrap().is_none());
        }
    }

    #[test]
    fn summary_reflects_state() {
        let tracker = test_tracker();
        let json = serde_json::to_value(tracker.summary()).unwrap();

        assert_eq!(json["metrics"]["caloriesBurned"], 350);
        assert_eq!(json["totalMealCalories"], 1_050);
        assert_eq!(json["progress"][0]["metric"], "steps");
        assert_eq!(json["activities"].as_array().unwrap().len(), 2);
        assert_eq!(json["weeklyCalories"]["points"][5]["value"], 2_000);
    }
}
