//! Wellness types: daily goals, metrics, and progress toward them.

use serde::{Deserialize, Serialize};

/// Daily targets. Fixed for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goals {
    pub steps: u64,
    pub calories_burned: u64,

    /// Millilitres.
    pub water_intake: u64,
}

impl Goals {
    pub const DEFAULT: Self = Self {
        steps: 10_000,
        calories_burned: 500,
        water_intake: 3_000,
    };

    pub fn target(&self, metric: Metric) -> u64 {
        match metric {
            Metric::Steps => self.steps,
            Metric::CaloriesBurned => self.calories_burned,
            Metric::WaterIntake => self.water_intake,
        }
    }
}

/// Today's tracked values.
///
/// `calories_burned` is derived from the activity ledger; only the tracker
/// writes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMetrics {
    pub steps: u64,
    pub calories_burned: u64,

    /// Millilitres.
    pub water_intake: u64,
}

impl DailyMetrics {
    /// Seed values for a fresh store. `calories_burned` matches the seed ledger.
    pub const SEED: Self = Self {
        steps: 7_500,
        calories_burned: 350,
        water_intake: 2_000,
    };

    pub fn value(&self, metric: Metric) -> u64 {
        match metric {
            Metric::Steps => self.steps,
            Metric::CaloriesBurned => self.calories_burned,
            Metric::WaterIntake => self.water_intake,
        }
    }
}

/// One of the three dashboard meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Steps,
    CaloriesBurned,
    WaterIntake,
}

impl Metric {
    pub const ALL: [Self; 3] = [Self::Steps, Self::CaloriesBurned, Self::WaterIntake];

    pub fn label(self) -> &'static str {
        match self {
            Self::Steps => "Steps Taken",
            Self::CaloriesBurned => "Calories Burned",
            Self::WaterIntake => "Water Intake",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Self::Steps => "STEPS",
            Self::CaloriesBurned => "KCAL",
            Self::WaterIntake => "ML",
        }
    }
}

/// Percentage of `goal` reached by `value`, capped at 100.
///
/// Over-achievement is not distinguished. A zero goal counts as met.
#[allow(clippy::cast_precision_loss)]
pub fn progress_percent(value: u64, goal: u64) -> f64 {
    if goal == 0 {
        return 100.0;
    }
    (100.0 * value as f64 / goal as f64).min(100.0)
}
