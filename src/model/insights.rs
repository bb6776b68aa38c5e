//! Insights: weekly sample series for the charts.
//!
//! These are fixed example figures, not derived from the ledger or the plan.

use serde::Serialize;

const DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const ACTIVITY_COUNTS: [u32; 7] = [2, 1, 3, 1, 2, 4, 2];
const CALORIE_INTAKE: [u32; 7] = [1500, 1200, 1800, 1100, 1600, 2000, 1550];

/// One bar of a weekly chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyPoint {
    pub day: &'static str,
    pub value: u32,
}

/// A titled seven-day series, Monday first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySeries {
    pub title: &'static str,
    pub points: [DailyPoint; 7],

    /// Headroom added above the tallest bar when scaling.
    #[serde(skip)]
    pub headroom: u32,
}

impl WeeklySeries {
    fn new(title: &'static str, values: [u32; 7], headroom: u32) -> Self {
        let mut points = [DailyPoint { day: "", value: 0 }; 7];
        for (point, (day, value)) in points.iter_mut().zip(DAYS.into_iter().zip(values)) {
            *point = DailyPoint { day, value };
        }
        Self {
            title,
            points,
            headroom,
        }
    }

    /// The value a full-height bar represents.
    pub fn ceiling(&self) -> u32 {
        self.points.iter().map(|p| p.value).max().unwrap_or(0) + self.headroom
    }

    /// Bar height as a percentage of the ceiling, capped at 100.
    pub fn bar_percent(&self, value: u32) -> f64 {
        let ceiling = self.ceiling();
        if ceiling == 0 {
            return 0.0;
        }
        (100.0 * f64::from(value) / f64::from(ceiling)).min(100.0)
    }
}

/// Activities logged per day over a sample week.
pub fn weekly_activity() -> WeeklySeries {
    WeeklySeries::new("Weekly Activity Count", ACTIVITY_COUNTS, 1)
}

/// Calories eaten per day over a sample week.
pub fn weekly_calories() -> WeeklySeries {
    WeeklySeries::new("Weekly Calorie Intake (Simulated)", CALORIE_INTAKE, 200)
}
