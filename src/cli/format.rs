//! Output formatting for CLI display.

use std::fmt::Write;

use jiff::Zoned;

use fittrack::model::{ActivityEntry, MealCategory, MealItem, Metric, WeeklySeries};

const METER_WIDTH: usize = 20;
const CHART_WIDTH: usize = 40;

/// The dashboard clock: time on the first line, date on the second.
pub(super) fn format_clock(now: &Zoned) -> String {
    format!(
        "{}\n{}",
        now.strftime("%I:%M:%S %p"),
        now.strftime("%A, %B %-d, %Y")
    )
}

/// One progress meter, e.g. `Steps Taken  7,500 STEPS / 10,000  [###...] 75%`.
pub(super) fn format_meter(metric: Metric, value: u64, goal: u64, percent: f64) -> String {
    format!(
        "{:<16} {} {} / {}  [{}] {}%",
        metric.label(),
        group_thousands(value),
        metric.unit(),
        group_thousands(goal),
        bar(percent, METER_WIDTH, '.'),
        round_percent(percent),
    )
}

pub(super) fn format_activity(entry: &ActivityEntry) -> String {
    format!(
        "{:<20} {} mins | {} kcal | {}",
        entry.name, entry.duration, entry.calories, entry.time
    )
}

pub(super) fn format_meal_tile(category: MealCategory, items: &[MealItem]) -> String {
    let mut out = category.title().to_string();
    if items.is_empty() {
        out.push_str("\n  (nothing planned)");
    }
    for item in items {
        let _ = write!(out, "\n  {:<20} {} kcal", item.name, item.calories);
    }
    out
}

/// A horizontal bar chart, one row per day, scaled to the series ceiling.
pub(super) fn format_bar_chart(series: &WeeklySeries) -> String {
    let mut out = series.title.to_string();
    for point in &series.points {
        let _ = write!(
            out,
            "\n{} {:<width$} {}",
            point.day,
            bar(series.bar_percent(point.value), CHART_WIDTH, ' '),
            point.value,
            width = CHART_WIDTH,
        );
    }
    out
}

/// `1234567` → `1,234,567`.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_percent(percent: f64) -> u64 {
    percent.clamp(0.0, 100.0).round() as u64
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn bar(percent: f64, width: usize, empty: char) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    let mut out = "#".repeat(filled);
    out.extend(std::iter::repeat_n(empty, width - filled));
    out
}
