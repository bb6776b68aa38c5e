//! Activity types: logged workouts and the ledger that orders them.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{NotFoundError, ValidationError, require_name, require_positive};

/// When in the day an activity happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub const ALL: [Self; 3] = [Self::Morning, Self::Afternoon, Self::Evening];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::UnknownTimeOfDay(s.to_string()))
    }
}

/// A committed activity.
///
/// Lookup and removal go by `(name, time)`. The `id` is carried so that
/// duplicates can be told apart later; nothing keys on it yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredEntry")]
pub struct ActivityEntry {
    pub id: Uuid,
    pub name: String,

    /// Minutes.
    pub duration: u32,
    pub calories: u32,
    pub time: TimeOfDay,
}

/// An entry as read back from storage, before it is checked.
#[derive(Deserialize)]
struct StoredEntry {
    #[serde(default = "Uuid::new_v4")]
    id: Uuid,
    name: String,
    duration: i64,
    calories: i64,
    time: TimeOfDay,
}

impl TryFrom<StoredEntry> for ActivityEntry {
    type Error = ValidationError;

    fn try_from(stored: StoredEntry) -> Result<Self, Self::Error> {
        Ok(Self {
            id: stored.id,
            name: require_name(&stored.name)?,
            duration: require_positive(stored.duration, ValidationError::NonPositiveDuration)?,
            calories: require_positive(stored.calories, ValidationError::NonPositiveCalories)?,
            time: stored.time,
        })
    }
}

/// Raw activity input as collected from the user.
#[derive(Debug, Clone, Default)]
pub struct ActivityDraft {
    pub name: String,
    pub duration: i64,
    pub calories: i64,
    pub time: String,
}

impl ActivityDraft {
    /// Checks every field and builds the entry. The first failing field wins.
    pub fn validate(&self) -> Result<ActivityEntry, ValidationError> {
        let name = require_name(&self.name)?;
        let duration = require_positive(self.duration, ValidationError::NonPositiveDuration)?;
        let calories = require_positive(self.calories, ValidationError::NonPositiveCalories)?;
        let time: TimeOfDay = self.time.parse()?;
        Ok(ActivityEntry {
            id: Uuid::new_v4(),
            name,
            duration,
            calories,
            time,
        })
    }
}

/// Which slice of the ledger to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivityFilter {
    #[default]
    All,
    Time(TimeOfDay),
}

impl ActivityFilter {
    fn admits(self, entry: &ActivityEntry) -> bool {
        match self {
            Self::All => true,
            Self::Time(t) => entry.time == t,
        }
    }
}

impl FromStr for ActivityFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Time)
    }
}

impl fmt::Display for ActivityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Time(t) => t.fmt(f),
        }
    }
}

/// Logged activities, newest first. No dedup, no cap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityLedger {
    entries: Vec<ActivityEntry>,
}

impl ActivityLedger {
    /// Sample activities for a fresh store.
    pub fn seed() -> Self {
        let sample = |name: &str, duration, calories| ActivityEntry {
            id: Uuid::new_v4(),
            name: name.to_string(),
            duration,
            calories,
            time: TimeOfDay::Morning,
        };
        Self {
            entries: vec![
                sample("Morning Run", 30, 250),
                sample("Yoga Session", 45, 100),
            ],
        }
    }

    /// Validates the draft and puts the new entry at the front.
    pub fn add(&mut self, draft: &ActivityDraft) -> Result<ActivityEntry, ValidationError> {
        let entry = draft.validate()?;
        self.entries.insert(0, entry.clone());
        Ok(entry)
    }

    /// Removes the first entry matching `(name, time)` in ledger order.
    pub fn remove(&mut self, name: &str, time: TimeOfDay) -> Result<ActivityEntry, NotFoundError> {
        let name = name.trim();
        let index = self
            .entries
            .iter()
            .position(|e| e.name == name && e.time == time)
            .ok_or_else(|| NotFoundError::Activity {
                name: name.to_string(),
                time: time.to_string(),
            })?;
        Ok(self.entries.remove(index))
    }

    /// Entries admitted by `filter`, in ledger order.
    pub fn list_by_filter(&self, filter: ActivityFilter) -> Vec<&ActivityEntry> {
        self.entries.iter().filter(|e| filter.admits(e)).collect()
    }

    pub fn total_calories(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.calories)).sum()
    }

    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
