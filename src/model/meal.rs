//! Meal types: planned items grouped by meal of the day.

use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{NotFoundError, ValidationError, require_name, require_positive};

/// The closed set of meal slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealCategory {
    pub const ALL: [Self; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for MealCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::UnknownMealCategory(s.to_string()))
    }
}

/// A committed meal item. Removal goes by name within its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredItem")]
pub struct MealItem {
    pub id: Uuid,
    pub name: String,
    pub calories: u32,
}

#[derive(Deserialize)]
struct StoredItem {
    #[serde(default = "Uuid::new_v4")]
    id: Uuid,
    name: String,
    calories: i64,
}

impl TryFrom<StoredItem> for MealItem {
    type Error = ValidationError;

    fn try_from(stored: StoredItem) -> Result<Self, Self::Error> {
        Ok(Self {
            id: stored.id,
            name: require_name(&stored.name)?,
            calories: require_positive(stored.calories, ValidationError::NonPositiveCalories)?,
        })
    }
}

/// Raw meal input as collected from the user.
#[derive(Debug, Clone, Default)]
pub struct MealDraft {
    pub name: String,
    pub calories: i64,
}

impl MealDraft {
    pub fn validate(&self) -> Result<MealItem, ValidationError> {
        let name = require_name(&self.name)?;
        let calories = require_positive(self.calories, ValidationError::NonPositiveCalories)?;
        Ok(MealItem {
            id: Uuid::new_v4(),
            name,
            calories,
        })
    }
}

/// Items per meal category, each in the order they were added.
///
/// Serialized as `{"breakfast": [...], "lunch": [...], "dinner": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealPlan {
    categories: BTreeMap<MealCategory, Vec<MealItem>>,
}

impl MealPlan {
    /// Sample meals for a fresh store.
    pub fn seed() -> Self {
        let item = |name: &str, calories| MealItem {
            id: Uuid::new_v4(),
            name: name.to_string(),
            calories,
        };
        let mut categories = BTreeMap::new();
        categories.insert(
            MealCategory::Breakfast,
            vec![item("Oatmeal", 200), item("Berries", 50)],
        );
        categories.insert(MealCategory::Lunch, vec![item("Chicken Salad", 350)]);
        categories.insert(MealCategory::Dinner, vec![item("Salmon & Veggies", 450)]);
        Self { categories }
    }

    /// Validates the category and draft, then appends to that category.
    pub fn add_item(
        &mut self,
        category: &str,
        draft: &MealDraft,
    ) -> Result<MealItem, ValidationError> {
        let category: MealCategory = category.parse()?;
        let item = draft.validate()?;
        self.categories
            .entry(category)
            .or_default()
            .push(item.clone());
        Ok(item)
    }

    /// Removes the first item named `name` within `category`.
    pub fn remove_item(
        &mut self,
        category: MealCategory,
        name: &str,
    ) -> Result<MealItem, NotFoundError> {
        let name = name.trim();
        let not_found = || NotFoundError::MealItem {
            category: category.to_string(),
            name: name.to_string(),
        };
        let items = self.categories.get_mut(&category).ok_or_else(not_found)?;
        let index = items
            .iter()
            .position(|i| i.name == name)
            .ok_or_else(not_found)?;
        Ok(items.remove(index))
    }

    /// Items in `category`, empty if none were ever added.
    pub fn items(&self, category: MealCategory) -> &[MealItem] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn category_calories(&self, category: MealCategory) -> u64 {
        self.items(category)
            .iter()
            .map(|i| u64::from(i.calories))
            .sum()
    }

    /// Total daily intake across every category.
    pub fn total_calories(&self) -> u64 {
        MealCategory::ALL
            .into_iter()
            .map(|c| self.category_calories(c))
            .sum()
    }
}
