//! Draft validation and lookup errors shared by the ledger and the meal plan.

/// A draft was rejected. Nothing was changed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("duration must be a positive number of minutes, got {0}")]
    NonPositiveDuration(i64),

    #[error("calories must be a positive number, got {0}")]
    NonPositiveCalories(i64),

    #[error("unknown time of day '{0}': expected Morning, Afternoon, or Evening")]
    UnknownTimeOfDay(String),

    #[error("unknown meal category '{0}': expected breakfast, lunch, or dinner")]
    UnknownMealCategory(String),
}

/// A removal target was not present. Nothing was changed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFoundError {
    #[error("no {time} activity named '{name}'")]
    Activity { name: String, time: String },

    #[error("no {category} item named '{name}'")]
    MealItem { category: String, name: String },
}

/// Trims a draft name, rejecting it if nothing is left.
pub(super) fn require_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(name.to_string())
}

/// Accepts strictly positive values that fit a `u32`.
pub(super) fn require_positive(
    value: i64,
    reject: fn(i64) -> ValidationError,
) -> Result<u32, ValidationError> {
    match u32::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(reject(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed() {
        assert_eq!(require_name("  Swim \t").unwrap(), "Swim");
    }

    #[test]
    fn blank_name_rejected() {
        assert_eq!(require_name("   ").unwrap_err(), ValidationError::EmptyName);
        assert_eq!(require_name("").unwrap_err(), ValidationError::EmptyName);
    }

    #[test]
    fn positive_bounds() {
        let reject = ValidationError::NonPositiveDuration;
        assert_eq!(require_positive(1, reject).unwrap(), 1);
        assert_eq!(
            require_positive(0, reject).unwrap_err(),
            ValidationError::NonPositiveDuration(0)
        );
        assert_eq!(
            require_positive(-5, reject).unwrap_err(),
            ValidationError::NonPositiveDuration(-5)
        );
        assert!(require_positive(i64::from(u32::MAX) + 1, reject).is_err());
    }
}
