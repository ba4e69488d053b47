//! Field checks for a candidate food entry.
//!
//! Pure functions, no I/O. Checks run in a fixed order and stop at the first
//! violation.

use crate::food_service::FoodError;
use crate::model::{FoodEntry, PersonId};

pub const PERSON_ID_INVALID: &str = "person id is invalid";
pub const NAME_NULL: &str = "name cannot be null";
pub const CALORIES_NULL: &str = "calories cannot be null";
pub const CALORIES_NEGATIVE: &str = "calories cannot be negative";
pub const WEEK_NULL: &str = "week cannot be null";
pub const WEEK_INVALID: &str = "invalid week";

/// Runs every check on `entry`: owning person first, then the remaining fields.
pub fn validate(entry: &FoodEntry) -> Result<(), FoodError> {
    require_person_id(entry)?;
    validate_fields(entry)
}

/// Returns the owning person's ID, or the missing-reference error when absent.
pub fn require_person_id(entry: &FoodEntry) -> Result<PersonId, FoodError> {
    entry
        .person_id
        .ok_or_else(|| FoodError::MissingReference(PERSON_ID_INVALID.to_string()))
}

/// Checks name, calories and week, in that order.
pub fn validate_fields(entry: &FoodEntry) -> Result<(), FoodError> {
    // A blank name is treated the same as a missing one.
    match entry.name.as_deref() {
        Some(name) if !name.trim().is_empty() => {}
        _ => return Err(FoodError::invalid(NAME_NULL)),
    }

    match entry.calories {
        None => return Err(FoodError::invalid(CALORIES_NULL)),
        Some(calories) if calories < 0 => return Err(FoodError::invalid(CALORIES_NEGATIVE)),
        Some(_) => {}
    }

    match entry.week {
        None => Err(FoodError::invalid(WEEK_NULL)),
        Some(week) if week <= 0 => Err(FoodError::invalid(WEEK_INVALID)),
        Some(_) => Ok(()),
    }
}
