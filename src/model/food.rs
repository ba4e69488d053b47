use crate::model::PersonId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for food entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FoodId(pub u32);

impl From<u32> for FoodId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for FoodId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "food_{}", self.0)
    }
}

/// Error returned when a meal type or weekday name is not recognised.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "BREAKFAST",
            MealType::Lunch => "LUNCH",
            MealType::Dinner => "DINNER",
            MealType::Snack => "SNACK",
        }
    }
}

impl Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BREAKFAST" => Ok(MealType::Breakfast),
            "LUNCH" => Ok(MealType::Lunch),
            "DINNER" => Ok(MealType::Dinner),
            "SNACK" => Ok(MealType::Snack),
            _ => Err(ParseEnumError {
                kind: "meal type",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Monday => "MONDAY",
            Day::Tuesday => "TUESDAY",
            Day::Wednesday => "WEDNESDAY",
            Day::Thursday => "THURSDAY",
            Day::Friday => "FRIDAY",
            Day::Saturday => "SATURDAY",
            Day::Sunday => "SUNDAY",
        }
    }
}

impl Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Day {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MONDAY" => Ok(Day::Monday),
            "TUESDAY" => Ok(Day::Tuesday),
            "WEDNESDAY" => Ok(Day::Wednesday),
            "THURSDAY" => Ok(Day::Thursday),
            "FRIDAY" => Ok(Day::Friday),
            "SATURDAY" => Ok(Day::Saturday),
            "SUNDAY" => Ok(Day::Sunday),
            _ => Err(ParseEnumError {
                kind: "day",
                value: s.to_string(),
            }),
        }
    }
}

/// A single logged meal.
///
/// Every field arrives optional because the entry is built straight from request data;
/// [`FoodService`](crate::food_service::FoodService) decides which absences are fatal.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FoodEntry {
    pub id: Option<FoodId>,
    pub person_id: Option<PersonId>,
    pub name: Option<String>,
    pub meal_type: Option<MealType>,
    pub description: Option<String>,
    pub calories: Option<i32>,
    pub week: Option<i32>,
    pub day: Option<Day>,
}

impl FoodEntry {
    /// Creates a new FoodEntry from request data.
    ///
    /// # Arguments
    /// * `id` - Identifier, `None` until the entry is stored
    /// * `person_id` - Person the meal is logged against
    /// * `name` - What was eaten
    /// * `meal_type` - Meal slot
    /// * `description` - Free text
    /// * `calories` - Calorie count
    /// * `week` - Week number, starting at 1
    /// * `day` - Day of the week
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Option<FoodId>,
        person_id: Option<PersonId>,
        name: Option<&str>,
        meal_type: Option<MealType>,
        description: Option<&str>,
        calories: Option<i32>,
        week: Option<i32>,
        day: Option<Day>,
    ) -> Self {
        Self {
            id,
            person_id,
            name: name.map(str::to_string),
            meal_type,
            description: description.map(str::to_string),
            calories,
            week,
            day,
        }
    }

    /// Returns a copy of this entry carrying the given identifier.
    pub fn with_id(mut self, id: FoodId) -> Self {
        self.id = Some(id);
        self
    }
}
