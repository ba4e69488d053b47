use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for People.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PersonId(pub u32);

impl From<u32> for PersonId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "person_{}", self.0)
    }
}

/// A registered person whose meals are logged.
///
/// The food service only reads this record to confirm the person exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub age: u32,
    /// Height in centimetres.
    pub height: f64,
    /// Weight in kilograms.
    pub weight: f64,
    pub daily_calorie_target: u32,
}

/// Payload for registering a new person.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonCreate {
    pub name: String,
    pub age: u32,
    pub height: f64,
    pub weight: f64,
    pub daily_calorie_target: u32,
}

impl Person {
    /// Creates a new Person instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (typically set by the person store)
    /// * `name` - Display name
    /// * `age` - Age in years
    /// * `height` - Height in centimetres
    /// * `weight` - Weight in kilograms
    /// * `daily_calorie_target` - Calories the person aims for per day
    pub fn new(
        id: PersonId,
        name: impl Into<String>,
        age: u32,
        height: f64,
        weight: f64,
        daily_calorie_target: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            height,
            weight,
            daily_calorie_target,
        }
    }
}
