//! Record trait implementation for the Person domain type.
//!
//! Enables [`Person`] to be kept by the generic [`crate::framework::RecordActor`].

use crate::framework::Record;
use crate::model::{Person, PersonCreate, PersonId};

impl Record for Person {
    type Id = PersonId;
    type Insert = PersonCreate;

    /// Creates a new Person from registration parameters.
    fn from_insert(id: PersonId, params: PersonCreate) -> Self {
        Self::new(
            id,
            params.name,
            params.age,
            params.height,
            params.weight,
            params.daily_calorie_target,
        )
    }
}
