//! # Food Service
//!
//! Decides whether a proposed food entry is acceptable and records it.
//!
//! ## Order of checks
//!
//! [`FoodService::add_food_entry`] runs, and stops at, the first failing step:
//!
//! 1. Owning person ID present, else `MissingReference("person id is invalid")`.
//!    No collaborator is called.
//! 2. Name, calories, week (see [`validation`]), else `InvalidRequest`.
//!    No collaborator is called.
//! 3. One [`PersonLookup::lookup_person`] call; unknown person is
//!    `MissingReference("person not found (id N)")`.
//! 4. One [`FoodStore::store_food`] call with the entry exactly as submitted.
//! 5. The store's ID is returned verbatim; a store failure is `PersistenceFailure`
//!    and is not retried.
//!
//! ## Structure
//!
//! - [`validation`] - pure field checks
//! - [`error`] - [`FoodError`] and [`ErrorKind`]
//!
//! ```rust
//! use food_diary::food_service::FoodService;
//! use food_diary::mock::{MockFoodStore, MockPersonLookup};
//! use food_diary::model::{Day, FoodEntry, FoodId, MealType, Person, PersonId};
//!
//! #[tokio::main]
//! async fn main() {
//!     let people = MockPersonLookup::new();
//!     people
//!         .expect_lookup(PersonId(1))
//!         .return_ok(Some(Person::new(PersonId(1), "marcy", 23, 157.0, 47.0, 2000)));
//!     let foods = MockFoodStore::new();
//!     foods.expect_store().return_ok(FoodId(1));
//!
//!     let service = FoodService::new(people.clone(), foods.clone());
//!     let entry = FoodEntry::new(
//!         Some(FoodId(1)), Some(PersonId(1)), Some("toast"), Some(MealType::Breakfast),
//!         Some("random"), Some(50), Some(1), Some(Day::Monday),
//!     );
//!     assert_eq!(service.add_food_entry(entry).await.unwrap(), FoodId(1));
//!
//!     people.verify();
//!     foods.verify();
//! }
//! ```

pub mod error;
pub mod validation;

pub use error::*;

use crate::clients::{FoodStore, PersonLookup};
use crate::model::{FoodEntry, FoodId, PersonId};
use tracing::{debug, error, info, instrument, warn};

/// Message carried by every persistence failure.
pub const ADD_FAILED: &str = "Could not add food...";

/// Message carried when the owning person is unknown to the lookup.
pub const PERSON_NOT_FOUND: &str = "person not found";

/// Validates and records food entries against injected collaborators.
///
/// Holds no state of its own between calls. Cloning clones the collaborator handles.
#[derive(Clone)]
pub struct FoodService<P, S> {
    people: P,
    foods: S,
}

impl<P, S> FoodService<P, S>
where
    P: PersonLookup,
    S: FoodStore,
{
    pub fn new(people: P, foods: S) -> Self {
        Self { people, foods }
    }

    /// Validates `entry`, confirms its owner exists, and stores it.
    ///
    /// Returns the ID the store assigned.
    #[instrument(skip(self, entry))]
    pub async fn add_food_entry(&self, entry: FoodEntry) -> Result<FoodId, FoodError> {
        debug!(?entry, "add_food_entry called");

        let person_id = validation::require_person_id(&entry).inspect_err(log_rejection)?;
        validation::validate_fields(&entry).inspect_err(log_rejection)?;

        self.ensure_person_exists(person_id).await?;

        match self.foods.store_food(entry).await {
            Ok(food_id) => {
                info!(%food_id, %person_id, "Food entry added");
                Ok(food_id)
            }
            Err(e) => {
                error!(%person_id, error = %e, "Store failed");
                Err(FoodError::PersistenceFailure(format!("{ADD_FAILED} ({e})")))
            }
        }
    }

    /// Every stored entry, exactly as the store returns them.
    #[instrument(skip(self))]
    pub async fn get_all_food_entries(&self) -> Result<Vec<FoodEntry>, FoodError> {
        let entries = self
            .foods
            .list_all_food()
            .await
            .map_err(|e| FoodError::Unavailable(e.to_string()))?;
        debug!(count = entries.len(), "Listed food entries");
        Ok(entries)
    }

    async fn ensure_person_exists(&self, person_id: PersonId) -> Result<(), FoodError> {
        match self.people.lookup_person(person_id).await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => {
                let err = FoodError::MissingReference(format!(
                    "{PERSON_NOT_FOUND} (id {})",
                    person_id.0
                ));
                log_rejection(&err);
                Err(err)
            }
            Err(e) => {
                error!(%person_id, error = %e, "Person lookup failed");
                Err(FoodError::Unavailable(e.to_string()))
            }
        }
    }
}

fn log_rejection(e: &FoodError) {
    warn!(kind = ?e.kind(), error = %e, "Food entry rejected");
}
