//! # Collaborators
//!
//! The food service talks to two outside collaborators through the traits defined here:
//!
//! - [`PersonLookup`]: confirms the owning person exists.
//! - [`FoodStore`]: persists entries and lists them back.
//!
//! [`PersonClient`] and [`FoodClient`] implement them on top of the in-memory
//! [`RecordActor`](crate::framework::RecordActor). The [`mock`](crate::mock) module
//! provides expectation-based doubles for tests.

pub mod error;
pub mod food_client;
pub mod person_client;

pub use error::*;
pub use food_client::*;
pub use person_client::*;

use crate::model::{FoodEntry, FoodId, Person, PersonId};
use async_trait::async_trait;

/// Read-only access to registered people.
#[async_trait]
pub trait PersonLookup: Send + Sync {
    /// Fetch a person by ID. `Ok(None)` means no such person.
    async fn lookup_person(&self, id: PersonId) -> Result<Option<Person>, StoreError>;
}

/// Persistence for food entries.
#[async_trait]
pub trait FoodStore: Send + Sync {
    /// Persist an entry and return its assigned ID.
    ///
    /// `Err(StoreError::Rejected)` means the entry was not stored.
    async fn store_food(&self, entry: FoodEntry) -> Result<FoodId, StoreError>;

    /// Every stored entry, in storage order.
    async fn list_all_food(&self) -> Result<Vec<FoodEntry>, StoreError>;
}
