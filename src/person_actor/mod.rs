//! # Person Store
//!
//! The reference person registry: a [`RecordActor`] holding [`Person`] records,
//! reached through a [`PersonClient`].
//!
//! ## Usage
//!
//! ```rust
//! use food_diary::clients::PersonLookup;
//! use food_diary::model::PersonCreate;
//! use food_diary::person_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = person_actor::new(32);
//!     tokio::spawn(actor.run());
//!
//!     let params = PersonCreate {
//!         name: "Marcy".to_string(),
//!         age: 23,
//!         height: 157.0,
//!         weight: 47.0,
//!         daily_calorie_target: 2000,
//!     };
//!     let id = client.add_person(params).await?;
//!     assert!(client.lookup_person(id).await?.is_some());
//!     Ok(())
//! }
//! ```

pub mod entity;

use crate::clients::PersonClient;
use crate::framework::RecordActor;
use crate::model::Person;

/// Creates a new Person store actor and its client.
pub fn new(buffer_size: usize) -> (RecordActor<Person>, PersonClient) {
    let (actor, generic_client) = RecordActor::new(buffer_size);
    (actor, PersonClient::new(generic_client))
}
