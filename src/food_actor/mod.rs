//! # Food Store
//!
//! The reference food persistence layer: a [`RecordActor`] holding [`FoodEntry`]
//! records, reached through a [`FoodClient`].
//!
//! IDs are assigned sequentially from 1 and `list_all_food` returns entries in
//! insertion order. When a capacity is configured, inserts past it are rejected,
//! which the food service reports as a persistence failure.

pub mod entity;

use crate::clients::FoodClient;
use crate::framework::RecordActor;
use crate::model::FoodEntry;

/// Creates a new FoodEntry store actor and its client.
///
/// `capacity` bounds how many entries the store accepts; `None` is unbounded.
pub fn new(buffer_size: usize, capacity: Option<usize>) -> (RecordActor<FoodEntry>, FoodClient) {
    let (actor, generic_client) = RecordActor::new(buffer_size);
    (actor.with_capacity(capacity), FoodClient::new(generic_client))
}
