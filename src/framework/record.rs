//! # Record Trait
//!
//! The `Record` trait is the contract every stored type (Person, FoodEntry) implements to be
//! kept by the generic [`RecordActor`](crate::framework::RecordActor). It names the identifier
//! type and the insert payload, and says how a freshly assigned identifier is stamped into the
//! stored value.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any stored record must implement to be managed by `RecordActor`.
///
/// Associated types keep the store type-safe: a `Person` store takes a `PersonCreate`
/// payload, and a `FoodEntry` payload can't be sent to it.
pub trait Record: Clone + Send + Sync + 'static {
    /// The unique identifier for this record.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to insert a new record.
    type Insert: Send + Sync + Debug;

    /// Construct the stored record from its assigned ID and the insert payload.
    fn from_insert(id: Self::Id, params: Self::Insert) -> Self;
}
