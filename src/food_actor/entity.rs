//! Record trait implementation for the FoodEntry domain type.

use crate::framework::Record;
use crate::model::{FoodEntry, FoodId};

impl Record for FoodEntry {
    type Id = FoodId;
    type Insert = FoodEntry;

    /// Stores the submitted entry as-is, stamped with its assigned ID.
    fn from_insert(id: FoodId, params: FoodEntry) -> Self {
        params.with_id(id)
    }
}
