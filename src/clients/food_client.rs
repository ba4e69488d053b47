//! # Food Client
//!
//! Provides a high‑level API for interacting with the `FoodEntry` store.
//! It wraps a `RecordClient<FoodEntry>` and implements [`FoodStore`].
use crate::clients::{FoodStore, StoreError};
use crate::framework::RecordClient;
use crate::model::{FoodEntry, FoodId};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the FoodEntry store.
#[derive(Clone)]
pub struct FoodClient {
    inner: RecordClient<FoodEntry>,
}

impl FoodClient {
    pub fn new(inner: RecordClient<FoodEntry>) -> Self {
        Self { inner }
    }

    /// Fetch a stored entry by ID.
    #[instrument(skip(self))]
    pub async fn get_food(&self, id: FoodId) -> Result<Option<FoodEntry>, StoreError> {
        debug!("Sending request");
        self.inner.get(id).await.map_err(StoreError::from)
    }
}

#[async_trait]
impl FoodStore for FoodClient {
    #[instrument(skip(self, entry))]
    async fn store_food(&self, entry: FoodEntry) -> Result<FoodId, StoreError> {
        debug!(?entry, "Sending request");
        self.inner.insert(entry).await.map_err(StoreError::from)
    }

    #[instrument(skip(self))]
    async fn list_all_food(&self) -> Result<Vec<FoodEntry>, StoreError> {
        debug!("Sending request");
        self.inner.list().await.map_err(StoreError::from)
    }
}
