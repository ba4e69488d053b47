//! # Person Client
//!
//! Provides a high‑level API for interacting with the `Person` store.
//! It wraps a `RecordClient<Person>` and implements [`PersonLookup`].
use crate::clients::{PersonLookup, StoreError};
use crate::framework::RecordClient;
use crate::model::{Person, PersonCreate, PersonId};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Person store.
#[derive(Clone)]
pub struct PersonClient {
    inner: RecordClient<Person>,
}

impl PersonClient {
    pub fn new(inner: RecordClient<Person>) -> Self {
        Self { inner }
    }

    /// Registers a person and returns the assigned ID.
    #[instrument(skip(self))]
    pub async fn add_person(&self, params: PersonCreate) -> Result<PersonId, StoreError> {
        debug!("Sending request");
        self.inner.insert(params).await.map_err(StoreError::from)
    }
}

#[async_trait]
impl PersonLookup for PersonClient {
    #[instrument(skip(self))]
    async fn lookup_person(&self, id: PersonId) -> Result<Option<Person>, StoreError> {
        debug!("Sending request");
        self.inner.get(id).await.map_err(StoreError::from)
    }
}
