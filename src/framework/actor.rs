//! # Generic Record Actor
//!
//! This module defines the `RecordActor`, the server half of a record store. It owns the
//! records and processes requests sequentially, so the store needs no locks.

use crate::framework::client::RecordClient;
use crate::framework::error::FrameworkError;
use crate::framework::message::RecordRequest;
use crate::framework::record::Record;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that keeps an append-only collection of records.
///
/// # Implementation Details
///
/// Records are kept in a `Vec` in insertion order, with a `HashMap` index from ID to
/// position. IDs are generated from a `u32` counter starting at 1.
///
/// * **Insert**:
///     1. Rejects the request if the optional capacity is already reached, or if the
///        counter cannot advance past `u32::MAX`.
///     2. Takes the next ID from the counter and converts it to `T::Id`.
///     3. Builds the record with `T::from_insert` and appends it.
///     4. Returns the new ID.
///
/// * **Get**: returns a clone of the record, or `None`.
///
/// * **List**: returns clones of every record in insertion order.
pub struct RecordActor<T: Record> {
    receiver: mpsc::Receiver<RecordRequest<T>>,
    records: Vec<T>,
    index: HashMap<T::Id, usize>,
    next_id: u32,
    capacity: Option<usize>,
}

impl<T: Record> RecordActor<T> {
    /// Creates a new `RecordActor` and its associated `RecordClient`.
    ///
    /// `buffer_size` is the capacity of the mailbox. If the mailbox is full,
    /// calls on the client wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, RecordClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            records: Vec::new(),
            index: HashMap::new(),
            next_id: 1,
            capacity: None,
        };
        (actor, RecordClient::new(sender))
    }

    /// Limits how many records the store accepts. `None` means unbounded.
    pub fn with_capacity(mut self, capacity: Option<usize>) -> Self {
        self.capacity = capacity;
        self
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        let record_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(record_type, capacity = ?self.capacity, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                RecordRequest::Insert { params, respond_to } => {
                    debug!(record_type, ?params, "Insert");
                    if let Some(capacity) = self.capacity {
                        if self.records.len() >= capacity {
                            warn!(record_type, capacity, "Insert rejected, store is full");
                            let _ = respond_to.send(Err(FrameworkError::Rejected(format!(
                                "store is full (capacity {capacity})"
                            ))));
                            continue;
                        }
                    }

                    let Some(following) = self.next_id.checked_add(1) else {
                        warn!(record_type, "Insert rejected, id space exhausted");
                        let _ = respond_to.send(Err(FrameworkError::Rejected(
                            "id space exhausted".to_string(),
                        )));
                        continue;
                    };
                    let id = T::Id::from(self.next_id);
                    self.next_id = following;

                    let record = T::from_insert(id.clone(), params);
                    self.index.insert(id.clone(), self.records.len());
                    self.records.push(record);
                    info!(record_type, %id, size = self.records.len(), "Inserted");
                    let _ = respond_to.send(Ok(id));
                }
                RecordRequest::Get { id, respond_to } => {
                    let record = self
                        .index
                        .get(&id)
                        .and_then(|&position| self.records.get(position))
                        .cloned();
                    debug!(record_type, %id, found = record.is_some(), "Get");
                    let _ = respond_to.send(Ok(record));
                }
                RecordRequest::List { respond_to } => {
                    debug!(record_type, size = self.records.len(), "List");
                    let _ = respond_to.send(Ok(self.records.clone()));
                }
            }
        }

        info!(record_type, size = self.records.len(), "Shutdown");
    }
}
