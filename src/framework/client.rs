//! # Generic Client
//!
//! The sending half of a record store.

use crate::framework::error::FrameworkError;
use crate::framework::message::RecordRequest;
use crate::framework::record::Record;
use tokio::sync::{mpsc, oneshot};

/// A type-safe, cloneable handle to a `RecordActor`.
///
/// Every call sends one request over the actor's mailbox and awaits the reply on a
/// oneshot channel. Cloning only clones the sender.
pub struct RecordClient<T: Record> {
    sender: mpsc::Sender<RecordRequest<T>>,
}

impl<T: Record> Clone for RecordClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Record> RecordClient<T> {
    pub fn new(sender: mpsc::Sender<RecordRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn insert(&self, params: T::Insert) -> Result<T::Id, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RecordRequest::Insert { params, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RecordRequest::Get { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RecordRequest::List { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
