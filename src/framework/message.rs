//! # Generic Messages
//!
//! Message types exchanged between [`RecordClient`](crate::framework::RecordClient) and
//! [`RecordActor`](crate::framework::RecordActor).

use crate::framework::error::FrameworkError;
use crate::framework::record::Record;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a record actor.
///
/// The store is append-only: records are inserted, read back by ID, or listed in
/// insertion order. There is no update or delete.
#[derive(Debug)]
pub enum RecordRequest<T: Record> {
    Insert {
        params: T::Insert,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
}
