//! # Record Store Runtime
//!
//! A small message-passing store: one Tokio task owns the records of one type, and any
//! number of cloned clients talk to it over a channel. It backs the reference
//! person and food collaborators.
//!
//! ## Key Types
//!
//! - [`Record`]: The trait every stored type implements.
//! - [`RecordActor`]: The task that owns the records.
//! - [`RecordClient`]: The cloneable handle used to reach it.
//! - [`FrameworkError`]: Runtime errors (closed actor, rejected insert).
//!
//! ```rust
//! use food_diary::framework::{Record, RecordActor};
//!
//! #[derive(Clone, Debug)]
//! struct Tag { id: u32, label: String }
//!
//! impl Record for Tag {
//!     type Id = u32;
//!     type Insert = String;
//!     fn from_insert(id: u32, label: String) -> Self { Self { id, label } }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = RecordActor::<Tag>::new(10);
//!     tokio::spawn(actor.run());
//!
//!     let id = client.insert("lunch".to_string()).await.unwrap();
//!     let tag = client.get(id).await.unwrap().unwrap();
//!     assert_eq!(tag.label, "lunch");
//! }
//! ```

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod record;
pub mod tracing;

pub use actor::RecordActor;
pub use client::RecordClient;
pub use error::FrameworkError;
pub use message::{RecordRequest, Response};
pub use record::Record;
