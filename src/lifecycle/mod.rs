//! # System Lifecycle
//!
//! Starts the reference stores, wires them into the food service, and shuts them
//! down again.
//!
//! ## Wiring
//!
//! ```rust,ignore
//! let (person_actor, person_client) = person_actor::new(capacity);
//! let (food_actor, food_client) = food_actor::new(capacity, store_capacity);
//!
//! tokio::spawn(person_actor.run());
//! tokio::spawn(food_actor.run());
//!
//! let service = FoodService::new(person_client, food_client);
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of each mailbox
//! 2. **Stores detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - Wait for both store tasks to finish

pub mod food_system;

pub use food_system::*;
