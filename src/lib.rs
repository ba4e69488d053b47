//! # Food Diary
//!
//! Validates and records a person's logged meals.
//!
//! The decision logic lives in [`food_service`]: a [`FoodService`](food_service::FoodService)
//! checks a candidate [`FoodEntry`](model::FoodEntry), confirms the owning person exists, hands
//! the entry to a store, and reports the outcome. Everything it talks to is injected through
//! the traits in [`clients`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: `FoodEntry`, `Person` and their identifier types.
//! - [`food_service`]: The validator and the orchestrator.
//! - [`clients`]: Collaborator traits (`PersonLookup`, `FoodStore`) and the store-backed clients.
//! - [`framework`]: The in-memory record store runtime behind those clients.
//! - [`person_actor`], [`food_actor`]: Store factories for each record type.
//! - [`lifecycle`]: [`FoodSystem`](lifecycle::FoodSystem), which starts and wires everything.
//! - [`mock`]: Expectation-based doubles for the collaborator traits.
//! - [`config`]: Environment-driven settings.
//!
//! ## 🚀 Running
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod clients;
pub mod config;
pub mod food_actor;
pub mod food_service;
pub mod framework;
pub mod lifecycle;
pub mod mock;
pub mod model;
pub mod person_actor;
