//! # Observability & Tracing
//!
//! Structured logging for the whole service.
//!
//! `RUST_LOG` wins when set. Otherwise the filter configured through
//! [`Config::log_filter`](crate::config::Config) is used.
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! ```
//!
//! With `RUST_LOG=debug` a food submission reads roughly like:
//!
//! ```text
//! DEBUG add_food_entry: add_food_entry called entry=FoodEntry { .. }
//! DEBUG add_food_entry:lookup_person: Get record_type="Person" id=person_1 found=true
//! DEBUG add_food_entry:store_food: Insert record_type="FoodEntry" params=FoodEntry { .. }
//! INFO add_food_entry: Food entry added food_id=food_1
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `default_filter` applies only when `RUST_LOG` is unset or unparseable.
pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // record_type field already says where a line comes from
        .compact()
        .init();
}
