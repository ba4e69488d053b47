//! Pure data structures (DTOs) implementing the [`Record`](crate::framework::Record) trait.

pub mod food;
pub mod person;

pub use food::*;
pub use person::*;
