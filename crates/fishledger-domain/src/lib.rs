//! Domain models and services for fish-market transaction bookkeeping
//!
//! The calculation engine in [`service`] is pure: it holds no state, performs
//! no I/O and never fails. Input validation lives at the boundary
//! ([`service::validation`]) and is not invoked by the engine itself.

pub mod model;
pub mod repository;
pub mod service;

pub use model::{CalculationDefaults, CalculationInput, CalculationResult};
pub use service::calculate_transaction;
