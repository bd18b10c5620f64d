//! Service layer module.
//!
//! Contains capacity estimation and batch generation.

pub mod capacity;
pub mod factory;
pub mod generator;

pub use capacity::{Capacity, CapacityEstimator, DEFAULT_MAX_CODES};
pub use factory::CodeFactory;
pub use generator::{BatchGenerator, MAX_PREALLOCATED, RETRY_BASE, RETRY_PERCENT, retry_budget};
