//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: the range filter, driving decoding, coercion and
//!   predicate construction against the host ports
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod orchestrator;

pub use orchestrator::RangeFilter;
