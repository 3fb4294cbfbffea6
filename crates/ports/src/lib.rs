//! # Ports
//!
//! Interface definitions for the host system around a range filter.
//!
//! - [`attributes`]: resolving attribute ids to typed descriptors
//! - [`options`]: listing selectable values of an attribute
//! - [`rules`]: collecting the rule a filter emits
//!
//! These ports keep the filter independent of any particular host.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod attributes;
pub mod options;
pub mod rules;

pub use attributes::AttributeResolver;
pub use options::OptionLister;
pub use rules::FilterRuleAggregator;
