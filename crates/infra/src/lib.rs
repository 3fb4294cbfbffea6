// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod catalog;
pub mod persistence;

pub use catalog::InMemoryCatalog;
pub use persistence::{FileReader, read_catalog, read_settings};
