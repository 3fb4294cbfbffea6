//! Strongly typed view of the host's attribute records.

pub mod date_format;
pub mod descriptor;

pub use date_format::DateFormat;
pub use descriptor::{AttributeDescriptor, AttributeType};
