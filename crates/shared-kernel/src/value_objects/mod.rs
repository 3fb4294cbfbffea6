// crates/shared-kernel/src/value_objects/mod.rs
pub mod identifiers;
pub mod scalar;

pub use identifiers::{AttributeId, ColumnName, ParamName, RowId, TableName};
pub use scalar::Scalar;
