// crates/ports/src/attributes.rs
use range_filter_domain::AttributeDescriptor;
use range_filter_shared_kernel::{AttributeId, TableName};

/// Port onto the data collection whose records are being filtered.
pub trait AttributeResolver {
    /// Table backing the collection.
    fn table_name(&self) -> &TableName;

    /// `None` when the id does not name an attribute of this collection.
    fn attribute_by_id(&self, id: AttributeId) -> Option<AttributeDescriptor>;
}
