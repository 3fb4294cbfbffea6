// crates/ports/src/options.rs
use std::collections::BTreeSet;

use range_filter_domain::{AttributeDescriptor, FilterOption};
use range_filter_shared_kernel::RowId;

/// Port listing the selectable values of an attribute.
pub trait OptionLister {
    /// Options in display order.
    ///
    /// `restrict_to` limits the listing to values held by those records;
    /// `only_used` drops values no record holds.
    fn filter_options(
        &self,
        attribute: &AttributeDescriptor,
        restrict_to: Option<&BTreeSet<RowId>>,
        only_used: bool,
    ) -> Vec<FilterOption>;
}
