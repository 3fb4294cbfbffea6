use std::collections::{BTreeMap, BTreeSet};

use range_filter_domain::{AttributeDescriptor, FilterOption};
use range_filter_ports::{AttributeResolver, OptionLister};
use range_filter_shared_kernel::{AttributeId, RowId, TableName};

/// Data collection held in memory: attribute definitions, per-attribute
/// declared options and the stored value of each record.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    table: TableName,
    attributes: BTreeMap<AttributeId, AttributeDescriptor>,
    declared: BTreeMap<AttributeId, Vec<FilterOption>>,
    rows: BTreeMap<RowId, BTreeMap<AttributeId, String>>,
}

impl InMemoryCatalog {
    pub fn new(table: TableName) -> Self {
        Self { table, attributes: BTreeMap::new(), declared: BTreeMap::new(), rows: BTreeMap::new() }
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: AttributeDescriptor) -> Self {
        self.insert_attribute(attribute);
        self
    }

    pub fn insert_attribute(&mut self, attribute: AttributeDescriptor) {
        self.attributes.insert(attribute.id, attribute);
    }

    /// Options offered for `id` regardless of stored values, in display order.
    pub fn declare_options(&mut self, id: AttributeId, options: Vec<FilterOption>) {
        self.declared.insert(id, options);
    }

    pub fn insert_row(&mut self, id: RowId, values: impl IntoIterator<Item = (AttributeId, String)>) {
        self.rows.entry(id).or_default().extend(values);
    }

    pub fn attribute_id_for_column(&self, column: &str) -> Option<AttributeId> {
        self.attributes.values().find(|attribute| attribute.col_name.as_str() == column).map(|attribute| attribute.id)
    }

    fn stored_values(&self, id: AttributeId, restrict_to: Option<&BTreeSet<RowId>>) -> BTreeSet<&str> {
        self.rows
            .iter()
            .filter(|(row_id, _)| restrict_to.is_none_or(|ids| ids.contains(*row_id)))
            .filter_map(|(_, values)| values.get(&id).map(String::as_str))
            .collect()
    }
}

impl AttributeResolver for InMemoryCatalog {
    fn table_name(&self) -> &TableName {
        &self.table
    }

    fn attribute_by_id(&self, id: AttributeId) -> Option<AttributeDescriptor> {
        self.attributes.get(&id).cloned()
    }
}

impl OptionLister for InMemoryCatalog {
    /// Declared options when the attribute has any, otherwise the distinct
    /// stored values labelled by themselves.
    fn filter_options(
        &self,
        attribute: &AttributeDescriptor,
        restrict_to: Option<&BTreeSet<RowId>>,
        only_used: bool,
    ) -> Vec<FilterOption> {
        let stored = self.stored_values(attribute.id, restrict_to);
        match self.declared.get(&attribute.id) {
            Some(declared) if only_used || restrict_to.is_some() => declared
                .iter()
                .filter(|option| stored.contains(option.value.as_str()))
                .cloned()
                .collect(),
            Some(declared) => declared.clone(),
            None => stored.into_iter().map(|value| FilterOption::new(value, value)).collect(),
        }
    }
}
