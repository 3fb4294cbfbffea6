//! A small event catalog used across suites.

use range_filter::{
    AttributeDescriptor, AttributeId, AttributeType, ColumnName, DateFormat, FilterOption, FilterSettingConfig,
    RowId, TableName, infra::InMemoryCatalog,
};

pub const PRICE_FROM: AttributeId = AttributeId::new(1);
pub const PRICE_TO: AttributeId = AttributeId::new(2);
pub const STARTS: AttributeId = AttributeId::new(3);
pub const ENDS: AttributeId = AttributeId::new(4);
pub const MISSING: AttributeId = AttributeId::new(99);

fn column(name: &str) -> ColumnName {
    ColumnName::new(name).expect("fixture column is a valid identifier")
}

#[allow(dead_code)]
pub fn event_catalog() -> InMemoryCatalog {
    let date = DateFormat::from_php("d.m.Y").expect("fixture date format");
    let mut catalog = InMemoryCatalog::new(TableName::new("mm_events").expect("fixture table"))
        .with_attribute(AttributeDescriptor::new(PRICE_FROM, column("price_from"), "Price from", AttributeType::Numeric))
        .with_attribute(AttributeDescriptor::new(PRICE_TO, column("price_to"), "Price to", AttributeType::Numeric))
        .with_attribute(
            AttributeDescriptor::new(STARTS, column("starts"), "Start", AttributeType::Timestamp)
                .with_date_format(date.clone()),
        )
        .with_attribute(
            AttributeDescriptor::new(ENDS, column("ends"), "End", AttributeType::Timestamp).with_date_format(date),
        );
    catalog.declare_options(
        PRICE_FROM,
        vec![
            FilterOption::new("10", "<b>Ten</b>"),
            FilterOption::new("  ", "Blank"),
            FilterOption::new("20", "<i>Twenty</i>"),
            FilterOption::new("30", "<br>"),
            FilterOption::new("50", "Fifty"),
        ],
    );
    catalog.insert_row(RowId::new(1), [(PRICE_FROM, "10".to_string()), (PRICE_TO, "15".to_string())]);
    catalog.insert_row(RowId::new(2), [(PRICE_FROM, "20".to_string()), (PRICE_TO, "40".to_string())]);
    catalog
}

#[allow(dead_code)]
pub fn setting(primary: AttributeId, secondary: Option<AttributeId>) -> FilterSettingConfig {
    let mut builder = FilterSettingConfig::builder();
    builder.primary_attribute_id(primary);
    if let Some(id) = secondary {
        builder.secondary_attribute_id(id);
    }
    builder.build().expect("fixture setting is valid")
}
