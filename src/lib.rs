//! Range filter translator.
//!
//! A range filter reads one request parameter of the form `lower__upper`,
//! resolves the two attributes whose columns bound each record, and emits a
//! single parameterized predicate selecting the records whose columns bracket
//! the supplied value. Bad input never fails: it yields a rule that selects
//! nothing.
//!
//! The host system is reached through the [`ports`] traits; [`infra`] ships
//! in-memory adapters and settings-file loading.

#![allow(clippy::multiple_crate_versions)]

pub use range_filter_domain as domain;
pub use range_filter_infra as infra;
pub use range_filter_ports as ports;
pub use range_filter_shared_kernel as shared;
pub use range_filter_usecase as usecase;

pub use range_filter_domain::{
    ActiveFilterParams, AttributeDescriptor, AttributeType, BoundMode, DateFormat, FilterOption, FilterRule,
    FilterSettingConfig, NavigationContext, PredicateFragment, RawFilterInput, RawValue, WidgetDescriptor,
};
pub use range_filter_ports::{AttributeResolver, FilterRuleAggregator, OptionLister};
pub use range_filter_shared_kernel::{
    AttributeId, ColumnName, ParamName, RangeFilterError, Result, RowId, Scalar, TableName,
};
pub use range_filter_usecase::RangeFilter;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
