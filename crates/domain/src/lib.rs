#![allow(clippy::multiple_crate_versions)]

pub mod attribute;
pub mod config;
pub mod filtering;
pub mod widget;

pub use attribute::{AttributeDescriptor, AttributeType, DateFormat};
pub use config::{BoundMode, FilterSettingConfig, FilterSettingConfigBuilder};
pub use filtering::{
    ColumnPair, Comparator, DecodedBounds, FilterRule, PredicateBuilder, PredicateFragment, RawFilterInput,
    RawValue, ResolvedBound,
};
pub use widget::{ActiveFilterParams, FilterOption, NavigationContext, WidgetDescriptor};
