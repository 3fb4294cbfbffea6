pub mod aggregates;
pub mod value_objects;

pub use aggregates::{FilterSettingConfig, FilterSettingConfigBuilder};
pub use value_objects::BoundMode;
