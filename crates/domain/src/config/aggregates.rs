pub mod filter_setting;

pub use filter_setting::{FilterSettingConfig, FilterSettingConfigBuilder};
