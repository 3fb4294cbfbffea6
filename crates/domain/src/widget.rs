//! Front-end metadata: widget descriptors, option clean-up and the per-request
//! list of active filter parameters.

pub mod active_params;
pub mod descriptor;
pub mod sanitize;

pub use active_params::ActiveFilterParams;
pub use descriptor::{InputType, NavigationContext, WidgetConfig, WidgetDescriptor};
pub use sanitize::{FilterOption, sanitize_options, strip_markup};
