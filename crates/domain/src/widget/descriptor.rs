use range_filter_shared_kernel::ParamName;
use serde::{Deserialize, Serialize};

use super::FilterOption;

/// Input control the front-end renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    #[default]
    Text,
}

/// Page-level navigation data passed through to the renderer untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationContext {
    pub jump_to: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    pub url_param_name: ParamName,
    pub template: Option<String>,
    pub help_wizard_enabled: bool,
}

/// Everything a renderer needs to draw the filter's input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetDescriptor {
    /// Display label followed by a hint naming the request parameter.
    pub label: [String; 2],
    pub input_type: InputType,
    pub config: WidgetConfig,
    pub options: Vec<FilterOption>,
    /// Current lower/upper sub-values, `None` when the request carries neither.
    pub value: Option<[String; 2]>,
    pub navigation: NavigationContext,
}

impl WidgetDescriptor {
    pub fn label_hint(param: &ParamName) -> String {
        format!("GET: {param}")
    }
}
