use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// One selectable value of an attribute, as listed by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }
}

fn markup() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<!--.*?-->|<\?.*?\?>|<[^\s<>][^>]*>").unwrap())
}

/// Removes tags, comments and processing instructions, then trims.
pub fn strip_markup(text: &str) -> String {
    markup().replace_all(text, "").trim().to_string()
}

/// Strips markup from both sides of every option and drops those left empty.
pub fn sanitize_options(options: impl IntoIterator<Item = FilterOption>) -> Vec<FilterOption> {
    options
        .into_iter()
        .filter_map(|option| {
            let value = strip_markup(&option.value);
            let label = strip_markup(&option.label);
            (!value.is_empty() && !label.is_empty()).then_some(FilterOption { value, label })
        })
        .collect()
}
