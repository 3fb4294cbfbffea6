use derive_builder::Builder;
use range_filter_shared_kernel::{AttributeId, DomainError, DomainResult, ParamName};
use serde::{Deserialize, Deserializer, Serialize};

use crate::config::BoundMode;

/// Immutable settings of one range filter instance.
///
/// Field aliases accept the column names used by older settings tables
/// (`attr_id`, `moreequal`, ...), so exported rows can be loaded as-is.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct FilterSettingConfig {
    #[serde(alias = "attr_id")]
    pub primary_attribute_id: AttributeId,
    /// Upper-bound column's attribute. Falls back to the primary attribute.
    #[builder(setter(into, strip_option), default)]
    #[serde(default, alias = "attr_id2", deserialize_with = "zero_as_none")]
    pub secondary_attribute_id: Option<AttributeId>,
    #[builder(setter(strip_option), default)]
    #[serde(default, alias = "urlparam", deserialize_with = "blank_param_as_none")]
    pub url_param_override: Option<ParamName>,
    #[builder(setter(into, strip_option), default)]
    #[serde(default, deserialize_with = "blank_as_none")]
    pub label: Option<String>,
    #[builder(default)]
    #[serde(default, alias = "moreequal", deserialize_with = "flag")]
    pub lower_inclusive: bool,
    #[builder(default)]
    #[serde(default, alias = "lessequal", deserialize_with = "flag")]
    pub upper_inclusive: bool,
    #[builder(default)]
    #[serde(default, alias = "onlypossible", deserialize_with = "flag")]
    pub restrict_to_possible_values: bool,
    #[builder(default)]
    #[serde(default, alias = "onlyused", deserialize_with = "flag")]
    pub restrict_to_used_values: bool,
    #[builder(setter(into, strip_option), default)]
    #[serde(default, alias = "template", deserialize_with = "blank_as_none")]
    pub widget_template: Option<String>,
    #[builder(default)]
    #[serde(default)]
    pub bound_mode: BoundMode,
}

impl FilterSettingConfig {
    pub fn builder() -> FilterSettingConfigBuilder {
        FilterSettingConfigBuilder::default()
    }

    /// Attribute backing the upper-bound column.
    pub fn effective_secondary_id(&self) -> AttributeId {
        self.secondary_attribute_id.unwrap_or(self.primary_attribute_id)
    }

    /// Checks a deserialized setting the same way the builder does.
    pub fn validate(&self) -> DomainResult<()> {
        check_primary(self.primary_attribute_id)
            .and_then(|()| check_label(self.label.as_deref()))
            .map_err(|reason| DomainError::InvalidConfiguration { reason })
    }
}

impl FilterSettingConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(id) = self.primary_attribute_id {
            check_primary(id)?;
        }
        if let Some(Some(label)) = &self.label {
            check_label(Some(label))?;
        }
        Ok(())
    }
}

impl From<FilterSettingConfigBuilderError> for DomainError {
    fn from(err: FilterSettingConfigBuilderError) -> Self {
        Self::InvalidConfiguration { reason: err.to_string() }
    }
}

fn check_primary(id: AttributeId) -> Result<(), String> {
    if id.value() == 0 {
        return Err("primary attribute is not configured".to_string());
    }
    Ok(())
}

fn check_label(label: Option<&str>) -> Result<(), String> {
    match label {
        Some(text) if text.trim().is_empty() => Err("label must not be blank".to_string()),
        _ => Ok(()),
    }
}

fn zero_as_none<'de, D>(deserializer: D) -> Result<Option<AttributeId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<u32>::deserialize(deserializer)?;
    Ok(raw.filter(|id| *id != 0).map(AttributeId::new))
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

fn blank_param_as_none<'de, D>(deserializer: D) -> Result<Option<ParamName>, D::Error>
where
    D: Deserializer<'de>,
{
    blank_as_none(deserializer)?
        .map(ParamName::new)
        .transpose()
        .map_err(serde::de::Error::custom)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Int(i64),
    Text(String),
}

fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(n) => n != 0,
        Flag::Text(s) => !matches!(s.trim(), "" | "0" | "false"),
    })
}
