use std::{convert::Infallible, fmt, str::FromStr};

use range_filter_shared_kernel::{AttributeId, ColumnName};
use serde::{Deserialize, Serialize};

use super::DateFormat;

/// Declared value type of an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AttributeType {
    Text,
    Numeric,
    Timestamp,
    Other(String),
}

impl AttributeType {
    /// Temporal attributes store epoch seconds and get their bounds parsed as dates.
    pub const fn is_temporal(&self) -> bool {
        matches!(self, Self::Timestamp)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Numeric => "numeric",
            Self::Timestamp => "timestamp",
            Self::Other(tag) => tag,
        }
    }
}

impl FromStr for AttributeType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "text" | "longtext" => Self::Text,
            "numeric" | "decimal" => Self::Numeric,
            "timestamp" => Self::Timestamp,
            other => Self::Other(other.to_string()),
        })
    }
}

impl From<String> for AttributeType {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl From<AttributeType> for String {
    fn from(value: AttributeType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attribute as resolved from the host, read once per lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDescriptor {
    pub id: AttributeId,
    pub col_name: ColumnName,
    /// Display name used as the default filter label.
    pub name: String,
    pub value_type: AttributeType,
    #[serde(default)]
    pub date_format: DateFormat,
}

impl AttributeDescriptor {
    pub fn new(id: impl Into<AttributeId>, col_name: ColumnName, name: impl Into<String>, value_type: AttributeType) -> Self {
        Self {
            id: id.into(),
            col_name,
            name: name.into(),
            value_type,
            date_format: DateFormat::default(),
        }
    }

    #[must_use]
    pub fn with_date_format(mut self, date_format: DateFormat) -> Self {
        self.date_format = date_format;
        self
    }
}
