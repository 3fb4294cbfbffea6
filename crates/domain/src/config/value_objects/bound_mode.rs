use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How decoded bounds are bound into the range predicate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundMode {
    /// The lower bound is bound to both placeholders; the upper bound is ignored.
    ///
    /// This is the long-standing behavior of the range filter and stays the default
    /// so existing pages keep selecting the same records.
    #[default]
    ReuseLower,
    /// The upper bound is compared with the upper column and the lower bound with
    /// the lower column. A missing side reuses the present one.
    Distinct,
}

impl FromStr for BoundMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reuse_lower" | "reuse-lower" | "single" => Ok(Self::ReuseLower),
            "distinct" | "pair" => Ok(Self::Distinct),
            other => Err(format!("unknown bound mode: {other}")),
        }
    }
}
