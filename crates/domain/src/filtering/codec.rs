use super::RawValue;

/// Separator between the lower and upper bound in a combined parameter.
pub const RANGE_DELIMITER: &str = "__";

/// Bounds as found in the request, before any type handling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedBounds {
    pub lower: Option<String>,
    pub upper: Option<String>,
}

impl DecodedBounds {
    pub const fn is_empty(&self) -> bool {
        self.lower.is_none() && self.upper.is_none()
    }

    /// Both parts as plain strings, absent parts rendered empty.
    pub fn to_pair(&self) -> [String; 2] {
        [self.lower.clone().unwrap_or_default(), self.upper.clone().unwrap_or_default()]
    }
}

/// Splits a raw parameter value into its two bounds.
///
/// Combined strings are split on the first [`RANGE_DELIMITER`] only, so an upper
/// part may itself contain the delimiter. Empty parts are treated as absent.
pub fn decode(raw: Option<&RawValue>) -> DecodedBounds {
    let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
    match raw {
        None => DecodedBounds::default(),
        Some(RawValue::Combined(value)) => {
            let mut parts = value.splitn(2, RANGE_DELIMITER);
            DecodedBounds {
                lower: parts.next().and_then(non_empty),
                upper: parts.next().and_then(non_empty),
            }
        }
        Some(RawValue::Split(parts)) => DecodedBounds {
            lower: parts.first().and_then(|s| non_empty(s)),
            upper: parts.get(1).and_then(|s| non_empty(s)),
        },
    }
}
