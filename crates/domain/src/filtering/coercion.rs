use log::warn;
use range_filter_shared_kernel::Scalar;
use thiserror::Error;

use crate::attribute::{AttributeType, DateFormat};

/// Why a raw bound could not become a bind value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoercionError {
    #[error("bound is empty")]
    Empty,

    #[error("'{raw}' does not match date format '{pattern}': {details}")]
    Unparsable { raw: String, pattern: String, details: String },
}

/// Converts one raw bound into a value comparable with the attribute's column.
///
/// Non-temporal types pass through as text; temporal types are read with
/// `format` and become epoch seconds.
pub fn try_coerce(raw: &str, value_type: &AttributeType, format: &DateFormat) -> Result<Scalar, CoercionError> {
    if raw.is_empty() {
        return Err(CoercionError::Empty);
    }
    if !value_type.is_temporal() {
        return Ok(Scalar::text(raw));
    }
    format
        .parse_timestamp(raw)
        .map(Scalar::Integer)
        .map_err(|err| CoercionError::Unparsable {
            raw: raw.to_string(),
            pattern: format.pattern().to_string(),
            details: err.to_string(),
        })
}

/// Collapses a coercion outcome into an optional bound.
///
/// Request input never fails a filter: any error here only removes the bound,
/// and the predicate builder then decides whether a fallback applies.
pub fn settle_bound(outcome: Result<Scalar, CoercionError>) -> Option<Scalar> {
    match outcome {
        Ok(value) => Some(value),
        Err(CoercionError::Empty) => None,
        Err(err) => {
            warn!("dropping range bound: {err}");
            None
        }
    }
}

/// [`try_coerce`] followed by [`settle_bound`]; absent input stays absent.
pub fn coerce(raw: Option<&str>, value_type: &AttributeType, format: &DateFormat) -> Option<Scalar> {
    raw.map(|raw| try_coerce(raw, value_type, format)).and_then(settle_bound)
}
