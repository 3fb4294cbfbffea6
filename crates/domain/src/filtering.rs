//! Decoding, coercion and predicate construction for one range filter.

pub mod codec;
pub mod coercion;
pub mod input;
pub mod predicate;

pub use codec::{DecodedBounds, RANGE_DELIMITER, decode};
pub use coercion::{CoercionError, coerce, settle_bound, try_coerce};
pub use input::{RawFilterInput, RawValue};
pub use predicate::{ColumnPair, Comparator, FilterRule, PredicateBuilder, PredicateFragment, ResolvedBound};
