use std::fmt;

use log::{debug, trace};
use range_filter_shared_kernel::{ColumnName, RowId, Scalar, TableName};
use serde::{Deserialize, Serialize};

use crate::config::{BoundMode, FilterSettingConfig};

/// Comparison operator placed between a bind placeholder and a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparator {
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
}

impl Comparator {
    pub const fn for_lower(inclusive: bool) -> Self {
        if inclusive { Self::GreaterOrEqual } else { Self::Greater }
    }

    pub const fn for_upper(inclusive: bool) -> Self {
        if inclusive { Self::LessOrEqual } else { Self::Less }
    }

    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Greater => ">",
            Self::GreaterOrEqual => ">=",
            Self::Less => "<",
            Self::LessOrEqual => "<=",
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Columns holding each record's lower and upper reference value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnPair {
    pub lower: ColumnName,
    pub upper: ColumnName,
}

impl ColumnPair {
    pub const fn new(lower: ColumnName, upper: ColumnName) -> Self {
        Self { lower, upper }
    }

    /// Range over a single column: both comparisons hit the same column.
    pub fn single(column: ColumnName) -> Self {
        Self { lower: column.clone(), upper: column }
    }
}

/// Bounds after coercion. Both absent means the filter is inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedBound {
    pub lower: Option<Scalar>,
    pub upper: Option<Scalar>,
}

impl ResolvedBound {
    pub const fn new(lower: Option<Scalar>, upper: Option<Scalar>) -> Self {
        Self { lower, upper }
    }
}

/// Parameterized selection plus its positional bind values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredicateFragment {
    pub sql_template: String,
    pub bind_values: Vec<Scalar>,
}

impl fmt::Display for PredicateFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.sql_template)?;
        for (i, value) in self.bind_values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

/// Rule handed to the filter aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterRule {
    SimpleQuery(PredicateFragment),
    StaticIdList(Vec<RowId>),
}

impl FilterRule {
    /// Rule that matches no record at all.
    pub const fn select_nothing() -> Self {
        Self::StaticIdList(Vec::new())
    }

    pub fn is_select_nothing(&self) -> bool {
        matches!(self, Self::StaticIdList(ids) if ids.is_empty())
    }

    pub const fn as_query(&self) -> Option<&PredicateFragment> {
        match self {
            Self::SimpleQuery(fragment) => Some(fragment),
            Self::StaticIdList(_) => None,
        }
    }
}

/// Turns resolved columns and bounds into a [`FilterRule`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PredicateBuilder {
    pub lower_inclusive: bool,
    pub upper_inclusive: bool,
    pub bound_mode: BoundMode,
}

impl PredicateBuilder {
    pub const fn new(lower_inclusive: bool, upper_inclusive: bool) -> Self {
        Self { lower_inclusive, upper_inclusive, bound_mode: BoundMode::ReuseLower }
    }

    pub const fn from_config(config: &FilterSettingConfig) -> Self {
        Self {
            lower_inclusive: config.lower_inclusive,
            upper_inclusive: config.upper_inclusive,
            bound_mode: config.bound_mode,
        }
    }

    #[must_use]
    pub const fn with_bound_mode(mut self, bound_mode: BoundMode) -> Self {
        self.bound_mode = bound_mode;
        self
    }

    /// Builds the range predicate, or [`FilterRule::select_nothing`] when a
    /// column is missing or no usable bound is left.
    ///
    /// With [`BoundMode::ReuseLower`] the lower bound feeds both placeholders
    /// and an upper-only input counts as missing.
    pub fn build(&self, table: &TableName, columns: Option<&ColumnPair>, bounds: &ResolvedBound) -> FilterRule {
        let Some(columns) = columns else {
            debug!("range filter on {table}: column unresolved, selecting nothing");
            return FilterRule::select_nothing();
        };
        let Some((upper_value, lower_value)) = self.placeholder_values(bounds) else {
            debug!("range filter on {table}: no usable bound, selecting nothing");
            return FilterRule::select_nothing();
        };

        let sql_template = format!(
            "SELECT id FROM {table} WHERE (?{upper_cmp}{upper_col} AND ?{lower_cmp}{lower_col})",
            upper_cmp = Comparator::for_upper(self.upper_inclusive),
            upper_col = columns.upper,
            lower_cmp = Comparator::for_lower(self.lower_inclusive),
            lower_col = columns.lower,
        );
        trace!("range filter predicate: {sql_template}");
        FilterRule::SimpleQuery(PredicateFragment { sql_template, bind_values: vec![upper_value, lower_value] })
    }

    /// Values for the (upper column, lower column) placeholders, in that order.
    fn placeholder_values(&self, bounds: &ResolvedBound) -> Option<(Scalar, Scalar)> {
        match self.bound_mode {
            BoundMode::ReuseLower => {
                let value = bounds.lower.clone()?;
                Some((value.clone(), value))
            }
            BoundMode::Distinct => {
                let upper = bounds.upper.clone().or_else(|| bounds.lower.clone())?;
                let lower = bounds.lower.clone().unwrap_or_else(|| upper.clone());
                Some((upper, lower))
            }
        }
    }
}
