// crates/ports/src/rules.rs
use range_filter_domain::FilterRule;

/// Port receiving the rules filters emit for one query.
pub trait FilterRuleAggregator {
    fn add_filter_rule(&mut self, rule: FilterRule);
}

impl FilterRuleAggregator for Vec<FilterRule> {
    fn add_filter_rule(&mut self, rule: FilterRule) {
        self.push(rule);
    }
}
