// tests/integration/end_to_end.rs
use range_filter::{BoundMode, FilterRule, ParamName, RangeFilter, RawFilterInput, RawValue, Scalar};

use crate::common::{ENDS, MISSING, PRICE_FROM, PRICE_TO, STARTS, event_catalog, setting};

fn single_rule(filter: &RangeFilter<'_>, input: &RawFilterInput) -> FilterRule {
    let mut rules: Vec<FilterRule> = Vec::new();
    filter.build_predicate(input, &mut rules);
    assert_eq!(rules.len(), 1, "exactly one rule per build");
    rules.remove(0)
}

#[test]
fn two_column_range_reuses_lower_bound() {
    let catalog = event_catalog();
    let mut config = setting(PRICE_FROM, Some(PRICE_TO));
    config.upper_inclusive = true;
    let filter = RangeFilter::new(config, &catalog, &catalog);

    let rule = single_rule(&filter, &RawFilterInput::new().with("price_from", "10__50"));
    let fragment = rule.as_query().expect("active predicate");
    assert_eq!(fragment.sql_template, "SELECT id FROM mm_events WHERE (?<=price_to AND ?>price_from)");
    assert_eq!(fragment.bind_values, vec![Scalar::text("10"), Scalar::text("10")]);
}

#[test]
fn all_operator_combinations() {
    let catalog = event_catalog();
    let cases = [
        (false, false, "?<price_to AND ?>price_from"),
        (true, false, "?<price_to AND ?>=price_from"),
        (false, true, "?<=price_to AND ?>price_from"),
        (true, true, "?<=price_to AND ?>=price_from"),
    ];
    for (lower_inclusive, upper_inclusive, expected) in cases {
        let mut config = setting(PRICE_FROM, Some(PRICE_TO));
        config.lower_inclusive = lower_inclusive;
        config.upper_inclusive = upper_inclusive;
        let filter = RangeFilter::new(config, &catalog, &catalog);
        let rule = filter.predicate(&RawFilterInput::new().with("price_from", "5__6"));
        let template = &rule.as_query().expect("active predicate").sql_template;
        assert_eq!(template, &format!("SELECT id FROM mm_events WHERE ({expected})"));
    }
}

#[test]
fn empty_input_is_inert_for_every_flag_combination() {
    let catalog = event_catalog();
    for (lower_inclusive, upper_inclusive) in [(false, false), (true, false), (false, true), (true, true)] {
        let mut config = setting(PRICE_FROM, Some(PRICE_TO));
        config.lower_inclusive = lower_inclusive;
        config.upper_inclusive = upper_inclusive;
        let filter = RangeFilter::new(config, &catalog, &catalog);

        assert!(single_rule(&filter, &RawFilterInput::new()).is_select_nothing());
        assert!(single_rule(&filter, &RawFilterInput::new().with("price_from", "")).is_select_nothing());
        assert!(
            single_rule(&filter, &RawFilterInput::new().with("price_from", RawValue::Split(Vec::new())))
                .is_select_nothing()
        );
    }
}

#[test]
fn self_range_uses_primary_column_twice() {
    let catalog = event_catalog();
    let filter = RangeFilter::new(setting(PRICE_FROM, None), &catalog, &catalog);

    let rule = filter.predicate(&RawFilterInput::new().with("price_from", "12"));
    assert_eq!(
        rule.as_query().unwrap().sql_template,
        "SELECT id FROM mm_events WHERE (?<price_from AND ?>price_from)"
    );
    assert_eq!(filter.referenced_columns().len(), 1);
}

#[test]
fn unresolvable_primary_falls_back() {
    let catalog = event_catalog();
    let filter = RangeFilter::new(setting(MISSING, None), &catalog, &catalog);

    assert!(single_rule(&filter, &RawFilterInput::new().with("price_from", "1__2")).is_select_nothing());
    assert!(filter.referenced_columns().is_empty());
}

#[test]
fn referenced_columns_lists_primary_then_secondary() {
    let catalog = event_catalog();
    let filter = RangeFilter::new(setting(STARTS, Some(ENDS)), &catalog, &catalog);
    let columns: Vec<String> = filter.referenced_columns().into_iter().map(String::from).collect();
    assert_eq!(columns, ["starts", "ends"]);
}

#[test]
fn dates_use_the_attribute_format() {
    let catalog = event_catalog();
    let mut config = setting(STARTS, Some(ENDS));
    config.lower_inclusive = true;
    config.upper_inclusive = true;
    let filter = RangeFilter::new(config, &catalog, &catalog);

    let rule = filter.predicate(&RawFilterInput::new().with("starts", "01.01.2024__31.01.2024"));
    let fragment = rule.as_query().expect("active predicate");
    assert_eq!(fragment.sql_template, "SELECT id FROM mm_events WHERE (?<=ends AND ?>=starts)");
    assert_eq!(fragment.bind_values, vec![Scalar::Integer(1_704_067_200); 2]);
}

#[test]
fn malformed_date_never_breaks_the_page() {
    let catalog = event_catalog();
    let filter = RangeFilter::new(setting(STARTS, Some(ENDS)), &catalog, &catalog);

    for raw in ["2024-01-01", "yesterday", "32.01.2024__01.02.2024"] {
        let rule = single_rule(&filter, &RawFilterInput::new().with("starts", raw));
        assert_eq!(rule, FilterRule::select_nothing(), "input {raw}");
    }
}

#[test]
fn distinct_mode_encloses_the_supplied_range() {
    let catalog = event_catalog();
    let mut config = setting(STARTS, Some(ENDS));
    config.bound_mode = BoundMode::Distinct;
    config.url_param_override = Some(ParamName::new("period").unwrap());
    let filter = RangeFilter::new(config, &catalog, &catalog);

    let rule = filter.predicate(&RawFilterInput::new().with("period", ["01.01.2024", "02.01.2024"]));
    assert_eq!(
        rule.as_query().unwrap().bind_values,
        vec![Scalar::Integer(1_704_153_600), Scalar::Integer(1_704_067_200)]
    );
}
