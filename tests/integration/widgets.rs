// tests/integration/widgets.rs
use std::collections::BTreeSet;

use range_filter::{ActiveFilterParams, NavigationContext, ParamName, RangeFilter, RawFilterInput, RowId};

use crate::common::{PRICE_FROM, PRICE_TO, STARTS, event_catalog, setting};

#[test]
fn options_are_stripped_and_blank_ones_dropped() {
    let catalog = event_catalog();
    let filter = RangeFilter::new(setting(PRICE_FROM, Some(PRICE_TO)), &catalog, &catalog);
    let mut active = ActiveFilterParams::new();

    let widgets = filter.describe_widget(
        &BTreeSet::new(),
        &RawFilterInput::new(),
        &NavigationContext::default(),
        &mut active,
    );

    let widget = &widgets["price_from"];
    let options: Vec<(&str, &str)> =
        widget.options.iter().map(|o| (o.value.as_str(), o.label.as_str())).collect();
    assert_eq!(options, [("10", "Ten"), ("20", "Twenty"), ("50", "Fifty")]);
    assert_eq!(widget.value, None);
}

#[test]
fn possible_value_restriction_uses_candidate_rows() {
    let catalog = event_catalog();
    let mut config = setting(PRICE_FROM, Some(PRICE_TO));
    config.restrict_to_possible_values = true;
    let filter = RangeFilter::new(config, &catalog, &catalog);
    let mut active = ActiveFilterParams::new();

    let candidates = BTreeSet::from([RowId::new(2)]);
    let widgets =
        filter.describe_widget(&candidates, &RawFilterInput::new(), &NavigationContext::default(), &mut active);

    let values: Vec<&str> = widgets["price_from"].options.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, ["20"]);
}

#[test]
fn used_value_restriction_drops_options_no_row_holds() {
    let catalog = event_catalog();
    let mut config = setting(PRICE_FROM, Some(PRICE_TO));
    config.restrict_to_used_values = true;
    let filter = RangeFilter::new(config, &catalog, &catalog);
    let mut active = ActiveFilterParams::new();

    let widgets =
        filter.describe_widget(&BTreeSet::new(), &RawFilterInput::new(), &NavigationContext::default(), &mut active);

    let values: Vec<&str> = widgets["price_from"].options.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, ["10", "20"]);
}

#[test]
fn widget_reflects_split_value_and_registers_parameter() {
    let catalog = event_catalog();
    let mut config = setting(STARTS, None);
    config.url_param_override = Some(ParamName::new("when").unwrap());
    config.label = Some("When".to_string());
    config.widget_template = Some("mm_filteritem_range".to_string());
    let filter = RangeFilter::new(config, &catalog, &catalog);
    let mut active = ActiveFilterParams::new();
    let navigation = NavigationContext { jump_to: Some("/events".to_string()) };

    let widgets = filter.describe_widget(
        &BTreeSet::new(),
        &RawFilterInput::new().with("when", "01.01.2024__02.01.2024__x"),
        &navigation,
        &mut active,
    );

    let widget = &widgets["when"];
    assert_eq!(widget.label, ["When".to_string(), "GET: when".to_string()]);
    assert_eq!(widget.value, Some(["01.01.2024".to_string(), "02.01.2024__x".to_string()]));
    assert_eq!(widget.config.url_param_name.as_str(), "when");
    assert_eq!(widget.config.template.as_deref(), Some("mm_filteritem_range"));
    assert_eq!(widget.navigation, navigation);
    assert_eq!(active.iter().map(ParamName::as_str).collect::<Vec<_>>(), ["when"]);

    let params = filter.describe_parameter();
    assert_eq!(params.get("when").map(String::as_str), Some("When"));
}

#[test]
fn one_registry_per_request_collects_every_filter() {
    let catalog = event_catalog();
    let price = RangeFilter::new(setting(PRICE_FROM, Some(PRICE_TO)), &catalog, &catalog);
    let dates = RangeFilter::new(setting(STARTS, None), &catalog, &catalog);
    let input = RawFilterInput::new();
    let navigation = NavigationContext::default();

    let mut first_request = ActiveFilterParams::new();
    price.describe_widget(&BTreeSet::new(), &input, &navigation, &mut first_request);
    dates.describe_widget(&BTreeSet::new(), &input, &navigation, &mut first_request);
    assert_eq!(first_request.len(), 2);

    let mut second_request = ActiveFilterParams::new();
    dates.describe_widget(&BTreeSet::new(), &input, &navigation, &mut second_request);
    assert_eq!(second_request.into_vec(), vec![ParamName::new("starts").unwrap()]);
}

#[test]
fn widget_json_matches_renderer_contract() {
    let catalog = event_catalog();
    let filter = RangeFilter::new(setting(PRICE_FROM, Some(PRICE_TO)), &catalog, &catalog);
    let mut active = ActiveFilterParams::new();
    let widgets = filter.describe_widget(
        &BTreeSet::new(),
        &RawFilterInput::new().with("price_from", "10__20"),
        &NavigationContext::default(),
        &mut active,
    );

    let json = serde_json::to_value(&widgets).expect("serializes");
    let widget = &json["price_from"];
    assert_eq!(widget["inputType"], "text");
    assert_eq!(widget["label"][0], "Price from");
    assert_eq!(widget["config"]["helpWizardEnabled"], true);
    assert_eq!(widget["value"], serde_json::json!(["10", "20"]));
}
