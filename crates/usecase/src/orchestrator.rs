use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use range_filter_domain::{
    ActiveFilterParams, AttributeDescriptor, ColumnPair, FilterRule, FilterSettingConfig, NavigationContext,
    PredicateBuilder, RawFilterInput, ResolvedBound, WidgetDescriptor,
    filtering::{coerce, decode},
    widget::{InputType, WidgetConfig, sanitize_options},
};
use range_filter_ports::{AttributeResolver, FilterRuleAggregator, OptionLister};
use range_filter_shared_kernel::{ColumnName, ParamName, RowId};

/// A configured "value between two columns" filter.
///
/// Holds no per-request state; every call resolves attributes afresh through
/// the host ports.
pub struct RangeFilter<'a> {
    config: FilterSettingConfig,
    attributes: &'a dyn AttributeResolver,
    options: &'a dyn OptionLister,
}

impl<'a> RangeFilter<'a> {
    pub fn new(
        config: FilterSettingConfig,
        attributes: &'a dyn AttributeResolver,
        options: &'a dyn OptionLister,
    ) -> Self {
        Self { config, attributes, options }
    }

    pub const fn config(&self) -> &FilterSettingConfig {
        &self.config
    }

    /// Request parameter this filter reads: the configured override, else the
    /// primary attribute's column name.
    pub fn param_name(&self) -> Option<ParamName> {
        if let Some(name) = &self.config.url_param_override {
            return Some(name.clone());
        }
        self.primary().map(|attribute| ParamName::from(&attribute.col_name))
    }

    /// Registers exactly one rule for this filter with `aggregator`.
    pub fn build_predicate(&self, input: &RawFilterInput, aggregator: &mut dyn FilterRuleAggregator) {
        aggregator.add_filter_rule(self.predicate(input));
    }

    /// The rule [`Self::build_predicate`] would register.
    pub fn predicate(&self, input: &RawFilterInput) -> FilterRule {
        let table = self.attributes.table_name();
        let Some(primary) = self.primary() else {
            debug!("range filter: primary attribute {} unresolved", self.config.primary_attribute_id);
            return FilterRule::select_nothing();
        };
        let Some(param) = self.param_name() else {
            return FilterRule::select_nothing();
        };

        let columns = self.columns(&primary);
        let decoded = decode(input.get(param.as_str()));
        let bounds = ResolvedBound::new(
            coerce(decoded.lower.as_deref(), &primary.value_type, &primary.date_format),
            coerce(decoded.upper.as_deref(), &primary.value_type, &primary.date_format),
        );
        PredicateBuilder::from_config(&self.config).build(table, columns.as_ref(), &bounds)
    }

    /// Form field this filter contributes, mapped to its label.
    pub fn describe_parameter(&self) -> BTreeMap<ParamName, String> {
        let Some(param) = self.param_name() else {
            return BTreeMap::new();
        };
        let label = self
            .config
            .label
            .clone()
            .or_else(|| self.primary().map(|attribute| attribute.name))
            .unwrap_or_else(|| param.to_string());
        BTreeMap::from([(param, label)])
    }

    /// Widget for this filter's parameter, registering the parameter in `active`.
    ///
    /// Options come from the primary attribute, limited to `candidate_ids` when
    /// the setting asks for possible values only.
    pub fn describe_widget(
        &self,
        candidate_ids: &BTreeSet<RowId>,
        input: &RawFilterInput,
        navigation: &NavigationContext,
        active: &mut ActiveFilterParams,
    ) -> BTreeMap<ParamName, WidgetDescriptor> {
        let (Some(primary), Some(param)) = (self.primary(), self.param_name()) else {
            debug!("range filter: no widget, attribute {} unresolved", self.config.primary_attribute_id);
            return BTreeMap::new();
        };

        let restrict_to = self.config.restrict_to_possible_values.then_some(candidate_ids);
        let options = sanitize_options(self.options.filter_options(
            &primary,
            restrict_to,
            self.config.restrict_to_used_values,
        ));

        let decoded = decode(input.get(param.as_str()));
        let value = (!decoded.is_empty()).then(|| decoded.to_pair());

        active.register(param.clone());

        let descriptor = WidgetDescriptor {
            label: [
                self.config.label.clone().unwrap_or_else(|| primary.name.clone()),
                WidgetDescriptor::label_hint(&param),
            ],
            input_type: InputType::Text,
            config: WidgetConfig {
                url_param_name: param.clone(),
                template: self.config.widget_template.clone(),
                help_wizard_enabled: true,
            },
            options,
            value,
            navigation: navigation.clone(),
        };
        BTreeMap::from([(param, descriptor)])
    }

    /// Columns this filter reads: primary, then secondary when it differs.
    pub fn referenced_columns(&self) -> Vec<ColumnName> {
        let mut columns = Vec::with_capacity(2);
        if let Some(primary) = self.primary() {
            columns.push(primary.col_name);
        }
        if let Some(secondary) = self.attributes.attribute_by_id(self.config.effective_secondary_id())
            && !columns.contains(&secondary.col_name)
        {
            columns.push(secondary.col_name);
        }
        columns
    }

    fn primary(&self) -> Option<AttributeDescriptor> {
        self.attributes.attribute_by_id(self.config.primary_attribute_id)
    }

    /// Lower column from the primary attribute, upper from the secondary.
    /// An unset secondary reuses the primary; a set but unknown one yields `None`.
    fn columns(&self, primary: &AttributeDescriptor) -> Option<ColumnPair> {
        let id = self.config.effective_secondary_id();
        if id == primary.id {
            return Some(ColumnPair::single(primary.col_name.clone()));
        }
        let Some(secondary) = self.attributes.attribute_by_id(id) else {
            debug!("range filter: secondary attribute {id} unresolved");
            return None;
        };
        Some(ColumnPair::new(primary.col_name.clone(), secondary.col_name))
    }
}
