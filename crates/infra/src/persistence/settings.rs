use std::{collections::BTreeMap, path::Path};

use log::debug;
use range_filter_domain::{AttributeDescriptor, FilterOption, FilterSettingConfig};
use range_filter_shared_kernel::{
    AttributeId, ErrorContext, InfrastructureError, RangeFilterError, Result, RowId, TableName,
};
use serde::{Deserialize, de::DeserializeOwned};

use super::FileReader;
use crate::catalog::InMemoryCatalog;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SettingsDocument {
    List(Vec<FilterSettingConfig>),
    Wrapped { settings: Vec<FilterSettingConfig> },
}

/// Description of a data collection; values and options are keyed by column name.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    table: TableName,
    attributes: Vec<AttributeDescriptor>,
    #[serde(default)]
    options: BTreeMap<String, Vec<FilterOption>>,
    #[serde(default)]
    rows: Vec<RowDocument>,
}

#[derive(Debug, Deserialize)]
struct RowDocument {
    id: RowId,
    #[serde(default)]
    values: BTreeMap<String, String>,
}

/// Load and validate filter settings from a JSON (or, with the `yaml`
/// feature, YAML) file. Accepts a bare list or `{ "settings": [...] }`.
pub fn read_settings(path: &Path) -> Result<Vec<FilterSettingConfig>> {
    let document: SettingsDocument = parse_file(path)?;
    let settings = match document {
        SettingsDocument::List(settings) | SettingsDocument::Wrapped { settings } => settings,
    };
    for (index, setting) in settings.iter().enumerate() {
        setting
            .validate()
            .with_context(|| format!("setting #{index} in {}", path.display()))?;
    }
    debug!("loaded {} range filter settings from {}", settings.len(), path.display());
    Ok(settings)
}

/// Load an in-memory catalog from a JSON (or YAML) file.
pub fn read_catalog(path: &Path) -> Result<InMemoryCatalog> {
    let document: CatalogDocument = parse_file(path)?;
    let mut catalog = InMemoryCatalog::new(document.table);
    for attribute in document.attributes {
        catalog.insert_attribute(attribute);
    }
    for (column, options) in document.options {
        let id = lookup_column(&catalog, &column, path)?;
        catalog.declare_options(id, options);
    }
    for row in document.rows {
        let mut values = Vec::with_capacity(row.values.len());
        for (column, value) in row.values {
            values.push((lookup_column(&catalog, &column, path)?, value));
        }
        catalog.insert_row(row.id, values);
    }
    Ok(catalog)
}

fn lookup_column(catalog: &InMemoryCatalog, column: &str, path: &Path) -> Result<AttributeId> {
    catalog.attribute_id_for_column(column).ok_or_else(|| {
        InfrastructureError::SerializationError {
            format: format_name(path).to_string(),
            details: format!("unknown column '{column}' in {}", path.display()),
        }
        .into()
    })
}

fn parse_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = FileReader::read_to_string(path)?;
    parse_str(&contents, path).with_context(|| format!("parsing {}", path.display()))
}

fn parse_str<T: DeserializeOwned>(contents: &str, path: &Path) -> std::result::Result<T, RangeFilterError> {
    match format_name(path) {
        #[cfg(feature = "yaml")]
        "YAML" => Ok(serde_yaml::from_str(contents)?),
        _ => Ok(serde_json::from_str(contents)?),
    }
}

fn format_name(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml" | "yml") if cfg!(feature = "yaml") => "YAML",
        _ => "JSON",
    }
}
