use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::ConfigError;

/// Conventional name for the naming-table configuration file.
pub const CONFIG_FILE_NAME: &str = ".sfg.yaml";

/// A declarative cycle-breaking rule: the named field on the named containing
/// type resolves to an opaque JSON value instead of a concrete reference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CycleOverride {
    #[serde(rename = "type")]
    pub containing_type: String,
    pub field: String,
}

impl CycleOverride {
    fn new(containing_type: &str, field: &str) -> Self {
        Self {
            containing_type: containing_type.to_string(),
            field: field.to_string(),
        }
    }
}

/// Immutable lookup tables consulted by the normalizer, mapper, and walker.
///
/// Constructed once at startup and passed down explicitly; never mutated
/// during a run. The acronym table is ordered, so overlapping entries resolve
/// the same way on every run.
#[derive(Debug, Clone)]
pub struct NamingTables {
    /// Casing fixups applied after camel-case conversion, keyed by the
    /// mis-cased form heck produces (e.g. `Html` -> `HTML`).
    pub acronyms: IndexMap<String, String>,
    /// Enum types skipped during generation; fields referencing them fall
    /// back to plain strings.
    pub enum_skip: Vec<String>,
    /// Known cyclic references forced to an opaque value type.
    pub cycle_overrides: Vec<CycleOverride>,
}

impl Default for NamingTables {
    fn default() -> Self {
        let acronyms = [
            ("Html", "HTML"),
            ("Seo", "SEO"),
            ("3d", "3D"),
            ("Png", "PNG"),
            ("Jpg", "JPG"),
            ("Webp", "WebP"),
            ("Url", "URL"),
            ("Jcb", "JCB"),
            ("Sku", "SKU"),
            ("Ssl", "SSL"),
            ("Youtube", "YouTube"),
            ("Zip", "ZIP"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        // Large, low-value enums it gets mildly excessive to generate.
        let enum_skip = [
            "CountryCode",
            "CurrencyCode",
            "WeightUnit",
            "UnitPriceMeasurementMeasuredType",
            "UnitPriceMeasurementMeasuredUnit",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        let cycle_overrides = vec![
            CycleOverride::new("ProductVariant", "product"),
            CycleOverride::new("Article", "blog"),
        ];

        Self {
            acronyms,
            enum_skip,
            cycle_overrides,
        }
    }
}

impl NamingTables {
    /// Whether the given `(containing type, field)` pair has a cycle override.
    pub fn is_cycle_override(&self, containing_type: &str, field: &str) -> bool {
        self.cycle_overrides
            .iter()
            .any(|o| o.containing_type == containing_type && o.field == field)
    }

    /// Extend the default tables with entries loaded from a config file.
    pub fn with_config(mut self, config: TablesConfig) -> Self {
        self.acronyms.extend(config.acronyms);
        self.enum_skip.extend(config.enum_skip);
        self.cycle_overrides.extend(config.cycle_overrides);
        self
    }
}

/// Additional table entries loaded from a `.sfg.yaml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TablesConfig {
    pub acronyms: IndexMap<String, String>,
    pub enum_skip: Vec<String>,
    pub cycle_overrides: Vec<CycleOverride>,
}

/// Load table extensions from a YAML file. Returns `None` if the file does
/// not exist.
pub fn load_config(path: &Path) -> Result<Option<TablesConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let config: TablesConfig = serde_yaml_ng::from_str(&content)?;
    Ok(Some(config))
}
