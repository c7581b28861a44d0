use crate::error::MetriqError;
use crate::model::DeclaredVariable;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A metric definition as entered by an administrator.
///
/// The formula, thresholds and variable symbols are stored verbatim as raw
/// strings; the engine re-parses them on every check and nothing here is
/// cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub formula: String,
    /// Target the metric should reach, e.g. ">=10/3min".
    #[serde(default)]
    pub desired_threshold: Option<String>,
    /// Value below/above which the metric is considered failing.
    #[serde(default)]
    pub worst_case: Option<String>,
    #[serde(default)]
    pub variables: Vec<DeclaredVariable>,
}

/// Load a metric definition from a JSON file.
pub fn load_definition(path: &Path) -> Result<MetricDef, MetriqError> {
    let content = std::fs::read_to_string(path).map_err(|e| MetriqError::DefinitionLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_definition(&content, path)
}

/// Parse a metric definition from a JSON string.
pub fn parse_definition(json: &str, source: &Path) -> Result<MetricDef, MetriqError> {
    let def: MetricDef = serde_json::from_str(json).map_err(|e| MetriqError::DefinitionLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_definition(&def)?;
    Ok(def)
}

/// Parse a metric definition from a JSON string (no file path context).
pub fn parse_definition_str(json: &str) -> Result<MetricDef, MetriqError> {
    let def: MetricDef = serde_json::from_str(json).map_err(MetriqError::Json)?;
    validate_definition(&def)?;
    Ok(def)
}

/// Validate that a definition is structurally well-formed.
///
/// Structure only: the semantic checks (formula syntax, threshold format,
/// variable consistency) run in [`crate::check_definition`] and report
/// through `ValidationResult` instead of failing the load.
pub fn validate_definition(def: &MetricDef) -> Result<(), MetriqError> {
    if def.name.trim().is_empty() {
        return Err(MetriqError::DefinitionInvalid(
            "metric name must not be empty".into(),
        ));
    }

    let mut seen = HashSet::new();
    for var in &def.variables {
        let symbol = var.symbol.trim();
        if symbol.is_empty() {
            return Err(MetriqError::DefinitionInvalid(
                "variable symbol must not be empty".into(),
            ));
        }
        if !seen.insert(symbol.to_string()) {
            return Err(MetriqError::DefinitionInvalid(format!(
                "variable '{symbol}' is declared more than once"
            )));
        }
    }

    Ok(())
}
