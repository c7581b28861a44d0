pub mod definition;
pub mod error;
pub mod formula;
pub mod infer;
pub mod model;
pub mod threshold;

use definition::MetricDef;
use model::{FixedVariableAssignment, ValidationResult};
use serde::{Deserialize, Serialize};

/// Aggregate result of checking one metric definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefinitionReport {
    /// Name of the metric that was checked.
    pub metric: String,
    pub formula: ValidationResult,
    pub desired_threshold: ValidationResult,
    pub worst_case: ValidationResult,
    pub variables: ValidationResult,
    /// Variables the data-entry screen should lock to a constant.
    pub fixed_variables: Vec<FixedVariableAssignment>,
    /// Conjunction of the four field results.
    pub valid: bool,
}

/// Main API entry point: run every validator over a metric definition.
///
/// Gating order matches the form layer: formula syntax and threshold
/// format first, then declared-variable consistency, then fixed-variable
/// inference. Inference only runs once the gates pass; an invalid
/// definition reports an empty assignment list.
pub fn check_definition(def: &MetricDef) -> DefinitionReport {
    let formula = formula::validate_formula(&def.formula, true);
    let desired_threshold = threshold::format::validate_threshold(
        def.desired_threshold.as_deref().unwrap_or(""),
        "desired threshold",
    );
    let worst_case =
        threshold::format::validate_threshold(def.worst_case.as_deref().unwrap_or(""), "worst case");
    let variables = formula::consistency::check_variables(&def.formula, &def.variables);

    let valid =
        formula.valid && desired_threshold.valid && worst_case.valid && variables.valid;

    let fixed_variables = if valid {
        infer::infer_fixed_variables(
            &def.formula,
            def.desired_threshold.as_deref(),
            def.worst_case.as_deref(),
        )
    } else {
        Vec::new()
    };

    DefinitionReport {
        metric: def.name.clone(),
        formula,
        desired_threshold,
        worst_case,
        variables,
        fixed_variables,
        valid,
    }
}
