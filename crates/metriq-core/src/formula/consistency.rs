use super::variables::extract_variables;
use crate::model::{DeclaredVariable, ValidationResult};
use std::collections::BTreeSet;

/// Compare the variables an administrator declared against the set the
/// formula actually references.
///
/// Missing declarations are reported before unused ones; one error per
/// call. Declared symbols are trimmed, blanks and duplicates dropped.
pub fn check_variables(formula: &str, declared: &[DeclaredVariable]) -> ValidationResult {
    let formula = formula.trim();

    let declared_set: BTreeSet<String> = declared
        .iter()
        .map(|d| d.symbol.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if formula.is_empty() {
        return if declared_set.is_empty() {
            ValidationResult::ok_with_success("no formula, so no variables are required")
        } else {
            ValidationResult::fail("cannot declare variables without a formula")
        };
    }

    let required: BTreeSet<String> = extract_variables(formula).into_iter().collect();

    let missing: Vec<String> = required.difference(&declared_set).cloned().collect();
    if !missing.is_empty() {
        return ValidationResult::fail(format!(
            "formula references undeclared variable(s): {}",
            missing.join(", ")
        ));
    }

    let extra: Vec<String> = declared_set.difference(&required).cloned().collect();
    if !extra.is_empty() {
        return ValidationResult::fail(format!(
            "declared variable(s) not used by the formula: {}",
            extra.join(", ")
        ));
    }

    // With no missing and no extra the sets are equal
    debug_assert_eq!(required.len(), declared_set.len());

    ValidationResult::ok_with_success(format!(
        "{} variable(s) declared and used by the formula",
        required.len()
    ))
}
