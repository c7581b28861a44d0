//! Fixed-variable inference.
//!
//! When a metric's formula divides one variable by another and its
//! thresholds pin the denominator (a "per N minutes" ratio, or the same
//! denominator on both thresholds), the denominator variable is not
//! user-entered data: data-entry screens lock it to the inferred constant.

use crate::model::{FixedVariableAssignment, Magnitude, ThresholdExpression, Unit};
use crate::threshold;
use rust_decimal::Decimal;

/// Infer which formula variables are fixed by the thresholds.
///
/// Current policy yields at most one assignment; the return type is a list
/// so multi-variable inference can be added without a breaking change.
/// Inference is intentionally narrow: only a minute-denominated or
/// explicit-ratio threshold ever fixes a variable, and only for a direct
/// single-letter division in the formula.
pub fn infer_fixed_variables(
    formula: &str,
    desired: Option<&str>,
    worst: Option<&str>,
) -> Vec<FixedVariableAssignment> {
    let formula = formula.trim();
    if formula.is_empty() {
        return Vec::new();
    }

    // Unparseable thresholds contribute nothing
    let desired = desired.and_then(threshold::parse);
    let worst = worst.and_then(threshold::parse);

    let has_time_unit = unit_is_min(desired.as_ref()) || unit_is_min(worst.as_ref());
    let desired_ratio = ratio_parts(desired.as_ref());
    let worst_ratio = ratio_parts(worst.as_ref());
    let has_ratio = desired_ratio.is_some() || worst_ratio.is_some();

    if !has_time_unit && !has_ratio {
        return Vec::new();
    }

    let Some(symbol) = find_division_denominator(formula) else {
        return Vec::new();
    };

    // First match wins: the desired threshold's ratio outranks the
    // worst case's, and the shared-denominator rule comes last.
    if has_time_unit {
        if let Some((_, denominator)) = desired_ratio {
            return vec![assignment(
                symbol,
                denominator,
                "fixed denominator from desired threshold",
            )];
        }
        if let Some((_, denominator)) = worst_ratio {
            return vec![assignment(
                symbol,
                denominator,
                "fixed denominator from worst-case threshold",
            )];
        }
    }

    if let (Some((numerator, desired_den)), Some((_, worst_den))) = (desired_ratio, worst_ratio) {
        if numerator == Decimal::ZERO && desired_den == worst_den {
            return vec![assignment(
                symbol,
                desired_den,
                "shared denominator across thresholds",
            )];
        }
    }

    Vec::new()
}

/// Whether `symbol` is fixed by the thresholds. Projection over
/// [`infer_fixed_variables`], not an independent algorithm.
pub fn is_fixed(symbol: &str, formula: &str, desired: Option<&str>, worst: Option<&str>) -> bool {
    infer_fixed_variables(formula, desired, worst)
        .iter()
        .any(|a| a.symbol == symbol)
}

/// The constant value `symbol` is fixed to, if any.
pub fn fixed_value(
    symbol: &str,
    formula: &str,
    desired: Option<&str>,
    worst: Option<&str>,
) -> Option<Decimal> {
    infer_fixed_variables(formula, desired, worst)
        .into_iter()
        .find(|a| a.symbol == symbol)
        .map(|a| a.fixed_value)
}

fn assignment(symbol: String, fixed_value: Decimal, reason: &str) -> FixedVariableAssignment {
    FixedVariableAssignment {
        symbol,
        fixed_value,
        reason: reason.to_string(),
    }
}

fn unit_is_min(t: Option<&ThresholdExpression>) -> bool {
    t.map(|t| t.unit == Some(Unit::Min)).unwrap_or(false)
}

fn ratio_parts(t: Option<&ThresholdExpression>) -> Option<(Decimal, Decimal)> {
    match t?.magnitude {
        Magnitude::Ratio {
            numerator,
            denominator,
        } => Some((numerator, denominator)),
        Magnitude::Scalar(_) => None,
    }
}

/// Find the first direct single-letter division `X/Y` in the formula and
/// return the right-hand letter. Divisions of longer sub-expressions like
/// `(A+B)/C` do not match.
fn find_division_denominator(formula: &str) -> Option<String> {
    let chars: Vec<char> = formula.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_uppercase() {
            continue;
        }
        let mut j = i + 1;
        while j < chars.len() && chars[j].is_whitespace() {
            j += 1;
        }
        if j >= chars.len() || chars[j] != '/' {
            continue;
        }
        j += 1;
        while j < chars.len() && chars[j].is_whitespace() {
            j += 1;
        }
        if j < chars.len() && chars[j].is_ascii_uppercase() {
            return Some(chars[j].to_string());
        }
    }
    None
}
