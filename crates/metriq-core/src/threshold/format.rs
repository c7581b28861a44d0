use super::{is_complete_ratio, parse, strip_operator, strip_unit};
use crate::model::{Operator, ValidationResult};

/// Validate the format of a threshold field, turning parse failures into
/// specific user-facing errors.
///
/// Blank input is valid: threshold fields are optional at this layer and
/// "required" is enforced by the caller. The typo checks run before the
/// parser so the messages can name the intended token instead of a generic
/// failure.
pub fn validate_threshold(input: &str, field_label: &str) -> ValidationResult {
    let s = input.trim();
    if s.is_empty() {
        return ValidationResult::ok();
    }

    if s.starts_with("=>") {
        return ValidationResult::fail(format!(
            "{field_label}: '=>' is not a valid operator, write '>=' instead"
        ));
    }
    if s.starts_with("=<") {
        return ValidationResult::fail(format!(
            "{field_label}: '=<' is not a valid operator, write '<=' instead"
        ));
    }

    let (_, rest) = strip_operator(s);
    let (unit, rest) = strip_unit(rest);
    let numeric: String = rest.chars().filter(|c| !c.is_whitespace()).collect();

    if numeric.contains('/') && !is_complete_ratio(&numeric) {
        return match unit {
            Some(u) => ValidationResult::fail(format!(
                "{field_label}: '{numeric}' is not a complete ratio, expected e.g. '10/3{u}'"
            )),
            None => ValidationResult::fail(format!(
                "{field_label}: '{numeric}' is not a complete ratio, expected '<number>/<number>'"
            )),
        };
    }

    let Some(expr) = parse(s) else {
        let fragment = if numeric.is_empty() { s } else { numeric.as_str() };
        return ValidationResult::fail(format!(
            "{field_label}: '{fragment}' is not a valid numeric value"
        ));
    };

    // Presentation feedback only; priority: operator, ratio, unit.
    let message = if expr.operator != Operator::None {
        format!(
            "{field_label}: comparison '{} {}' recognized",
            expr.operator, expr.magnitude
        )
    } else if expr.magnitude.is_ratio() {
        format!("{field_label}: ratio '{}' recognized", expr.magnitude)
    } else if let Some(u) = expr.unit {
        format!("{field_label}: value with unit '{u}' recognized")
    } else {
        format!("{field_label}: numeric value recognized")
    };
    ValidationResult::ok_with_success(message)
}
