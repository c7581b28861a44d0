pub mod consistency;
pub mod variables;

use crate::model::ValidationResult;
use variables::extract_variables;

const ALLOWED_CHARS: &str = "uppercase letters, digits, + - * / ( ) . _ and whitespace";

/// Validate formula syntax: character set, parenthesis balance and variable
/// presence. Numeric evaluation is someone else's job; this only gates the
/// shape of the string.
pub fn validate_formula(formula: &str, required: bool) -> ValidationResult {
    let s = formula.trim();

    if s.is_empty() {
        return if required {
            ValidationResult::fail("formula is mandatory")
        } else {
            ValidationResult::ok_with_warning("formula is empty")
        };
    }

    if !s.chars().any(|c| c.is_ascii_uppercase()) {
        return ValidationResult::fail(
            "formula must contain at least one variable (an uppercase letter)",
        );
    }

    let open = s.chars().filter(|&c| c == '(').count();
    let close = s.chars().filter(|&c| c == ')').count();
    if open != close {
        // Totals only; nesting order is not verified here
        return ValidationResult::fail(format!(
            "formula has unbalanced parentheses ({open} opening, {close} closing)"
        ));
    }

    if let Some(bad) = s.chars().find(|&c| !is_allowed_char(c)) {
        return ValidationResult::fail(format!(
            "formula contains forbidden character '{bad}'; allowed: {ALLOWED_CHARS}"
        ));
    }

    let vars = extract_variables(s);
    let var_list = vars.join(", ");
    let message = if s.contains('*') && s.contains("100") {
        format!(
            "percentage formula detected, {} variable(s): {var_list}",
            vars.len()
        )
    } else if s.contains('/') {
        format!(
            "division formula detected, {} variable(s): {var_list}",
            vars.len()
        )
    } else {
        format!("valid formula, {} variable(s): {var_list}", vars.len())
    };
    ValidationResult::ok_with_success(message)
}

fn is_allowed_char(c: char) -> bool {
    c.is_ascii_uppercase()
        || c.is_ascii_digit()
        || c.is_whitespace()
        || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.' | '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_required() {
        let r = validate_formula("", true);
        assert!(!r.valid);
        assert!(r.error.as_deref().unwrap().contains("mandatory"));
    }

    #[test]
    fn test_empty_optional_warns() {
        let r = validate_formula("   ", false);
        assert!(r.valid);
        assert!(r.warning.is_some());
    }

    #[test]
    fn test_no_variables_rejected() {
        let r = validate_formula("100+200", true);
        assert!(!r.valid);
        assert!(r.error.as_deref().unwrap().contains("variable"));
    }

    #[test]
    fn test_unbalanced_parentheses() {
        let r = validate_formula("(A+B", true);
        assert!(!r.valid);
        assert!(r.error.as_deref().unwrap().contains("unbalanced"));
        assert!(!validate_formula("A+B)", true).valid);
    }

    #[test]
    fn test_forbidden_characters() {
        let r = validate_formula("A@B", true);
        assert!(!r.valid);
        assert!(r.error.as_deref().unwrap().contains('@'));

        // lowercase is outside the allowed set even though extraction skips it
        assert!(!validate_formula("A+b", true).valid);
    }

    #[test]
    fn test_division_advisory() {
        let r = validate_formula("A/B", true);
        assert!(r.valid);
        assert!(r.success.as_deref().unwrap().contains("division"));
    }

    #[test]
    fn test_percentage_advisory_beats_division() {
        let r = validate_formula("A/B*100", true);
        assert!(r.valid);
        assert!(r.success.as_deref().unwrap().contains("percentage"));
    }

    #[test]
    fn test_plain_formula_advisory_lists_variables() {
        let r = validate_formula("A + B2 + TOTAL", true);
        assert!(r.valid);
        let msg = r.success.as_deref().unwrap();
        assert!(msg.contains("3 variable(s)"));
        assert!(msg.contains("A, B2, TOTAL"));
    }

    #[test]
    fn test_balanced_nested_parentheses() {
        assert!(validate_formula("((A+B)/C)*100", true).valid);
    }
}
