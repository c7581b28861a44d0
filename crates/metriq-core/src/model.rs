use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operator at the front of a threshold expression.
///
/// `None` means the threshold is a bare magnitude; downstream consumers
/// treat that as implicit equality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    #[default]
    None,
    Gte,
    Lte,
    Gt,
    Lt,
    Eq,
}

impl Operator {
    /// The source token for this operator; empty for `None`.
    pub fn token(&self) -> &'static str {
        match self {
            Operator::None => "",
            Operator::Gte => ">=",
            Operator::Lte => "<=",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::Eq => "=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Magnitude {
    Scalar(Decimal),
    Ratio {
        numerator: Decimal,
        denominator: Decimal,
    },
}

impl Magnitude {
    pub fn is_ratio(&self) -> bool {
        matches!(self, Magnitude::Ratio { .. })
    }

    /// The denominator, for ratio magnitudes.
    pub fn denominator(&self) -> Option<Decimal> {
        match self {
            Magnitude::Scalar(_) => None,
            Magnitude::Ratio { denominator, .. } => Some(*denominator),
        }
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Magnitude::Scalar(v) => write!(f, "{v}"),
            Magnitude::Ratio {
                numerator,
                denominator,
            } => write!(f, "{numerator}/{denominator}"),
        }
    }
}

/// Recognized threshold units. Matching is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Min,
    Seg,
    S,
    Ms,
    H,
    #[serde(rename = "%")]
    Percent,
}

impl Unit {
    pub fn token(&self) -> &'static str {
        match self {
            Unit::Min => "min",
            Unit::Seg => "seg",
            Unit::S => "s",
            Unit::Ms => "ms",
            Unit::H => "h",
            Unit::Percent => "%",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Structured form of one threshold string. Built once per parse call,
/// never persisted; callers re-parse the raw string on every check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdExpression {
    pub operator: Operator,
    pub magnitude: Magnitude,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
}

/// A variable symbol plus human description, as registered by an
/// administrator alongside a formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredVariable {
    pub symbol: String,
    #[serde(default)]
    pub description: String,
}

/// A formula variable whose value is implied by a threshold denominator
/// instead of being collected from the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedVariableAssignment {
    pub symbol: String,
    pub fixed_value: Decimal,
    pub reason: String,
}

/// Outcome of one validating function.
///
/// `error` is set exactly when `valid` is false; `warning` and `success`
/// are advisory and never affect `valid`. Construct through the
/// associated functions so that invariant holds everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        ValidationResult {
            valid: true,
            error: None,
            warning: None,
            success: None,
        }
    }

    pub fn ok_with_success(message: impl Into<String>) -> Self {
        ValidationResult {
            success: Some(message.into()),
            ..ValidationResult::ok()
        }
    }

    pub fn ok_with_warning(message: impl Into<String>) -> Self {
        ValidationResult {
            warning: Some(message.into()),
            ..ValidationResult::ok()
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        ValidationResult {
            valid: false,
            error: Some(message.into()),
            warning: None,
            success: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_operator_tokens() {
        assert_eq!(Operator::Gte.to_string(), ">=");
        assert_eq!(Operator::Lte.to_string(), "<=");
        assert_eq!(Operator::None.to_string(), "");
    }

    #[test]
    fn test_magnitude_display() {
        assert_eq!(Magnitude::Scalar(dec!(20)).to_string(), "20");
        let ratio = Magnitude::Ratio {
            numerator: dec!(10),
            denominator: dec!(3),
        };
        assert_eq!(ratio.to_string(), "10/3");
    }

    #[test]
    fn test_magnitude_denominator() {
        assert_eq!(Magnitude::Scalar(dec!(5)).denominator(), None);
        let ratio = Magnitude::Ratio {
            numerator: dec!(0),
            denominator: dec!(1),
        };
        assert_eq!(ratio.denominator(), Some(dec!(1)));
    }

    #[test]
    fn test_unit_tokens() {
        assert_eq!(Unit::Min.to_string(), "min");
        assert_eq!(Unit::Percent.to_string(), "%");
    }

    #[test]
    fn test_validation_result_error_only_when_invalid() {
        let ok = ValidationResult::ok_with_success("fine");
        assert!(ok.valid);
        assert!(ok.error.is_none());

        let fail = ValidationResult::fail("broken");
        assert!(!fail.valid);
        assert_eq!(fail.error.as_deref(), Some("broken"));
        assert!(fail.success.is_none());
    }
}
