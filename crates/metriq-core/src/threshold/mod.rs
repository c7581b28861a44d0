pub mod format;

use crate::model::{Magnitude, Operator, ThresholdExpression, Unit};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a threshold expression string.
///
/// Handles formats like:
/// - "20" -> bare scalar
/// - "0%" -> scalar with unit
/// - "20 min" -> scalar with unit
/// - ">=10/3min" -> operator, ratio, unit
/// - "<=0.5" -> operator, scalar
///
/// Total function: anything unparseable yields `None`, the caller decides
/// how to report it. Stages run in a fixed order: operator prefix, unit
/// suffix, whitespace removal, then ratio-or-scalar magnitude.
pub fn parse(input: &str) -> Option<ThresholdExpression> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    let (operator, rest) = strip_operator(s);
    let (unit, rest) = strip_unit(rest);

    // "10 / 3" and "10/3" are equivalent
    let numeric: String = rest.chars().filter(|c| !c.is_whitespace()).collect();

    let magnitude = parse_magnitude(&numeric)?;
    Some(ThresholdExpression {
        operator,
        magnitude,
        unit,
    })
}

/// Two-character operators checked first so ">=" is not split into ">" + "=".
const OPERATOR_TOKENS: &[(&str, Operator)] = &[
    (">=", Operator::Gte),
    ("<=", Operator::Lte),
    (">", Operator::Gt),
    ("<", Operator::Lt),
    ("=", Operator::Eq),
];

pub(crate) fn strip_operator(s: &str) -> (Operator, &str) {
    for (token, op) in OPERATOR_TOKENS {
        if let Some(rest) = s.strip_prefix(token) {
            return (*op, rest);
        }
    }
    (Operator::None, s)
}

/// Longer tokens first so "min" and "ms" are not consumed as a bare "s".
const UNIT_TOKENS: &[(&str, Unit)] = &[
    ("min", Unit::Min),
    ("seg", Unit::Seg),
    ("ms", Unit::Ms),
    ("s", Unit::S),
    ("h", Unit::H),
    ("%", Unit::Percent),
];

/// Strip a recognized unit suffix (case-sensitive) together with any
/// whitespace before it. No valid magnitude ends with a unit character,
/// so a greedy suffix match never steals part of a number.
pub(crate) fn strip_unit(s: &str) -> (Option<Unit>, &str) {
    for (token, unit) in UNIT_TOKENS {
        if let Some(rest) = s.strip_suffix(token) {
            return (Some(*unit), rest.trim_end());
        }
    }
    (None, s)
}

fn parse_magnitude(s: &str) -> Option<Magnitude> {
    if s.is_empty() {
        return None;
    }

    if s.contains('/') {
        if !is_complete_ratio(s) {
            return None;
        }
        let (num, den) = s.split_once('/')?;
        let numerator = Decimal::from_str(num).ok()?;
        let denominator = Decimal::from_str(den).ok()?;
        return Some(Magnitude::Ratio {
            numerator,
            denominator,
        });
    }

    Decimal::from_str(s).ok().map(Magnitude::Scalar)
}

/// Both sides of the slash must be syntactically complete numbers;
/// "10/" and "/10" are never degenerate ratios.
pub(crate) fn is_complete_ratio(s: &str) -> bool {
    match s.split_once('/') {
        Some((num, den)) => is_plain_number(num) && is_plain_number(den),
        None => false,
    }
}

/// Digits with at most one decimal point and at least one digit.
fn is_plain_number(s: &str) -> bool {
    !s.is_empty()
        && s.chars().all(|c| c.is_ascii_digit() || c == '.')
        && s.chars().filter(|&c| c == '.').count() <= 1
        && s.chars().any(|c| c.is_ascii_digit())
}
