use metriq_core::error::MetriqError;
use metriq_core::{formula, infer};

use crate::output;

pub fn validate(formula_str: &str, optional: bool) -> Result<(), MetriqError> {
    let result = formula::validate_formula(formula_str, !optional);
    output::table::print_validation("Formula", &result);
    Ok(())
}

pub fn variables(formula_str: &str) -> Result<(), MetriqError> {
    let vars = formula::variables::extract_variables(formula_str);
    if vars.is_empty() {
        println!("No variables referenced.");
    } else {
        println!("{} variable(s):", vars.len());
        for v in &vars {
            println!("  {v}");
        }
    }
    Ok(())
}

pub fn infer(
    formula_str: &str,
    desired: Option<&str>,
    worst: Option<&str>,
) -> Result<(), MetriqError> {
    let fixed = infer::infer_fixed_variables(formula_str, desired, worst);
    if fixed.is_empty() {
        println!("No fixed variables; all variables are free user input.");
    } else {
        println!("Fixed variables:");
        for a in &fixed {
            println!("  {} = {}  ({})", a.symbol, a.fixed_value, a.reason);
        }
    }
    Ok(())
}
