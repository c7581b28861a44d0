use metriq_core::model::{Operator, ThresholdExpression, ValidationResult};
use metriq_core::DefinitionReport;

pub fn print_report(report: &DefinitionReport) {
    println!("=== {} ===\n", report.metric);

    print_validation("Formula", &report.formula);
    print_validation("Desired threshold", &report.desired_threshold);
    print_validation("Worst case", &report.worst_case);
    print_validation("Variables", &report.variables);

    if !report.fixed_variables.is_empty() {
        println!("\n  Fixed variables (locked on data entry):");
        for a in &report.fixed_variables {
            println!("    {} = {}  ({})", a.symbol, a.fixed_value, a.reason);
        }
    }

    println!(
        "\n  Overall: {}",
        if report.valid { "valid" } else { "INVALID" }
    );
}

pub fn print_validation(label: &str, result: &ValidationResult) {
    let status = if result.valid { "ok" } else { "FAIL" };
    println!("  {:<18} {}", label, status);
    if let Some(ref e) = result.error {
        println!("    error: {e}");
    }
    if let Some(ref w) = result.warning {
        println!("    warning: {w}");
    }
    if let Some(ref s) = result.success {
        println!("    note: {s}");
    }
}

pub fn print_threshold(
    expression: &str,
    result: &ValidationResult,
    parsed: Option<&ThresholdExpression>,
) {
    println!("'{expression}'\n");
    print_validation("Format", result);

    match parsed {
        Some(expr) => {
            let operator = if expr.operator == Operator::None {
                "(none)".to_string()
            } else {
                expr.operator.to_string()
            };
            let unit = match expr.unit {
                Some(u) => u.to_string(),
                None => "(none)".to_string(),
            };
            println!("\n  Parsed:");
            println!("    operator:  {operator}");
            println!("    magnitude: {}", expr.magnitude);
            println!("    unit:      {unit}");
        }
        None => println!("\n  Parsed: (unparseable)"),
    }
}
