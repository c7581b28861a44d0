use metriq_core::error::MetriqError;
use metriq_core::threshold;

use crate::output;

pub fn run(expression: &str, label: &str, output_format: &str) -> Result<(), MetriqError> {
    let result = threshold::format::validate_threshold(expression, label);
    let parsed = threshold::parse(expression);

    match output_format {
        "json" => output::json::print(&serde_json::json!({
            "expression": expression,
            "result": result,
            "parsed": parsed,
        }))?,
        _ => output::table::print_threshold(expression, &result, parsed.as_ref()),
    }

    Ok(())
}
