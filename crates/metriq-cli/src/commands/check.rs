use metriq_core::definition;
use metriq_core::error::MetriqError;
use std::path::PathBuf;

use crate::output;

pub fn run(definition_file: PathBuf, output_format: &str) -> Result<(), MetriqError> {
    let def = definition::load_definition(&definition_file)?;
    let report = metriq_core::check_definition(&def);

    match output_format {
        "json" => output::json::print(&report)?,
        _ => output::table::print_report(&report),
    }

    if report.valid {
        Ok(())
    } else {
        Err(MetriqError::DefinitionInvalid(format!(
            "'{}' failed validation",
            def.name
        )))
    }
}
