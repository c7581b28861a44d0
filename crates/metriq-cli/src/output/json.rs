use metriq_core::error::MetriqError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), MetriqError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
