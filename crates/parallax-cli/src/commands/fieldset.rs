//! Fieldset command implementation.

use parallax_schemas::FieldSetDescriptor;

use super::read_json_input;

pub fn run(input: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let value = read_json_input(input)?;

    let descriptor: FieldSetDescriptor =
        serde_json::from_value(value).map_err(|e| format!("Invalid descriptor: {}", e))?;

    println!("{}", descriptor.hash().hex);
    Ok(())
}
