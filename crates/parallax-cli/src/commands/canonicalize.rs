//! Canonicalize command implementation.

use parallax_canonical::{canonical_bytes, CanonicalValue};

use super::read_json_input;

pub fn run(input: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let value = read_json_input(input)?;

    let canonical = CanonicalValue::from_json(&value)
        .map_err(|e| format!("Canonicalization failed: {}", e))?;
    let bytes = canonical_bytes(&canonical);

    println!("{}", String::from_utf8_lossy(&bytes));
    Ok(())
}
