//! Digest command implementation.

use parallax_canonical::{compute_identity, digest_value, domain::DomainTag, CanonicalValue};

use super::read_json_input;

pub fn run(input: Option<String>, domain: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let value = read_json_input(input)?;

    let canonical = CanonicalValue::from_json(&value)
        .map_err(|e| format!("Canonicalization failed: {}", e))?;

    let digest = match domain {
        Some(name) => {
            let tag = DomainTag::by_name(&name)
                .ok_or_else(|| format!("Unknown domain tag: {}", name))?;
            compute_identity(tag, &canonical)
        }
        None => digest_value(&canonical),
    };

    println!("{}", digest.hex);
    Ok(())
}
