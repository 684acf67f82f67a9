//! Quantize command implementation.

use parallax_quantize::{quantize, GEOM_PRECISION_METERS, PATCH_PRECISION_METERS};

pub fn run(value: f64, precision: &str) -> Result<(), Box<dyn std::error::Error>> {
    let precision_meters = match precision {
        "geom" => GEOM_PRECISION_METERS,
        "patch" => PATCH_PRECISION_METERS,
        other => return Err(format!("Unknown precision: {} (expected geom or patch)", other).into()),
    };

    let result = quantize(value, precision_meters);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
