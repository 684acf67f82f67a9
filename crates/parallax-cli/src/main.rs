//! Parallax CLI - canonical bytes, identity digests, quantization, and
//! field-set hashes for validator tooling.

use clap::{Parser, Subcommand};

mod commands;

use commands::{canonicalize, digest, fieldset, quantize};

#[derive(Parser)]
#[command(name = "parallax")]
#[command(about = "Parallax deterministic identity and canonical-digest tooling")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show canonical bytes for input JSON
    Canonicalize {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
    },
    /// Compute a digest over input JSON
    Digest {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Registered domain tag (patch, geom, mesh-epoch, asset-root, evidence)
        #[arg(long)]
        domain: Option<String>,
    },
    /// Quantize a raw measurement in meters
    Quantize {
        /// Raw value in meters (may be negative)
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Named precision: geom (1 mm) or patch (10 um)
        #[arg(long, default_value = "geom")]
        precision: String,
    },
    /// Compute the field-set (schema-drift) hash of a descriptor
    Fieldset {
        /// Descriptor JSON file (or stdin if not provided)
        input: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Canonicalize { input } => canonicalize::run(input),
        Commands::Digest { input, domain } => digest::run(input, domain),
        Commands::Quantize { value, precision } => quantize::run(value, &precision),
        Commands::Fieldset { input } => fieldset::run(input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
