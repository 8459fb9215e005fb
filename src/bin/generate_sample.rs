use std::path::Path;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use rusty_sorter::data::{detect_kind, generate_with, save_lines, DataKind};

/// Tokens written per sample file.
const SAMPLE_SIZE: usize = 1000;

fn main() -> Result<()> {
    env_logger::init();

    // Fixed seed so the sample files are reproducible.
    let mut rng = StdRng::seed_from_u64(42);

    for (kind, output_path) in [
        (DataKind::Integer, "sample_integers.txt"),
        (DataKind::Double, "sample_doubles.txt"),
        (DataKind::String, "sample_strings.txt"),
    ] {
        let tokens = generate_with(&mut rng, kind, SAMPLE_SIZE);
        save_lines(&tokens, Path::new(output_path))
            .with_context(|| format!("writing {kind} sample"))?;

        println!(
            "Wrote {} {kind} tokens (detected as {}) to {output_path}",
            tokens.len(),
            detect_kind(&tokens)
        );
    }

    Ok(())
}
