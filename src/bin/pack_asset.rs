use std::path::PathBuf;

use anyhow::{Context, Result};

/// Print the embedded-asset encoding of a text file: gzip, then base64.
///
/// Usage: `pack-asset <art.txt> [<out.b64>]`. Without an output path the
/// payload goes to stdout.
fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(input) = args.first().map(PathBuf::from) else {
        anyhow::bail!("usage: pack-asset <art.txt> [<out.b64>]");
    };

    let text = std::fs::read_to_string(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let payload = pamcan::render::pack(&text).context("failed to compress art")?;

    match args.get(1).map(PathBuf::from) {
        Some(out) => {
            std::fs::write(&out, &payload)
                .with_context(|| format!("failed to write {}", out.display()))?;
            eprintln!(
                "Packed {} -> {} ({} bytes)",
                input.display(),
                out.display(),
                payload.len()
            );
        }
        None => println!("{payload}"),
    }
    Ok(())
}
