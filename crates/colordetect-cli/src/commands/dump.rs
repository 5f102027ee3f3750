use anyhow::{Context, Result, anyhow};
use colordetect_model::ModelBlob;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

pub fn execute(args: &[String]) -> Result<()> {
    let target = match args {
        [target] => target.as_str(),
        [] => return Err(anyhow!("dump requires an output path, or '-' for stdout")),
        _ => return Err(anyhow!("dump takes exactly one output path")),
    };

    let blob = ModelBlob::embedded();
    write_blob(&blob, target)?;
    debug!(path = target, len = blob.len(), "Dumped model");
    Ok(())
}

/// Writes the exact bytes of `blob` to `target`, `-` meaning stdout.
pub fn write_blob(blob: &ModelBlob, target: &str) -> Result<()> {
    if target == "-" {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(blob.as_bytes()).context("Failed to write model to stdout")?;
        handle.flush()?;
        return Ok(());
    }

    let path = Path::new(target);
    fs::write(path, blob.as_bytes())
        .with_context(|| format!("Failed to write model to {}", path.display()))?;
    eprintln!("Wrote {} bytes to {}", blob.len(), path.display());
    Ok(())
}
