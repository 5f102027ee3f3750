use anyhow::{Context, Result};
use colordetect_model::ModelBlob;
use tracing::info;

use super::reject_unknown;

pub fn execute(args: &[String]) -> Result<()> {
    reject_unknown(args, &[], &[])?;

    let blob = ModelBlob::embedded();
    blob.verify()
        .with_context(|| format!("Embedded model from {} failed verification", blob.source()))?;

    info!(len = blob.len(), crc32 = blob.crc32(), "Model verified");
    println!("OK: {} bytes, crc32 {:#010x}", blob.len(), blob.crc32());
    Ok(())
}
