use std::env;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[path = "src/crc.rs"]
#[allow(dead_code)]
mod crc;

const DEFAULT_MODEL: &str = "models/model_no_quant.tflite";
const TFLITE_IDENTIFIER: &[u8; 4] = b"TFL3";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let start_time = Instant::now();

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=COLORDETECT_MODEL_PATH");
    println!("cargo:rerun-if-env-changed=COLORDETECT_ALLOW_FOREIGN_MODEL");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let model_path = resolve_model_path(&manifest_dir);
    println!("cargo:rerun-if-changed={}", model_path.display());

    println!("cargo:info=Embedding model from {:?}...", model_path);
    let model_path = fs::canonicalize(&model_path)
        .map_err(|e| format!("Model file not found at {}: {}", model_path.display(), e))?;
    let bytes = fs::read(&model_path)
        .map_err(|e| format!("Failed to read {}: {}", model_path.display(), e))?;

    validate_model(&bytes)?;

    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("model_data.rs");
    let file = File::create(&dest_path)?;
    let mut writer = BufWriter::new(file);
    write_model_data(&mut writer, &model_path, &bytes)?;
    writer.flush()?;

    let elapsed = start_time.elapsed();
    println!(
        "cargo:info=Embedded {} model bytes in {:.2?}",
        bytes.len(),
        elapsed
    );

    Ok(())
}

/// Picks the model file, honouring `COLORDETECT_MODEL_PATH` relative to the manifest
fn resolve_model_path(manifest_dir: &Path) -> PathBuf {
    match env::var("COLORDETECT_MODEL_PATH") {
        Ok(path) if !path.trim().is_empty() => {
            let path = PathBuf::from(path.trim());
            if path.is_absolute() {
                path
            } else {
                manifest_dir.join(path)
            }
        }
        _ => manifest_dir.join(DEFAULT_MODEL),
    }
}

/// Rejects model files that cannot be a TFLite flatbuffer
fn validate_model(bytes: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    if bytes.is_empty() {
        return Err("Model file is empty".into());
    }

    if i32::try_from(bytes.len()).is_err() {
        return Err(format!("Model is too large to embed: {} bytes", bytes.len()).into());
    }

    let identifier = bytes.get(4..8);
    if identifier != Some(TFLITE_IDENTIFIER.as_slice()) {
        let allow_foreign = env::var("COLORDETECT_ALLOW_FOREIGN_MODEL")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        if !allow_foreign {
            return Err(format!(
                "Model file has no TFL3 identifier (found {:?}); set COLORDETECT_ALLOW_FOREIGN_MODEL=1 to embed it anyway",
                identifier
            )
            .into());
        }
        println!("cargo:warning=Embedding a model without the TFL3 file identifier");
    }

    Ok(())
}

/// Writes the generated module included by `src/model_data.rs`
fn write_model_data(
    writer: &mut BufWriter<File>,
    model_path: &Path,
    bytes: &[u8],
) -> Result<(), Box<dyn std::error::Error>> {
    let source = format!("{:?}", model_path.display().to_string());

    writeln!(writer, "// Generated by build.rs, do not edit.")?;
    writeln!(writer)?;
    writeln!(writer, "/// Path of the model file the bytes were read from at build time")?;
    writeln!(writer, "pub const MODEL_SOURCE: &str = {};", source)?;
    writeln!(writer)?;
    writeln!(writer, "/// Size of the embedded model in bytes")?;
    writeln!(writer, "pub const MODEL_DATA_LEN: usize = {};", bytes.len())?;
    writeln!(writer)?;
    writeln!(writer, "/// CRC-32 of the embedded model, computed at build time")?;
    writeln!(writer, "pub const MODEL_DATA_CRC32: u32 = {:#010x};", crc::crc32(bytes))?;
    writeln!(writer)?;
    writeln!(writer, "/// The serialized model")?;
    writeln!(
        writer,
        "#[cfg_attr(feature = \"ffi\", unsafe(export_name = \"models_model_no_quant_tflite\"))]"
    )?;
    // The array type pins the length: a file that changed size after measuring fails to compile.
    writeln!(
        writer,
        "pub static MODEL_DATA: [u8; MODEL_DATA_LEN] = *include_bytes!({});",
        source
    )?;

    Ok(())
}
