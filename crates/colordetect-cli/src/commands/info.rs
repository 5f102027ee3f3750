use anyhow::Result;
use colordetect_model::ModelBlob;
use serde::Serialize;

use super::reject_unknown;

/// Summary of a model blob as printed by `info`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlobInfo {
    pub source: String,
    pub len: usize,
    pub declared_len: usize,
    pub identifier: Option<String>,
    pub root_table_offset: Option<u32>,
    pub crc32: String,
    pub tflite: bool,
}

impl BlobInfo {
    pub fn from_blob(blob: &ModelBlob) -> Self {
        Self {
            source: blob.source().to_string(),
            len: blob.len(),
            declared_len: blob.declared_len(),
            identifier: blob
                .file_identifier()
                .map(|id| String::from_utf8_lossy(&id).into_owned()),
            root_table_offset: blob.root_table_offset(),
            crc32: format!("{:#010x}", blob.crc32()),
            tflite: blob.is_tflite(),
        }
    }
}

pub fn execute(args: &[String]) -> Result<()> {
    reject_unknown(args, &["--json"], &[])?;
    let json = args.iter().any(|arg| arg == "--json");

    let info = BlobInfo::from_blob(&ModelBlob::embedded());
    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        print_info(&info);
    }
    Ok(())
}

fn print_info(info: &BlobInfo) {
    println!("Source:            {}", info.source);
    println!("Length:            {} bytes", info.len);
    println!("Declared length:   {} bytes", info.declared_len);
    println!(
        "Identifier:        {}",
        info.identifier.as_deref().unwrap_or("<none>")
    );
    match info.root_table_offset {
        Some(offset) => println!("Root table offset: {}", offset),
        None => println!("Root table offset: <none>"),
    }
    println!("CRC-32:            {}", info.crc32);
    println!("TFLite:            {}", if info.tflite { "yes" } else { "no" });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_for_embedded_model() {
        let blob = ModelBlob::embedded();
        let info = BlobInfo::from_blob(&blob);
        assert_eq!(info.len, blob.len());
        assert_eq!(info.declared_len, info.len);
        assert_eq!(info.identifier.as_deref(), Some("TFL3"));
        assert!(info.tflite);
        assert_eq!(info.crc32.len(), 10);
        assert!(info.crc32.starts_with("0x"));
    }

    #[test]
    fn test_info_for_short_blob() {
        let info = BlobInfo::from_blob(&ModelBlob::from_static(b"TF"));
        assert_eq!(info.identifier, None);
        assert_eq!(info.root_table_offset, None);
        assert!(!info.tflite);
    }

    #[test]
    fn test_info_json_fields() {
        let info = BlobInfo::from_blob(&ModelBlob::embedded());
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["len"], serde_json::json!(info.len));
        assert_eq!(value["identifier"], "TFL3");
        assert_eq!(value["tflite"], true);
    }
}
