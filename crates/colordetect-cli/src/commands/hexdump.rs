use anyhow::Result;
use colordetect_model::ModelBlob;
use std::fmt::Write;

use super::{parse_option, reject_unknown};
use crate::config::CliConfig;

const BYTES_PER_ROW: usize = 16;

pub fn execute(args: &[String], config: &CliConfig) -> Result<()> {
    reject_unknown(args, &[], &["--offset", "--length"])?;
    let offset = parse_option::<usize>(args, "--offset")?.unwrap_or(0);
    let length = parse_option::<usize>(args, "--length")?.unwrap_or(config.hexdump_limit);

    let blob = ModelBlob::embedded();
    let (start, bytes) = select_range(blob.as_bytes(), offset, length);
    print!("{}", format_hexdump(bytes, start));
    if start + bytes.len() < blob.len() {
        println!("... {} more bytes", blob.len() - start - bytes.len());
    }
    Ok(())
}

/// Clamps `offset..offset + length` to `bytes`, returning the effective start.
pub fn select_range(bytes: &[u8], offset: usize, length: usize) -> (usize, &[u8]) {
    let start = offset.min(bytes.len());
    let end = start.saturating_add(length).min(bytes.len());
    (start, &bytes[start..end])
}

/// Canonical hex+ASCII layout, 16 bytes per row, offsets relative to the blob.
pub fn format_hexdump(bytes: &[u8], base_offset: usize) -> String {
    let mut out = String::new();

    for (row, chunk) in bytes.chunks(BYTES_PER_ROW).enumerate() {
        let _ = write!(out, "{:08x} ", base_offset + row * BYTES_PER_ROW);

        for i in 0..BYTES_PER_ROW {
            if i == BYTES_PER_ROW / 2 {
                out.push(' ');
            }
            match chunk.get(i) {
                Some(byte) => {
                    let _ = write!(out, " {:02x}", byte);
                }
                None => out.push_str("   "),
            }
        }

        out.push_str("  |");
        out.extend(chunk.iter().map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                b as char
            } else {
                '.'
            }
        }));
        out.push_str("|\n");
    }

    out
}
