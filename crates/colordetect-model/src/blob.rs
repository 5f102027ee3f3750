use core::ops::Deref;

use tracing::{debug, warn};

use crate::crc::crc32;
use crate::error::{BlobError, Result};
use crate::model_data::{MODEL_DATA, MODEL_DATA_CRC32, MODEL_DATA_LEN, MODEL_SOURCE};

/// File identifier stored at bytes 4..8 of every TFLite flatbuffer
pub const TFLITE_IDENTIFIER: [u8; 4] = *b"TFL3";

/// Size of the flatbuffer header: root table offset followed by the identifier
pub const HEADER_LEN: usize = 8;

const UNKNOWN_SOURCE: &str = "<static>";

/// Read-only view of a serialized model with static lifetime.
///
/// Besides the bytes it carries what the build recorded about them (declared
/// length, checksum, source path) so a consumer can check the blob before
/// handing it to an inference engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelBlob {
    bytes: &'static [u8],
    declared_len: usize,
    crc32: u32,
    source: &'static str,
}

impl ModelBlob {
    /// The model embedded into this binary at build time.
    pub const fn embedded() -> Self {
        Self {
            bytes: &MODEL_DATA,
            declared_len: MODEL_DATA_LEN,
            crc32: MODEL_DATA_CRC32,
            source: MODEL_SOURCE,
        }
    }

    /// Wraps another static buffer, taking length and checksum from the bytes.
    pub fn from_static(bytes: &'static [u8]) -> Self {
        Self {
            bytes,
            declared_len: bytes.len(),
            crc32: crc32(bytes),
            source: UNKNOWN_SOURCE,
        }
    }

    /// Wraps a static buffer with separately recorded length and checksum,
    /// as a generated C array and its `_len` companion would provide them.
    pub const fn from_parts(bytes: &'static [u8], declared_len: usize, crc32: u32) -> Self {
        Self {
            bytes,
            declared_len,
            crc32,
            source: UNKNOWN_SOURCE,
        }
    }

    pub const fn as_bytes(&self) -> &'static [u8] {
        self.bytes
    }

    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Length recorded alongside the bytes. Equal to [`len`](Self::len) for any valid blob.
    pub const fn declared_len(&self) -> usize {
        self.declared_len
    }

    /// Pointer to the first byte, for handing the model across an FFI boundary.
    pub const fn as_ptr(&self) -> *const u8 {
        self.bytes.as_ptr()
    }

    /// Checksum recorded when the blob was produced.
    pub const fn crc32(&self) -> u32 {
        self.crc32
    }

    pub const fn source(&self) -> &'static str {
        self.source
    }

    /// Little-endian offset of the flatbuffer root table.
    pub fn root_table_offset(&self) -> Option<u32> {
        let word = self.bytes.get(0..4)?;
        Some(u32::from_le_bytes([word[0], word[1], word[2], word[3]]))
    }

    /// The four identifier bytes following the root offset.
    pub fn file_identifier(&self) -> Option<[u8; 4]> {
        let id = self.bytes.get(4..HEADER_LEN)?;
        Some([id[0], id[1], id[2], id[3]])
    }

    pub fn is_tflite(&self) -> bool {
        self.file_identifier() == Some(TFLITE_IDENTIFIER)
    }

    /// Checks only that the declared length matches the buffer.
    pub fn verify_length(&self) -> Result<()> {
        if self.declared_len != self.bytes.len() {
            return Err(BlobError::LengthMismatch {
                declared: self.declared_len,
                actual: self.bytes.len(),
            });
        }
        Ok(())
    }

    /// Runs every loading-time check: length, header, then checksum.
    pub fn verify(&self) -> Result<()> {
        debug!(source = self.source, len = self.len(), "Verifying model blob");

        let result = self.verify_inner();
        if let Err(err) = &result {
            warn!(source = self.source, error = %err, "Model blob failed verification");
        }
        result
    }

    fn verify_inner(&self) -> Result<()> {
        self.verify_length()?;

        let len = self.bytes.len();
        let (offset, identifier) = match (self.root_table_offset(), self.file_identifier()) {
            (Some(offset), Some(identifier)) => (offset, identifier),
            _ => return Err(BlobError::TooShort { len }),
        };

        if identifier != TFLITE_IDENTIFIER {
            return Err(BlobError::UnknownIdentifier { found: identifier });
        }

        // Root table sits after the header and is 4-byte aligned
        if (offset as usize) < HEADER_LEN || offset as usize >= len || offset % 4 != 0 {
            return Err(BlobError::RootOffsetOutOfBounds { offset, len });
        }

        let actual = crc32(self.bytes);
        if actual != self.crc32 {
            return Err(BlobError::ChecksumMismatch {
                expected: self.crc32,
                actual,
            });
        }

        Ok(())
    }
}

impl Default for ModelBlob {
    fn default() -> Self {
        Self::embedded()
    }
}

impl Deref for ModelBlob {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.bytes
    }
}

impl AsRef<[u8]> for ModelBlob {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}
