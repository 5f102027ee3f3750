use thiserror::Error;

/// Reasons a model blob fails its loading-time checks
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlobError {
    #[error("Declared length {declared} does not match buffer length {actual}")]
    LengthMismatch { declared: usize, actual: usize },

    #[error("Model blob is too short to hold a flatbuffer header: {len} bytes")]
    TooShort { len: usize },

    #[error("Unknown file identifier {found:?}, expected TFL3")]
    UnknownIdentifier { found: [u8; 4] },

    #[error("Root table offset {offset} is outside the {len}-byte blob")]
    RootOffsetOutOfBounds { offset: u32, len: usize },

    #[error("Checksum mismatch: expected {expected:#010x}, got {actual:#010x}")]
    ChecksumMismatch { expected: u32, actual: u32 },
}

pub type Result<T> = core::result::Result<T, BlobError>;
