//! Direct access to the embedded TFLite model.
//!
//! The bytes are pulled in with `include_bytes!` by code generated in
//! `build.rs`, so the model is part of the read-only data of the binary and
//! needs no filesystem at runtime.

include!(concat!(env!("OUT_DIR"), "/model_data.rs"));

/// Returns the embedded model bytes.
///
/// The slice lives for the whole program and never changes.
#[inline]
pub fn model_data() -> &'static [u8] {
    &MODEL_DATA
}

/// Returns the number of bytes in [`model_data`].
#[inline]
pub const fn model_data_len() -> usize {
    MODEL_DATA_LEN
}
