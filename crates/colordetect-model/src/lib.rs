//! Color detection TFLite model, embedded into the program image.
//!
//! The model is compiled into read-only data so firmware without a filesystem
//! can pass it straight to an inference engine:
//!
//! ```
//! use colordetect_model::{model_data, model_data_len, ModelBlob};
//!
//! let blob = ModelBlob::embedded();
//! blob.verify().expect("embedded model is intact");
//! assert_eq!(model_data().len(), model_data_len());
//! ```
//!
//! With the `ffi` feature the same bytes are also exported with C linkage under
//! the names declared in `include/model.h`. The symbol tests only build with
//! that feature: `cargo test -p colordetect-model --features ffi`.
#![cfg_attr(not(feature = "std"), no_std)]

mod blob;
mod crc;
mod error;
#[cfg(feature = "ffi")]
mod ffi;
mod model_data;

pub use blob::*;
pub use crc::crc32;
pub use error::{BlobError, Result};
#[cfg(feature = "ffi")]
pub use ffi::*;
pub use model_data::*;
