//! C linkage for the embedded model.
//!
//! `MODEL_DATA` itself is exported as `models_model_no_quant_tflite` by the
//! generated code; this module adds the length companion declared in
//! `include/model.h`.

use core::ffi::c_int;

use crate::model_data::MODEL_DATA_LEN;

const _: () = assert!(MODEL_DATA_LEN <= c_int::MAX as usize, "model does not fit a C int length");

/// Number of bytes in `models_model_no_quant_tflite`.
#[unsafe(export_name = "models_model_no_quant_tflite_len")]
pub static MODEL_DATA_LEN_C: c_int = MODEL_DATA_LEN as c_int;
