//! C SDK for SampleLibrary
//!
//! This crate builds the `samplelibrary` shared and static libraries and
//! generates `include/samplelibrary.h`.

pub mod ffi;

// Re-export all FFI symbols
pub use ffi::*;
