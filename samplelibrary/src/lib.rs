//! SampleLibrary
//!
//! Safe Rust API behind the `samplelibrary` shared library: wrapping integer
//! arithmetic, 3D vector length (computed by `glam`) and the version of the
//! linked libcurl. The C SDK in `sdks/c` re-exports these with C linkage.

pub mod arith;
pub mod constants;
pub mod errors;
pub mod geometry;
pub mod logging;
pub mod transfer;

pub use arith::{add, multiply};
pub use errors::{SampleLibraryError, SampleLibraryResult};
pub use geometry::vector_length;
pub use logging::{LogOptions, init_logging};
pub use transfer::TransferInfo;

/// Package version of this library (e.g. "1.0.0").
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
