//! Constants for SampleLibrary.
//!
//! Centralized location for environment variable names and logging defaults.

pub mod envs {
    /// Filter directive for the tracing subscriber (same syntax as `RUST_LOG`).
    pub const SAMPLELIBRARY_LOG: &str = "SAMPLELIBRARY_LOG";
}

/// Logging defaults
pub mod logging {
    /// Filter used when neither an explicit directive nor the environment provides one.
    pub const DEFAULT_FILTER: &str = "warn";
}
