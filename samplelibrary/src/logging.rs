//! Tracing setup for hosts that load the library.
//!
//! The library never installs a subscriber on its own. Hosts opt in through
//! [`init_logging`] (or `sample_library_init_logging` from C).

use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;

use crate::constants::{envs, logging};
use crate::errors::{SampleLibraryError, SampleLibraryResult};

/// Set once our subscriber is the global default.
static INSTALLED: Mutex<bool> = Mutex::new(false);

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogOptions {
    /// Filter directive, e.g. `"debug"` or `"samplelibrary=trace"`.
    /// `None` falls back to `SAMPLELIBRARY_LOG`, then to `warn`.
    pub filter: Option<String>,
    /// Emit ANSI colors. Off by default since output usually ends up in a host log.
    pub ansi: bool,
}

impl LogOptions {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            filter: Some(filter.into()),
            ..Default::default()
        }
    }

    /// Build the filter for these options.
    ///
    /// An explicit directive must parse. An unparsable `SAMPLELIBRARY_LOG`
    /// value is ignored in favor of the default.
    pub fn env_filter(&self) -> SampleLibraryResult<EnvFilter> {
        if let Some(directive) = &self.filter {
            return EnvFilter::try_new(directive).map_err(|e| {
                SampleLibraryError::InvalidArgument(format!(
                    "invalid log filter '{}': {}",
                    directive, e
                ))
            });
        }

        Ok(EnvFilter::try_from_env(envs::SAMPLELIBRARY_LOG)
            .unwrap_or_else(|_| EnvFilter::new(logging::DEFAULT_FILTER)))
    }
}

/// Install a stderr `fmt` subscriber as the global default.
///
/// Safe to call multiple times: once installed, later calls only validate
/// their filter and return `Ok`. Fails with [`SampleLibraryError::Logging`]
/// if the host process already installed its own global subscriber.
pub fn init_logging(options: &LogOptions) -> SampleLibraryResult<()> {
    let env_filter = options.env_filter()?;

    let mut installed = INSTALLED.lock();
    if *installed {
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .with_target(true)
        .with_ansi(options.ansi)
        .try_init()
        .map_err(|e| SampleLibraryError::Logging(e.to_string()))?;

    *installed = true;
    tracing::debug!(version = crate::VERSION, "samplelibrary logging initialized");
    Ok(())
}

/// Whether [`init_logging`] has installed its subscriber in this process.
pub fn is_initialized() -> bool {
    *INSTALLED.lock()
}
