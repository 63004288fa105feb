//! Queries against the linked network transfer library (libcurl).
//!
//! Every entry point runs [`init`] first so libcurl's global state is set up
//! before any accessor is used.

use std::ffi::CStr;
use std::os::raw::c_char;

use serde::Serialize;

use crate::errors::{SampleLibraryError, SampleLibraryResult};

/// Description of the libcurl this library is linked against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferInfo {
    /// Short version, e.g. "8.12.1".
    pub version: String,
    /// Version as 0xXXYYZZ.
    pub version_num: u32,
    /// Build host triple reported by libcurl.
    pub host: String,
    pub ssl_version: Option<String>,
    pub libz_version: Option<String>,
    pub features: Vec<&'static str>,
    pub protocols: Vec<String>,
}

/// One-time global initialization of libcurl. Cheap after the first call.
pub fn init() {
    curl::init();
}

/// Raw pointer to libcurl's full version line
/// (e.g. "libcurl/8.12.1 OpenSSL/3.0.13 zlib/1.3").
///
/// The text lives in libcurl's static storage for the life of the process.
/// Callers must not free it.
pub fn current_version_ptr() -> *const c_char {
    init();
    tracing::trace!("querying curl_version()");
    unsafe { curl_sys::curl_version() as *const c_char }
}

/// libcurl's full version line as a string slice.
pub fn current_version() -> SampleLibraryResult<&'static str> {
    let ptr = current_version_ptr();
    if ptr.is_null() {
        return Err(SampleLibraryError::Transfer(
            "curl_version returned NULL".to_string(),
        ));
    }

    // curl_version() hands out a statically allocated buffer
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .map_err(|e| SampleLibraryError::Transfer(format!("invalid UTF-8 in version: {}", e)))
}

/// Structured description of the linked libcurl.
pub fn info() -> TransferInfo {
    init();
    let version = curl::Version::get();

    let mut features = Vec::new();
    if version.feature_ssl() {
        features.push("ssl");
    }
    if version.feature_libz() {
        features.push("libz");
    }
    if version.feature_http2() {
        features.push("http2");
    }
    if version.feature_ipv6() {
        features.push("ipv6");
    }

    let info = TransferInfo {
        version: version.version().to_string(),
        version_num: version.version_num(),
        host: version.host().to_string(),
        ssl_version: version.ssl_version().map(str::to_string),
        libz_version: version.libz_version().map(str::to_string),
        features,
        protocols: version.protocols().map(str::to_string).collect(),
    };
    tracing::trace!(version = %info.version, "collected transfer library info");
    info
}
