//! C FFI bindings for SampleLibrary
//!
//! Every function here is exported with C linkage and an unmangled name, so
//! the generated header can be consumed from C, C++ or any language with a
//! C FFI. Only plain scalars and NUL-terminated strings cross the boundary.
//!
//! # Safety
//!
//! Returned string pointers point into static storage (ours or libcurl's).
//! Callers must never free them.

#![allow(clippy::missing_safety_doc)]

use std::ffi::CStr;
use std::os::raw::{c_char, c_int};

use samplelibrary::{LogOptions, SampleLibraryError, transfer};

// ============================================================================
// Error Code Enum - Maps to SampleLibraryError variants
// ============================================================================

/// Error codes returned by SampleLibrary C API functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleLibraryErrorCode {
    /// Operation succeeded
    Ok = 0,
    /// Internal error
    Internal = 1,
    /// Invalid argument provided
    InvalidArgument = 2,
    /// Logging could not be initialized
    Logging = 3,
    /// Transfer library error
    Transfer = 4,
}

// ============================================================================
// Error Conversion Helpers
// ============================================================================

/// Map SampleLibraryError to SampleLibraryErrorCode
fn error_to_code(err: &SampleLibraryError) -> SampleLibraryErrorCode {
    match err {
        SampleLibraryError::Internal(_) => SampleLibraryErrorCode::Internal,
        SampleLibraryError::InvalidArgument(_) => SampleLibraryErrorCode::InvalidArgument,
        SampleLibraryError::Logging(_) => SampleLibraryErrorCode::Logging,
        SampleLibraryError::Transfer(_) => SampleLibraryErrorCode::Transfer,
    }
}

/// Log the error and hand back its code
fn fail(err: SampleLibraryError) -> SampleLibraryErrorCode {
    tracing::warn!(error = %err, "samplelibrary call failed");
    error_to_code(&err)
}

/// Helper to convert C string to Rust string
unsafe fn c_str_to_string(s: *const c_char) -> Result<String, SampleLibraryError> {
    if s.is_null() {
        return Err(SampleLibraryError::InvalidArgument(
            "null pointer".to_string(),
        ));
    }
    unsafe {
        CStr::from_ptr(s)
            .to_str()
            .map(|s| s.to_string())
            .map_err(|e| SampleLibraryError::InvalidArgument(format!("invalid UTF-8: {}", e)))
    }
}

// ============================================================================
// Arithmetic and geometry
// ============================================================================

/// Add two 32-bit integers, wrapping on overflow.
#[unsafe(no_mangle)]
pub extern "C" fn sample_library_add(a: i32, b: i32) -> i32 {
    samplelibrary::add(a, b)
}

/// Multiply two 32-bit integers, wrapping on overflow.
#[unsafe(no_mangle)]
pub extern "C" fn sample_library_multiply(a: i32, b: i32) -> i32 {
    samplelibrary::multiply(a, b)
}

/// Euclidean length of the vector (x, y, z).
///
/// # Returns
/// NaN if any component is NaN, otherwise a non-negative value
#[unsafe(no_mangle)]
pub extern "C" fn sample_library_vector_length(x: f32, y: f32, z: f32) -> f32 {
    samplelibrary::vector_length(x, y, z)
}

// ============================================================================
// Versions
// ============================================================================

/// Get the version line of the linked libcurl
///
/// # Returns
/// NUL-terminated string such as "libcurl/8.12.1 OpenSSL/3.0.13 zlib/1.3".
/// The string is owned by libcurl and stays valid for the life of the
/// process. Do not free it.
#[unsafe(no_mangle)]
pub extern "C" fn sample_library_curl_current_version() -> *const c_char {
    transfer::current_version_ptr()
}

/// Get SampleLibrary version string
///
/// # Returns
/// Static string containing the version (e.g., "1.0.0")
#[unsafe(no_mangle)]
pub extern "C" fn sample_library_version() -> *const c_char {
    // Static string, safe to return pointer
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}

// ============================================================================
// Logging and errors
// ============================================================================

/// Route SampleLibrary's tracing output to stderr
///
/// # Arguments
/// * `filter` - Filter directive such as "debug" or "samplelibrary=trace".
///              If NULL, uses SAMPLELIBRARY_LOG, else "warn".
///
/// # Returns
/// * `Ok` - Logging is active (also on repeated calls)
/// * `InvalidArgument` - `filter` is not valid UTF-8 or not a valid directive
/// * `Logging` - The host process already installed a global subscriber
///
/// # Example
/// ```c
/// SampleLibraryErrorCode code = sample_library_init_logging("debug");
/// if (code != Ok) {
///     fprintf(stderr, "%s\n", sample_library_error_message(code));
/// }
/// ```
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sample_library_init_logging(
    filter: *const c_char,
) -> SampleLibraryErrorCode {
    let options = if filter.is_null() {
        LogOptions::default()
    } else {
        match unsafe { c_str_to_string(filter) } {
            Ok(directive) => LogOptions::with_filter(directive),
            Err(e) => return fail(e),
        }
    };

    match samplelibrary::init_logging(&options) {
        Ok(()) => SampleLibraryErrorCode::Ok,
        Err(e) => fail(e),
    }
}

/// Describe an error code
///
/// # Returns
/// Static NUL-terminated description. Unknown codes yield "unknown error".
#[unsafe(no_mangle)]
pub extern "C" fn sample_library_error_message(code: c_int) -> *const c_char {
    let message: &'static str = match code {
        0 => "ok\0",
        1 => "internal error\0",
        2 => "invalid argument\0",
        3 => "logging could not be initialized\0",
        4 => "transfer library error\0",
        _ => "unknown error\0",
    };
    message.as_ptr() as *const c_char
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;
    use std::ptr;

    #[test]
    fn test_version() {
        unsafe {
            let version = CStr::from_ptr(sample_library_version()).to_str().unwrap();
            assert_eq!(version, samplelibrary::VERSION);
            assert!(version.contains('.'));
        }
    }

    #[test]
    fn test_arithmetic_exports() {
        assert_eq!(sample_library_add(2, 3), 5);
        assert_eq!(sample_library_multiply(2, 3), 6);
        assert_eq!(sample_library_add(i32::MAX, 1), i32::MIN);
        assert_eq!(sample_library_multiply(i32::MAX, 2), -2);
    }

    #[test]
    fn test_vector_length_export() {
        assert_eq!(sample_library_vector_length(3.0, 4.0, 0.0), 5.0);
        assert_eq!(sample_library_vector_length(0.0, 0.0, 0.0), 0.0);
        assert!(sample_library_vector_length(f32::NAN, 0.0, 0.0).is_nan());
    }

    #[test]
    fn test_curl_current_version() {
        let ptr = sample_library_curl_current_version();
        assert!(!ptr.is_null());
        unsafe {
            let version = CStr::from_ptr(ptr).to_str().unwrap();
            assert!(!version.is_empty());
            assert!(version.starts_with("libcurl/"));
        }
    }

    #[test]
    fn test_error_code_mapping() {
        assert_eq!(
            error_to_code(&SampleLibraryError::Internal("test".into())),
            SampleLibraryErrorCode::Internal
        );
        assert_eq!(
            error_to_code(&SampleLibraryError::InvalidArgument("test".into())),
            SampleLibraryErrorCode::InvalidArgument
        );
        assert_eq!(
            error_to_code(&SampleLibraryError::Logging("test".into())),
            SampleLibraryErrorCode::Logging
        );
        assert_eq!(
            error_to_code(&SampleLibraryError::Transfer("test".into())),
            SampleLibraryErrorCode::Transfer
        );
    }

    #[test]
    fn test_error_message_covers_codes() {
        let codes = [
            SampleLibraryErrorCode::Ok,
            SampleLibraryErrorCode::Internal,
            SampleLibraryErrorCode::InvalidArgument,
            SampleLibraryErrorCode::Logging,
            SampleLibraryErrorCode::Transfer,
        ];
        for code in codes {
            let message = unsafe { CStr::from_ptr(sample_library_error_message(code as c_int)) };
            assert_ne!(message.to_str().unwrap(), "unknown error");
        }

        let unknown = unsafe { CStr::from_ptr(sample_library_error_message(-1)) };
        assert_eq!(unknown.to_str().unwrap(), "unknown error");
    }

    #[test]
    fn test_c_string_conversion() {
        let test_str = CString::new("hello").unwrap();
        unsafe {
            let result = c_str_to_string(test_str.as_ptr());
            assert_eq!(result.unwrap(), "hello");
        }
    }

    #[test]
    fn test_c_string_null_handling() {
        unsafe {
            let result = c_str_to_string(ptr::null());
            assert!(matches!(result, Err(SampleLibraryError::InvalidArgument(_))));
        }
    }

    #[test]
    fn test_init_logging() {
        let filter = CString::new("warn").unwrap();
        unsafe {
            assert_eq!(
                sample_library_init_logging(filter.as_ptr()),
                SampleLibraryErrorCode::Ok
            );
            // Idempotent, including the NULL default
            assert_eq!(
                sample_library_init_logging(ptr::null()),
                SampleLibraryErrorCode::Ok
            );
        }
    }

    #[test]
    fn test_init_logging_invalid_filter() {
        let filter = CString::new("samplelibrary=loud").unwrap();
        unsafe {
            assert_eq!(
                sample_library_init_logging(filter.as_ptr()),
                SampleLibraryErrorCode::InvalidArgument
            );
        }
    }

    #[test]
    fn test_init_logging_invalid_utf8() {
        let bytes: [u8; 3] = [0xff, 0xfe, 0];
        unsafe {
            assert_eq!(
                sample_library_init_logging(bytes.as_ptr() as *const c_char),
                SampleLibraryErrorCode::InvalidArgument
            );
        }
    }
}
