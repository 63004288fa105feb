//! Generates `include/samplelibrary.h` from the `extern "C"` items in `src/ffi.rs`.

use std::env;
use std::path::{Path, PathBuf};

const HEADER_NAME: &str = "samplelibrary.h";

const PREAMBLE: &str = "/* SampleLibrary C API.\n\
 *\n\
 * Link against libsamplelibrary (shared) or the static archive.\n\
 * Returned strings point into static storage and must not be freed.\n\
 */";

fn header_path(manifest_dir: &Path) -> PathBuf {
    manifest_dir.join("include").join(HEADER_NAME)
}

fn cbindgen_config() -> cbindgen::Config {
    cbindgen::Config {
        language: cbindgen::Language::C,
        header: Some(PREAMBLE.to_string()),
        include_guard: Some("SAMPLELIBRARY_H".to_string()),
        pragma_once: true,
        cpp_compat: true,
        documentation: true,
        autogen_warning: Some(
            "/* Generated by cbindgen from sdks/c/src/ffi.rs. Do not edit. */".to_string(),
        ),
        ..Default::default()
    }
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR"));
    let output = header_path(&manifest_dir);

    if let Some(dir) = output.parent() {
        std::fs::create_dir_all(dir)
            .unwrap_or_else(|e| panic!("cannot create {}: {}", dir.display(), e));
    }

    let bindings = cbindgen::generate_with_config(&manifest_dir, cbindgen_config())
        .unwrap_or_else(|e| panic!("cbindgen failed for {}: {}", manifest_dir.display(), e));

    // Only touches the file when the contents changed
    bindings.write_to_file(&output);

    println!("cargo:rerun-if-changed=src/ffi.rs");
    println!("cargo:rerun-if-changed=src/lib.rs");
    println!("cargo:rerun-if-changed=build.rs");
}
