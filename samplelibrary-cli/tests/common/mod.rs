#![allow(dead_code)]

use assert_cmd::Command;
use std::time::Duration;

/// Command for the CLI binary with a clean logging environment.
pub fn samplelibrary() -> Command {
    let bin_path: &str = env!("CARGO_BIN_EXE_samplelibrary");
    let mut cmd = Command::new(bin_path);
    // You can override this with .timeout(Duration::from_secs(N))
    cmd.timeout(Duration::from_secs(30));
    cmd.env_remove("SAMPLELIBRARY_LOG");
    cmd
}
