//! Shared test helpers and utilities

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get the path to the cmake-shim binary under test.
///
/// This is shared across all integration tests to avoid duplication.
#[allow(dead_code)]
pub(crate) fn get_shim_binary() -> String {
    env!("CARGO_BIN_EXE_cmake-shim").to_string()
}

/// Create a mock external build tool inside `temp_dir`.
///
/// The script appends each invocation's arguments (one line per invocation)
/// to a log file. When `fail_on_flag` is given, the invocation whose first
/// argument equals that flag exits 1 after logging; every other invocation
/// exits 0.
///
/// # Returns
/// (path to the mock tool, path to the invocation log)
#[cfg(unix)]
pub(crate) fn create_mock_cmake(temp_dir: &TempDir, fail_on_flag: Option<&str>) -> (PathBuf, PathBuf) {
    use std::os::unix::fs::PermissionsExt;

    let tool_path = temp_dir.path().join("mock-cmake");
    let log_path = temp_dir.path().join("invocations.log");

    let fail_check = fail_on_flag.map_or_else(String::new, |flag| {
        format!("if [ \"$1\" = \"{flag}\" ]; then exit 1; fi\n")
    });
    let script = format!(
        "#!/bin/sh\necho \"$@\" >> \"{}\"\n{fail_check}exit 0\n",
        log_path.display()
    );

    fs::write(&tool_path, script).expect("Failed to write mock cmake script");

    let mut perms = fs::metadata(&tool_path)
        .expect("Failed to stat mock cmake script")
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&tool_path, perms).expect("Failed to mark mock cmake executable");

    (tool_path, log_path)
}

/// Read the mock tool's invocation log, one line per invocation.
///
/// Returns an empty list when the tool was never invoked.
#[allow(dead_code)]
pub(crate) fn logged_invocations(log_path: &Path) -> Vec<String> {
    fs::read_to_string(log_path)
        .map(|content| content.lines().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Write a shim.toml manifest into `temp_dir` declaring the placeholder
/// extension and the default build directories.
#[allow(dead_code)]
pub(crate) fn create_test_manifest(temp_dir: &TempDir) -> PathBuf {
    let manifest_path = temp_dir.path().join("shim.toml");
    let content = r#"[package]
name = "openarm_can"
version = "1.2.2"
license = "Apache-2.0"
license-files = ["LICENSE.txt"]

[build]
temp-dir = "build/temp"
lib-dir = "build/lib"

[[extension]]
name = "__dummy__"
"#;

    fs::write(&manifest_path, content).expect("Failed to write shim.toml");
    manifest_path
}
