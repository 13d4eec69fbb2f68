//! End-to-end build hook scenarios against a mock external build tool.

#![cfg(unix)]

mod common;

use cmake_shim::{CmakeDriver, ExtensionSpec, hook};
use common::helpers::{create_mock_cmake, logged_invocations};
use tempfile::TempDir;

fn declared_extensions() -> Vec<ExtensionSpec> {
    vec![
        ExtensionSpec::native("alpha", vec!["alpha.c".to_string()]),
        ExtensionSpec::phase_trigger(),
        ExtensionSpec::native("beta", vec!["beta.c".to_string()]),
    ]
}

#[test]
fn successful_build_issues_three_invocations_in_order() {
    let temp = TempDir::new().unwrap();
    let (tool, log) = create_mock_cmake(&temp, None);
    let driver = CmakeDriver::with_executable(&tool, false);

    let remaining = hook::run_in(
        temp.path(),
        declared_extensions(),
        "build/temp",
        "build/lib",
        &driver,
    )
    .unwrap();

    let root = temp.path().display().to_string();
    let scratch = temp.path().join("build/temp").display().to_string();
    let output = temp.path().join("build/lib").display().to_string();

    let invocations = logged_invocations(&log);
    assert_eq!(invocations.len(), 3, "exactly three invocations expected");
    assert!(
        invocations[0].starts_with(&format!(
            "-S {root} -B {scratch} -DCMAKE_BUILD_TYPE=Release -DCMAKE_INSTALL_PREFIX={output}"
        )),
        "unexpected configure invocation: {}",
        invocations[0]
    );
    assert_eq!(invocations[1], format!("--build {scratch}"));
    assert_eq!(invocations[2], format!("--install {scratch}"));

    // The placeholder is stripped; real extensions keep their order.
    assert_eq!(remaining.len(), 2);
    assert_eq!(remaining[0].name, "alpha");
    assert_eq!(remaining[1].name, "beta");
}

#[test]
fn configure_failure_skips_build_and_install() {
    let temp = TempDir::new().unwrap();
    let (tool, log) = create_mock_cmake(&temp, Some("-S"));
    let driver = CmakeDriver::with_executable(&tool, false);

    let result = hook::run_in(
        temp.path(),
        declared_extensions(),
        "build/temp",
        "build/lib",
        &driver,
    );

    assert!(result.is_err());

    let invocations = logged_invocations(&log);
    assert_eq!(invocations.len(), 1, "only configure should have run");
    assert!(invocations[0].starts_with("-S "));
}

#[test]
fn build_failure_skips_install() {
    let temp = TempDir::new().unwrap();
    let (tool, log) = create_mock_cmake(&temp, Some("--build"));
    let driver = CmakeDriver::with_executable(&tool, false);

    let result = hook::run_in(
        temp.path(),
        declared_extensions(),
        "build/temp",
        "build/lib",
        &driver,
    );

    assert!(result.is_err());

    let invocations = logged_invocations(&log);
    assert_eq!(invocations.len(), 2, "configure and build only");
    assert!(invocations[0].starts_with("-S "));
    assert!(invocations[1].starts_with("--build "));
}

#[test]
fn failed_build_leaves_scratch_directory_in_place() {
    let temp = TempDir::new().unwrap();
    let (tool, _log) = create_mock_cmake(&temp, Some("--build"));
    let driver = CmakeDriver::with_executable(&tool, false);

    let result = hook::run_in(
        temp.path(),
        Vec::new(),
        "build/temp",
        "build/lib",
        &driver,
    );

    assert!(result.is_err());
    assert!(temp.path().join("build/temp").is_dir());
}

#[test]
fn rerun_over_existing_scratch_directory_succeeds() {
    let temp = TempDir::new().unwrap();
    let (tool, log) = create_mock_cmake(&temp, None);
    let driver = CmakeDriver::with_executable(&tool, false);

    for _ in 0..2 {
        hook::run_in(
            temp.path(),
            vec![ExtensionSpec::phase_trigger()],
            "build/temp",
            "build/lib",
            &driver,
        )
        .unwrap();
    }

    assert_eq!(logged_invocations(&log).len(), 6);
}
