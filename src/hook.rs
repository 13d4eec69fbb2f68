//! Extension-build hook
//!
//! The single integration point the packaging pipeline invokes during its
//! build-extensions phase. Resolves build locations, drives the external
//! CMake configure/build/install sequence, then hands back the extension
//! list with phase-trigger placeholders removed so the pipeline's default
//! native-compile logic has nothing left to do.

use crate::cmake::CmakeDriver;
use crate::extensions::{ExtensionSpec, filter_phase_triggers};
use crate::paths::BuildPaths;
use anyhow::Result;
use std::path::Path;

/// Run the build hook against the current working directory.
///
/// `temp_dir` and `lib_dir` are the pipeline's configured build-temporary
/// and build-output directory strings, absolute or relative. On success the
/// returned list is the declared extensions minus placeholders; the caller
/// substitutes it before the pipeline's default extension processing runs.
/// Any path-resolution or stage failure aborts the overall package build.
pub fn run(
    extensions: Vec<ExtensionSpec>,
    temp_dir: impl AsRef<Path>,
    lib_dir: impl AsRef<Path>,
    driver: &CmakeDriver,
) -> Result<Vec<ExtensionSpec>> {
    let paths = BuildPaths::resolve(temp_dir, lib_dir)?;
    run_with_paths(extensions, &paths, driver)
}

/// Run the build hook against an explicit source root.
pub fn run_in(
    source_root: impl AsRef<Path>,
    extensions: Vec<ExtensionSpec>,
    temp_dir: impl AsRef<Path>,
    lib_dir: impl AsRef<Path>,
    driver: &CmakeDriver,
) -> Result<Vec<ExtensionSpec>> {
    let paths = BuildPaths::resolve_in(source_root.as_ref(), temp_dir, lib_dir)?;
    run_with_paths(extensions, &paths, driver)
}

fn run_with_paths(
    extensions: Vec<ExtensionSpec>,
    paths: &BuildPaths,
    driver: &CmakeDriver,
) -> Result<Vec<ExtensionSpec>> {
    driver.run(paths)?;
    Ok(filter_phase_triggers(extensions))
}
