//! cmake-shim internal library code
//!
//! Lets a package-build pipeline delegate compilation of a native component
//! to CMake: configure, build, and install run as external processes against
//! the pipeline's build-temporary and build-output directories, and the
//! placeholder extension that triggered the native-build phase is stripped
//! before the pipeline's own compile logic runs.

pub mod cmake;
pub mod env_vars;
pub mod extensions;
pub mod hook;
pub mod manifest;
pub mod paths;

// Re-export common types for convenience
pub use cmake::{BuildError, CmakeDriver, Stage};
pub use extensions::{
    ExtensionKind, ExtensionSpec, PHASE_TRIGGER_NAME, filter_phase_triggers,
};
pub use manifest::{BuildConfig, DEFAULT_MANIFEST, Manifest, PackageMetadata};
pub use paths::BuildPaths;
