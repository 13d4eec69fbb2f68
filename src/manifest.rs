//! Shim manifest parsing
//!
//! Reads `shim.toml`, the declaration the packaging pipeline hands to the
//! shim: package metadata (consumed verbatim, never interpreted), the
//! pipeline's build-temporary and build-output directory strings, and the
//! declared extension list.
//!
//! ```toml
//! [package]
//! name = "openarm_can"
//! version = "1.2.2"
//! license = "Apache-2.0"
//! license-files = ["LICENSE.txt"]
//!
//! [build]
//! temp-dir = "build/temp"
//! lib-dir = "build/lib"
//!
//! [[extension]]
//! name = "__dummy__"
//! ```

use crate::extensions::ExtensionSpec;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default manifest file name, looked up in the source root.
pub const DEFAULT_MANIFEST: &str = "shim.toml";

/// Parsed shim manifest
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Manifest {
    /// Package metadata passed through to the packaging pipeline
    pub package: PackageMetadata,

    /// Build directory configuration
    #[serde(default)]
    pub build: BuildConfig,

    /// Declared extensions, placeholders included
    #[serde(default, rename = "extension")]
    pub extensions: Vec<ExtensionDeclaration>,
}

/// Package identity fields, consumed verbatim by the packaging pipeline.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PackageMetadata {
    /// Package name
    pub name: String,
    /// Package version string
    pub version: String,
    /// License identifier (e.g. "Apache-2.0")
    #[serde(default)]
    pub license: Option<String>,
    /// License files shipped with the package
    #[serde(default)]
    pub license_files: Vec<String>,
}

/// The pipeline's declared build-temporary and build-output locations.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BuildConfig {
    /// Scratch directory for CMake build state (may be relative)
    #[serde(default = "default_temp_dir")]
    pub temp_dir: String,
    /// Output directory artifacts are installed into (may be relative)
    #[serde(default = "default_lib_dir")]
    pub lib_dir: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            temp_dir: default_temp_dir(),
            lib_dir: default_lib_dir(),
        }
    }
}

fn default_temp_dir() -> String {
    "build/temp".to_string()
}

fn default_lib_dir() -> String {
    "build/lib".to_string()
}

/// One `[[extension]]` entry as declared in the manifest.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ExtensionDeclaration {
    /// Extension name (the reserved `__dummy__` marks a phase trigger)
    pub name: String,
    /// Source files (empty for placeholders)
    #[serde(default)]
    pub sources: Vec<String>,
}

impl Manifest {
    /// Load and parse a manifest file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse manifest {}", path.display()))
    }

    /// Parse manifest content.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid manifest TOML")
    }

    /// Declared extensions as typed specs, sentinel names tagged.
    #[must_use]
    pub fn extension_specs(&self) -> Vec<ExtensionSpec> {
        self.extensions
            .iter()
            .map(|decl| ExtensionSpec::from_declaration(decl.name.clone(), decl.sources.clone()))
            .collect()
    }
}
