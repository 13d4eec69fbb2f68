//! Build location resolution
//!
//! Computes the three absolute directories a CMake invocation needs: the
//! project source root, the pipeline's scratch (build-temporary) directory,
//! and the output directory the installed artifacts must land in.

use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// The three locations one build invocation operates on, all absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPaths {
    /// Project source root containing the CMake build definition
    pub source_root: PathBuf,
    /// Intermediate working directory for CMake build state
    pub scratch_dir: PathBuf,
    /// Installation prefix the compiled artifacts are installed into
    pub output_dir: PathBuf,
}

impl BuildPaths {
    /// Resolve build locations against the current working directory.
    ///
    /// The scratch directory is created on disk (parents included) if it
    /// does not already exist; creation is idempotent. The output directory
    /// is resolved but not created, since CMake's install stage materializes
    /// it.
    pub fn resolve(scratch: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<Self> {
        let source_root =
            env::current_dir().context("Failed to determine the current working directory")?;

        Self::resolve_in(source_root, scratch, output)
    }

    /// Resolve build locations against an explicit source root.
    ///
    /// Relative scratch/output paths are joined onto `source_root`, which
    /// must itself be absolute.
    pub fn resolve_in(
        source_root: impl Into<PathBuf>,
        scratch: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<Self> {
        let source_root = source_root.into();
        anyhow::ensure!(
            source_root.is_absolute(),
            "Source root {} is not an absolute path",
            source_root.display()
        );

        let scratch_dir = absolutize(&source_root, scratch.as_ref());
        let output_dir = absolutize(&source_root, output.as_ref());

        fs::create_dir_all(&scratch_dir).with_context(|| {
            format!(
                "Failed to create scratch directory {}",
                scratch_dir.display()
            )
        })?;

        Ok(Self {
            source_root,
            scratch_dir,
            output_dir,
        })
    }
}

/// Join `path` onto `root` unless it is already absolute.
fn absolutize(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
