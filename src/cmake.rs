//! External CMake build driver
//!
//! Runs the three-stage CMake invocation the shim substitutes for the
//! pipeline's own native compile:
//! ```bash
//! cmake -S <source> -B <scratch> -DCMAKE_BUILD_TYPE=Release -DCMAKE_INSTALL_PREFIX=<output>
//! cmake --build <scratch>
//! cmake --install <scratch>
//! ```
//! Each invocation is synchronous and blocking, and a stage only runs once
//! the previous one exited successfully. Child output is inherited so it
//! surfaces directly on the invoking terminal.

use crate::env_vars;
use crate::paths::BuildPaths;
use anyhow::{Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use thiserror::Error;

/// One stage of the linear Configure -> Build -> Install sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Generate the build system into the scratch directory
    Configure,
    /// Compile the native targets
    Build,
    /// Copy compiled artifacts into the installation prefix
    Install,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configure => write!(f, "configure"),
            Self::Build => write!(f, "build"),
            Self::Install => write!(f, "install"),
        }
    }
}

/// Fatal failure while driving the external build tool.
///
/// All variants abort the remaining stages; nothing is retried or downgraded
/// to a warning, and the scratch directory is left in place.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The CMake executable could not be started for a stage
    #[error("Failed to launch cmake for the {stage} stage")]
    Launch {
        /// Stage whose process could not be spawned
        stage: Stage,
        /// Underlying spawn error
        #[source]
        source: std::io::Error,
    },

    /// A stage's process exited unsuccessfully
    #[error("CMake {stage} stage failed ({status})")]
    Stage {
        /// Stage that exited non-zero
        stage: Stage,
        /// Exit status reported by the operating system
        status: ExitStatus,
    },
}

/// Driver for the external CMake build tool
#[derive(Debug)]
pub struct CmakeDriver {
    /// Path to the CMake executable
    cmake_path: PathBuf,
    /// Announce stages before running them
    verbose: bool,
}

impl CmakeDriver {
    /// Create a driver, locating the CMake executable automatically.
    ///
    /// Priority order:
    /// 1. `CMAKE` environment variable
    /// 2. `cmake` in `PATH`
    /// 3. Error if not found
    pub fn new(verbose: bool) -> Result<Self> {
        let cmake_path = find_cmake_executable()
            .context("CMake executable not found. Building this package requires CMake.")?;

        Ok(Self {
            cmake_path,
            verbose,
        })
    }

    /// Create a driver around an explicit build tool executable.
    ///
    /// Used for cross environments with a pinned toolchain and by tests that
    /// substitute a mock tool.
    #[must_use]
    pub fn with_executable(cmake_path: impl Into<PathBuf>, verbose: bool) -> Self {
        Self {
            cmake_path: cmake_path.into(),
            verbose,
        }
    }

    /// Path of the executable this driver invokes.
    #[must_use]
    pub fn executable(&self) -> &Path {
        &self.cmake_path
    }

    /// Run configure, build, and install in strict sequence.
    ///
    /// Aborts on the first stage that fails to launch or exits non-zero;
    /// later stages are never invoked after a failure.
    pub fn run(&self, paths: &BuildPaths) -> Result<(), BuildError> {
        self.configure(paths)?;
        self.build(paths)?;
        self.install(paths)
    }

    fn configure(&self, paths: &BuildPaths) -> Result<(), BuildError> {
        let mut cmd = Command::new(&self.cmake_path);
        cmd.arg("-S")
            .arg(&paths.source_root)
            .arg("-B")
            .arg(&paths.scratch_dir)
            .arg("-DCMAKE_BUILD_TYPE=Release")
            .arg(format!(
                "-DCMAKE_INSTALL_PREFIX={}",
                paths.output_dir.display()
            ));

        // Pass build tool environment variables through to CMake.
        // CMake respects both CMAKE_* definitions and standard compiler
        // variables.
        if let Some(cc) = env_vars::cc() {
            cmd.env("CC", &cc);
            cmd.arg(format!("-DCMAKE_C_COMPILER={cc}"));
        }
        if let Some(cxx) = env_vars::cxx() {
            cmd.env("CXX", &cxx);
            cmd.arg(format!("-DCMAKE_CXX_COMPILER={cxx}"));
        }
        if let Some(cflags) = env_vars::cflags() {
            cmd.env("CFLAGS", &cflags);
            cmd.arg(format!("-DCMAKE_C_FLAGS={cflags}"));
        }
        if let Some(cxxflags) = env_vars::cxxflags() {
            cmd.env("CXXFLAGS", &cxxflags);
            cmd.arg(format!("-DCMAKE_CXX_FLAGS={cxxflags}"));
        }
        if let Some(ldflags) = env_vars::ldflags() {
            cmd.env("LDFLAGS", &ldflags);
            cmd.arg(format!("-DCMAKE_EXE_LINKER_FLAGS={ldflags}"));
        }

        self.run_stage(Stage::Configure, cmd)
    }

    fn build(&self, paths: &BuildPaths) -> Result<(), BuildError> {
        let mut cmd = Command::new(&self.cmake_path);
        cmd.arg("--build").arg(&paths.scratch_dir);

        self.run_stage(Stage::Build, cmd)
    }

    fn install(&self, paths: &BuildPaths) -> Result<(), BuildError> {
        let mut cmd = Command::new(&self.cmake_path);
        cmd.arg("--install").arg(&paths.scratch_dir);

        self.run_stage(Stage::Install, cmd)
    }

    /// Run one stage to completion, inheriting stdout/stderr.
    fn run_stage(&self, stage: Stage, mut cmd: Command) -> Result<(), BuildError> {
        if self.verbose {
            println!("Running cmake {stage} stage...");
        }

        let status = cmd
            .status()
            .map_err(|source| BuildError::Launch { stage, source })?;

        if status.success() {
            Ok(())
        } else {
            Err(BuildError::Stage { stage, status })
        }
    }
}

/// Find the CMake executable on the system.
fn find_cmake_executable() -> Result<PathBuf> {
    // Check CMAKE environment variable
    if let Some(cmake_env) = env_vars::cmake() {
        let path = PathBuf::from(cmake_env);
        if path.exists() {
            return Ok(path);
        }
    }

    // Check for `cmake` in PATH
    if let Ok(output) = Command::new("which").arg("cmake").output()
        && output.status.success()
    {
        let path_str = String::from_utf8_lossy(&output.stdout);
        let path = PathBuf::from(path_str.trim());
        if path.exists() {
            return Ok(path);
        }
    }

    anyhow::bail!("CMake executable not found. Install CMake from https://cmake.org")
}
