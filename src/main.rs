//! cmake-shim command-line interface
//!
//! CMake build shim for package-build pipelines

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use cmake_shim::{BuildPaths, CmakeDriver, Manifest, hook, manifest::DEFAULT_MANIFEST};
use std::env;
use std::path::PathBuf;
use std::process;

/// Display an error with its cause chain
fn display_error(err: &anyhow::Error) {
    eprintln!("error: {err}");

    let mut source = err.source();
    while let Some(err) = source {
        eprintln!("caused by: {err}");
        source = err.source();
    }
}

#[derive(Parser)]
#[command(name = "cmake-shim")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A CMake build shim for package-build pipelines", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the configure/build/install sequence and strip placeholders
    Build {
        /// Path to the shim manifest, relative to the source root
        #[arg(long, default_value = DEFAULT_MANIFEST)]
        manifest: String,

        /// Run as if started in <DIR> instead of the current working directory
        #[arg(short = 'C', value_name = "DIR")]
        directory: Option<String>,

        /// Announce each build stage before running it
        #[arg(long, short = 'V')]
        verbose: bool,
    },

    /// Print the resolved source, scratch, and output directories
    Paths {
        /// Path to the shim manifest, relative to the source root
        #[arg(long, default_value = DEFAULT_MANIFEST)]
        manifest: String,

        /// Run as if started in <DIR> instead of the current working directory
        #[arg(short = 'C', value_name = "DIR")]
        directory: Option<String>,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build {
            manifest,
            directory,
            verbose,
        } => build(&manifest, directory.as_deref(), verbose),
        Commands::Paths {
            manifest,
            directory,
        } => paths(&manifest, directory.as_deref()),
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "cmake-shim", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(err) = result {
        display_error(&err);
        process::exit(1);
    }
}

/// Determine the source root: `-C DIR` when given, otherwise the current
/// working directory.
fn source_root(directory: Option<&str>) -> Result<PathBuf> {
    directory.map_or_else(
        || env::current_dir().context("Failed to determine the current working directory"),
        |dir| {
            std::fs::canonicalize(dir)
                .with_context(|| format!("Failed to resolve source directory {dir}"))
        },
    )
}

fn build(manifest: &str, directory: Option<&str>, verbose: bool) -> Result<()> {
    let root = source_root(directory)?;
    let manifest = Manifest::load(root.join(manifest))?;
    let driver = CmakeDriver::new(verbose)?;

    let remaining = hook::run_in(
        &root,
        manifest.extension_specs(),
        &manifest.build.temp_dir,
        &manifest.build.lib_dir,
        &driver,
    )?;

    let package = &manifest.package;
    match package.license.as_deref() {
        Some(license) => println!("Built {} {} ({license})", package.name, package.version),
        None => println!("Built {} {}", package.name, package.version),
    }

    if remaining.is_empty() {
        println!("No extensions left for the pipeline to compile");
    } else {
        println!("Remaining extensions for the pipeline:");
        for ext in &remaining {
            println!("  {}", ext.name);
        }
    }

    Ok(())
}

fn paths(manifest: &str, directory: Option<&str>) -> Result<()> {
    let root = source_root(directory)?;
    let manifest = Manifest::load(root.join(manifest))?;

    let resolved = BuildPaths::resolve_in(
        root,
        &manifest.build.temp_dir,
        &manifest.build.lib_dir,
    )?;

    println!("source:  {}", resolved.source_root.display());
    println!("scratch: {}", resolved.scratch_dir.display());
    println!("output:  {}", resolved.output_dir.display());

    Ok(())
}
