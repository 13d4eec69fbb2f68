//! Build tool environment variable handling.

use std::env;

// Build tool configuration for the external CMake invocation
// CMAKE, CC, CXX, CFLAGS, CXXFLAGS, LDFLAGS

/// Get CMake executable override (`CMAKE` environment variable).
pub fn cmake() -> Option<String> {
    env::var("CMAKE").ok()
}

/// Get C compiler (useful for cross-compilation).
pub fn cc() -> Option<String> {
    env::var("CC").ok()
}

/// Get C++ compiler (useful for cross-compilation).
pub fn cxx() -> Option<String> {
    env::var("CXX").ok()
}

/// Get C compiler flags.
pub fn cflags() -> Option<String> {
    env::var("CFLAGS").ok()
}

/// Get C++ compiler flags.
pub fn cxxflags() -> Option<String> {
    env::var("CXXFLAGS").ok()
}

/// Get linker flags.
pub fn ldflags() -> Option<String> {
    env::var("LDFLAGS").ok()
}
