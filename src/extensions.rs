//! Extension declarations and placeholder filtering
//!
//! Packaging pipelines only run their native-build phase when at least one
//! extension is declared. Projects whose native code is built entirely by
//! CMake declare a placeholder extension (reserved name `__dummy__`) purely
//! to trigger that phase. Before the pipeline's default compile logic runs,
//! the placeholder must be stripped so there is nothing left for it to
//! compile.

/// Reserved name marking a declared-but-empty phase-trigger extension.
pub const PHASE_TRIGGER_NAME: &str = "__dummy__";

/// What an extension declaration actually is
///
/// A tagged marker rather than a name comparison: declarations constructed
/// in-process carry their kind explicitly, and only declarations ingested by
/// name fall back to matching the reserved sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionKind {
    /// A real native compile target the pipeline should build
    Native,
    /// A sentinel declared only to trigger the native-build phase
    PhaseTrigger,
}

/// A declared native extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSpec {
    /// Extension name as declared to the pipeline
    pub name: String,
    /// Source files the pipeline would compile (empty for placeholders)
    pub sources: Vec<String>,
    /// Whether this is a real target or a phase trigger
    pub kind: ExtensionKind,
}

impl ExtensionSpec {
    /// Create a real native extension declaration.
    #[must_use]
    pub fn native(name: impl Into<String>, sources: Vec<String>) -> Self {
        Self {
            name: name.into(),
            sources,
            kind: ExtensionKind::Native,
        }
    }

    /// Create the placeholder declaration that triggers the native-build
    /// phase without declaring anything to compile.
    #[must_use]
    pub fn phase_trigger() -> Self {
        Self {
            name: PHASE_TRIGGER_NAME.to_string(),
            sources: Vec::new(),
            kind: ExtensionKind::PhaseTrigger,
        }
    }

    /// Ingest a declaration known only by name and source list.
    ///
    /// The reserved sentinel name maps to [`ExtensionKind::PhaseTrigger`];
    /// any other name is a real target. The match is exact.
    #[must_use]
    pub fn from_declaration(name: impl Into<String>, sources: Vec<String>) -> Self {
        let name = name.into();
        let kind = if name == PHASE_TRIGGER_NAME {
            ExtensionKind::PhaseTrigger
        } else {
            ExtensionKind::Native
        };

        Self {
            name,
            sources,
            kind,
        }
    }

    /// Check whether this declaration exists only to trigger the build phase.
    #[must_use]
    pub fn is_phase_trigger(&self) -> bool {
        self.kind == ExtensionKind::PhaseTrigger
    }
}

/// Remove phase-trigger placeholders from an extension list.
///
/// Returns a new list; the caller substitutes it into the pipeline before
/// the pipeline's default native-compile logic runs. Relative order of the
/// remaining entries is preserved. A list without placeholders comes back
/// unchanged.
#[must_use]
pub fn filter_phase_triggers(extensions: Vec<ExtensionSpec>) -> Vec<ExtensionSpec> {
    extensions
        .into_iter()
        .filter(|ext| !ext.is_phase_trigger())
        .collect()
}
