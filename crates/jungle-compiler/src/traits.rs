//! Trait definitions for page compilers.

use std::path::PathBuf;

/// Mode a compile runs in, decided once per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompileMode {
    /// Optimized output with a minified stylesheet.
    #[default]
    Production,
    /// Unoptimized output annotated with its source file.
    Development,
}

impl CompileMode {
    /// Whether this is a development build.
    pub fn is_dev(self) -> bool {
        matches!(self, CompileMode::Development)
    }
}

/// One compile request: the entry module plus the fixed output paths
/// inside the target's workspace.
#[derive(Debug, Clone)]
pub struct CompileJob {
    /// Entry module path (`main.js` in the workspace).
    pub entry: PathBuf,

    /// Script bundle output path (`bundle.js`).
    pub bundle: PathBuf,

    /// Source map output path (`bundle.js.map`).
    pub bundle_map: PathBuf,

    /// Extracted stylesheet output path (`bundle.css`).
    pub stylesheet: PathBuf,

    /// Development or production mode.
    pub mode: CompileMode,
}

/// Result of a successful compile.
#[derive(Debug, Clone)]
pub struct CompileOutput {
    /// Path of the written script bundle.
    pub bundle: PathBuf,

    /// Path of the written stylesheet, absent when the component has no
    /// style block.
    pub stylesheet: Option<PathBuf>,
}

/// Errors that can occur during a compile.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("Failed to read {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("Entry module has no resolvable component import in {0}")]
    UnresolvedImport(String),

    #[error("Failed to process stylesheet: {0}")]
    StylesheetError(String),

    #[error("Failed to write {path}: {message}")]
    WriteError { path: String, message: String },
}

/// Trait for compilers that turn an entry module into a page bundle.
pub trait PageCompiler: Send + Sync {
    /// Compiler identifier (e.g., "sfc")
    fn name(&self) -> &'static str;

    /// Compile the job's entry module into a self-contained bundle,
    /// writing every output to the path the job names for it.
    fn compile(&self, job: &CompileJob) -> Result<CompileOutput, CompileError>;
}
