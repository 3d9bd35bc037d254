//! Single-file component compiler for jungle page bundles.
//!
//! This crate provides the `PageCompiler` seam the build pipeline drives,
//! plus the shipped implementation: resolve the entry module's component
//! import, split the component into script/style/template parts, and emit
//! an immediately-invoked script bundle with a source map and an extracted
//! stylesheet.

pub mod emit;
pub mod resolve;
pub mod sfc;
pub mod traits;

pub use resolve::EntryImport;
pub use sfc::{split_component, ComponentParts, SfcCompiler};
pub use traits::{CompileError, CompileJob, CompileMode, CompileOutput, PageCompiler};
