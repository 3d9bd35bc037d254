//! Single-file component parsing and the compiler built on it.
//!
//! A page component is one file holding optional `<script>` and `<style>`
//! blocks plus template markup. Compilation resolves the component from the
//! entry module, splits it into parts, and emits the bundle artifacts into
//! the target workspace.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::emit;
use crate::resolve::resolve_entry;
use crate::traits::{CompileError, CompileJob, CompileOutput, PageCompiler};

static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script[^>]*>(.*?)</script>").expect("Invalid script block regex")
});

static STYLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<style[^>]*>(.*?)</style>").expect("Invalid style block regex")
});

/// A component source split into its three parts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentParts {
    /// Contents of the script blocks, concatenated in source order.
    pub script: String,

    /// Contents of the style blocks, concatenated in source order.
    pub style: String,

    /// Remaining markup.
    pub template: String,
}

/// Split component source into script, style, and template markup.
pub fn split_component(source: &str) -> ComponentParts {
    let script = SCRIPT_BLOCK
        .captures_iter(source)
        .map(|c| c[1].trim().to_string())
        .collect::<Vec<_>>()
        .join("\n");

    let style = STYLE_BLOCK
        .captures_iter(source)
        .map(|c| c[1].trim().to_string())
        .collect::<Vec<_>>()
        .join("\n");

    let without_script = SCRIPT_BLOCK.replace_all(source, "");
    let template = STYLE_BLOCK
        .replace_all(&without_script, "")
        .trim()
        .to_string();

    ComponentParts {
        script,
        style,
        template,
    }
}

/// Single-file component compiler.
#[derive(Debug, Default)]
pub struct SfcCompiler;

impl SfcCompiler {
    /// Create a new compiler.
    pub fn new() -> Self {
        Self
    }
}

impl PageCompiler for SfcCompiler {
    fn name(&self) -> &'static str {
        "sfc"
    }

    fn compile(&self, job: &CompileJob) -> Result<CompileOutput, CompileError> {
        let entry_source = read(&job.entry)?;

        let entry_dir = job.entry.parent().unwrap_or(Path::new("."));
        let import = resolve_entry(&entry_source, entry_dir)?;

        let component_source = read(&import.source)?;
        let parts = split_component(&component_source);

        emit::write_bundle(job, &import, &parts, &component_source)
    }
}

fn read(path: &Path) -> Result<String, CompileError> {
    fs::read_to_string(path).map_err(|e| CompileError::ReadError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
