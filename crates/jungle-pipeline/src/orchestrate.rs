//! Build orchestration.
//!
//! Drives the compiler against one target workspace at a time. The entry
//! module written by the scaffold step is the compiler's input; the output
//! paths are the fixed names the shell document references.

use jungle_compiler::{CompileError, CompileJob, CompileMode, CompileOutput, PageCompiler};

use crate::discover::BuildTarget;
use crate::scaffold::{BUNDLE_FILE, BUNDLE_MAP_FILE, BUNDLE_STYLESHEET_FILE, ENTRY_FILE};

/// Errors from building one target.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Build failed for '/{identifier}': {source}")]
    CompileFailed {
        identifier: String,
        #[source]
        source: CompileError,
    },
}

/// Invokes the compiler for one target at a time.
pub struct BuildOrchestrator {
    compiler: Box<dyn PageCompiler>,
    mode: CompileMode,
}

impl BuildOrchestrator {
    /// Create an orchestrator around a compiler and a process-wide mode.
    pub fn new(compiler: Box<dyn PageCompiler>, mode: CompileMode) -> Self {
        Self { compiler, mode }
    }

    /// Compile one target to completion.
    ///
    /// Must be awaited before the target may be mounted; there is no
    /// concurrent building of multiple targets.
    pub async fn build(&self, target: &BuildTarget) -> Result<CompileOutput, BuildError> {
        let job = self.job_for(target);

        tracing::info!(
            "Building /{} with the {} compiler",
            target.identifier,
            self.compiler.name()
        );

        self.compiler
            .compile(&job)
            .map_err(|e| BuildError::CompileFailed {
                identifier: target.identifier.clone(),
                source: e,
            })
    }

    fn job_for(&self, target: &BuildTarget) -> CompileJob {
        CompileJob {
            entry: target.workspace_path.join(ENTRY_FILE),
            bundle: target.workspace_path.join(BUNDLE_FILE),
            bundle_map: target.workspace_path.join(BUNDLE_MAP_FILE),
            stylesheet: target.workspace_path.join(BUNDLE_STYLESHEET_FILE),
            mode: self.mode,
        }
    }
}
