//! Pipeline lifecycle.
//!
//! Runs discovery once, then scaffold → build → mount strictly in sequence
//! for each target. The returned registry is the completion signal and the
//! barrier: the serving host must not bind its listener before `run`
//! returns, or early requests would 404 against not-yet-mounted routes.

use jungle_compiler::PageCompiler;

use crate::config::PipelineConfig;
use crate::discover::{discover_targets, DiscoverError};
use crate::mount::MountRegistry;
use crate::orchestrate::{BuildError, BuildOrchestrator};
use crate::scaffold::{ScaffoldError, ScaffoldGenerator};

/// Errors that abort a pipeline run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Discover(#[from] DiscoverError),

    #[error(transparent)]
    Scaffold(#[from] ScaffoldError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("Failed to create build directory {path}: {message}")]
    BuildDir { path: String, message: String },
}

/// Drives discovery-to-mount for all targets to completion.
pub struct Pipeline {
    config: PipelineConfig,
    scaffolder: ScaffoldGenerator,
    orchestrator: BuildOrchestrator,
}

impl Pipeline {
    /// Create a pipeline around a compiler.
    pub fn new(config: PipelineConfig, compiler: Box<dyn PageCompiler>) -> Self {
        let scaffolder = ScaffoldGenerator::new(&config.title);
        let orchestrator = BuildOrchestrator::new(compiler, config.mode);

        Self {
            config,
            scaffolder,
            orchestrator,
        }
    }

    /// Run the whole sequence and return the completed mount registry.
    ///
    /// Targets are processed one at a time; each target's scaffold and
    /// build are awaited before it is mounted and before the next target
    /// starts. Any stage error aborts the run, so a partially-mounted site
    /// is never returned.
    pub async fn run(&self) -> Result<MountRegistry, PipelineError> {
        let build_dir = self.config.build_dir();
        tokio::fs::create_dir_all(&build_dir)
            .await
            .map_err(|e| PipelineError::BuildDir {
                path: build_dir.display().to_string(),
                message: e.to_string(),
            })?;

        let targets = discover_targets(&self.config)?;
        tracing::info!(
            "Discovered {} page target(s) in {}",
            targets.len(),
            self.config.routes_dir.display()
        );

        let mut registry = MountRegistry::new();

        for target in &targets {
            self.scaffolder.write(target).await?;
            self.orchestrator.build(target).await?;
            registry.mount(&target.identifier, target.workspace_path.clone());

            tracing::info!(
                "Mounted /{} from {}",
                target.identifier,
                target.workspace_path.display()
            );
        }

        Ok(registry)
    }
}
