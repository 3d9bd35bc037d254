//! Build-only command.

use std::time::Instant;

use anyhow::Result;
use jungle_compiler::SfcCompiler;
use jungle_pipeline::Pipeline;

use crate::config;

/// Run the build command.
pub async fn run() -> Result<()> {
    tracing::info!("Building routes...");
    let start = Instant::now();

    let file_config = config::load_config()?;
    let pipeline_config = config::pipeline_config(&file_config);
    let build_dir = pipeline_config.build_dir();

    let registry = Pipeline::new(pipeline_config, Box::new(SfcCompiler::new()))
        .run()
        .await?;

    tracing::info!(
        "Built {} route(s) in {}ms",
        registry.len(),
        start.elapsed().as_millis()
    );
    tracing::info!("Output: {}", build_dir.display());

    Ok(())
}
