//! Build-then-serve command.

use anyhow::Result;
use jungle_compiler::SfcCompiler;
use jungle_pipeline::Pipeline;
use jungle_server::{normalize_port, Listener, ServingHost};

use crate::config;

/// Run the serve command.
pub async fn run(port: Option<String>, open: bool) -> Result<()> {
    let file_config = config::load_config()?;
    let pipeline_config = config::pipeline_config(&file_config);

    let pipeline = Pipeline::new(pipeline_config, Box::new(SfcCompiler::new()));
    let registry = pipeline.run().await?;

    // Route setup is complete; only now may the listener bind.
    let raw_port = port
        .or_else(|| std::env::var("PORT").ok())
        .unwrap_or_else(|| "3000".to_string());
    let listener = normalize_port(&raw_port)
        .ok_or_else(|| anyhow::anyhow!("Invalid port: {raw_port}"))?;

    if open {
        if let Listener::Tcp(p) = &listener {
            let _ = open::that(format!("http://127.0.0.1:{p}"));
        }
    }

    match ServingHost::new(registry).serve(listener).await {
        Err(e) if e.is_fatal_bind() => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
        other => Ok(other?),
    }
}
