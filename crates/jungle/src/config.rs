//! Project configuration loaded from jungle.toml and the environment.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;

use jungle_compiler::CompileMode;
use jungle_pipeline::PipelineConfig;

/// Configuration file structure (jungle.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteConfig,
}

#[derive(Debug, Deserialize)]
pub struct SiteConfig {
    /// Directory scanned for page components
    #[serde(default = "default_routes")]
    pub routes: String,

    /// Root for generated build workspaces
    #[serde(default = "default_build_root")]
    pub build_root: String,

    /// Source extension for page components
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Title stamped into every generated page
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            routes: default_routes(),
            build_root: default_build_root(),
            extension: default_extension(),
            title: default_title(),
        }
    }
}

fn default_routes() -> String {
    "src/routes".to_string()
}
fn default_build_root() -> String {
    "jungle".to_string()
}
fn default_extension() -> String {
    "svelte".to_string()
}
fn default_title() -> String {
    "Svelte app".to_string()
}

/// Load configuration from jungle.toml if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config() -> Result<ConfigFile> {
    let config_path = PathBuf::from("jungle.toml");
    if config_path.exists() {
        let content = fs::read_to_string(&config_path)
            .map_err(|e| anyhow::anyhow!("Failed to read jungle.toml: {}", e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse jungle.toml: {}", e))?;
        tracing::info!("Loaded config from jungle.toml");
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// The process-wide compile mode: development builds while the watch flag
/// is set, production builds otherwise.
pub fn compile_mode() -> CompileMode {
    if std::env::var_os("JUNGLE_WATCH").is_some() {
        CompileMode::Development
    } else {
        CompileMode::Production
    }
}

/// Assemble the pipeline configuration from file and environment.
pub fn pipeline_config(file: &ConfigFile) -> PipelineConfig {
    PipelineConfig {
        routes_dir: PathBuf::from(&file.site.routes),
        build_root: PathBuf::from(&file.site.build_root),
        extension: file.site.extension.clone(),
        title: file.site.title.clone(),
        mode: compile_mode(),
    }
}
