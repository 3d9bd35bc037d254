//! Pipeline configuration.

use std::path::PathBuf;

use jungle_compiler::CompileMode;

/// Configuration for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory scanned for page components.
    pub routes_dir: PathBuf,

    /// Root under which per-target workspaces are created
    /// (`<build_root>/build/<identifier>/`).
    pub build_root: PathBuf,

    /// Source extension a page component must carry.
    pub extension: String,

    /// Title stamped into each shell document.
    pub title: String,

    /// Compile mode applied to every target.
    pub mode: CompileMode,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            routes_dir: PathBuf::from("src/routes"),
            build_root: PathBuf::from("jungle"),
            extension: "svelte".to_string(),
            title: "Svelte app".to_string(),
            mode: CompileMode::Production,
        }
    }
}

impl PipelineConfig {
    /// Directory holding all target workspaces.
    pub fn build_dir(&self) -> PathBuf {
        self.build_root.join("build")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_matches_convention() {
        let config = PipelineConfig::default();

        assert_eq!(config.routes_dir, PathBuf::from("src/routes"));
        assert_eq!(config.build_dir(), PathBuf::from("jungle/build"));
        assert_eq!(config.extension, "svelte");
    }
}
