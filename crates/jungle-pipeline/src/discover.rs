//! Target discovery.
//!
//! Scans the routes directory and derives one build target per qualifying
//! entry. A name qualifies only when splitting it on `.` yields exactly two
//! parts with the second equal to the configured extension, so `a.b.svelte`
//! and extensionless names are skipped. Targets keep directory listing
//! order; nothing downstream may depend on it.

use std::path::PathBuf;

use walkdir::WalkDir;

use crate::config::PipelineConfig;

/// One page-like unit to be compiled and served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTarget {
    /// Lower-cased base name; URL path and workspace directory name.
    pub identifier: String,

    /// Original (non-lower-cased) base name, used by the entry module import.
    pub component_name: String,

    /// Absolute path of the source component.
    pub source_path: PathBuf,

    /// Per-target build directory.
    pub workspace_path: PathBuf,
}

/// Errors that can occur during discovery.
#[derive(Debug, thiserror::Error)]
pub enum DiscoverError {
    #[error("Routes directory not found: {0}")]
    RoutesDirNotFound(String),

    #[error("{first} and {second} both map to '/{identifier}'")]
    DuplicateIdentifier {
        identifier: String,
        first: String,
        second: String,
    },
}

/// Discover every build target in the configured routes directory.
pub fn discover_targets(config: &PipelineConfig) -> Result<Vec<BuildTarget>, DiscoverError> {
    if !config.routes_dir.exists() {
        return Err(DiscoverError::RoutesDirNotFound(
            config.routes_dir.display().to_string(),
        ));
    }

    let mut targets: Vec<BuildTarget> = Vec::new();

    for entry in WalkDir::new(&config.routes_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        let parts: Vec<&str> = name.split('.').collect();
        if parts.len() != 2 || parts[1] != config.extension {
            continue;
        }

        let component_name = parts[0].to_string();
        let identifier = component_name.to_lowercase();

        if let Some(existing) = targets.iter().find(|t| t.identifier == identifier) {
            return Err(DiscoverError::DuplicateIdentifier {
                identifier,
                first: existing.source_path.display().to_string(),
                second: path.display().to_string(),
            });
        }

        // The entry module embeds this path, so it must survive any cwd.
        let source_path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        let workspace_path = config.build_dir().join(&identifier);

        targets.push(BuildTarget {
            identifier,
            component_name,
            source_path,
            workspace_path,
        });
    }

    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn config_for(routes: &std::path::Path, build_root: &std::path::Path) -> PipelineConfig {
        PipelineConfig {
            routes_dir: routes.to_path_buf(),
            build_root: build_root.to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn discovers_only_qualifying_entries() {
        let temp = tempdir().unwrap();
        let routes = temp.path().join("src/routes");
        fs::create_dir_all(&routes).unwrap();

        fs::write(routes.join("Home.svelte"), "<h1/>").unwrap();
        fs::write(routes.join("notes.txt"), "").unwrap();
        fs::write(routes.join("a.b.svelte"), "").unwrap();
        fs::write(routes.join("README"), "").unwrap();
        fs::create_dir_all(routes.join("nested.svelte")).unwrap();

        let targets = discover_targets(&config_for(&routes, temp.path())).unwrap();

        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].identifier, "home");
        assert_eq!(targets[0].component_name, "Home");
        assert!(targets[0].source_path.is_absolute());
        assert_eq!(targets[0].workspace_path, temp.path().join("build/home"));
    }

    #[test]
    fn lowercases_mixed_case_names() {
        let temp = tempdir().unwrap();
        let routes = temp.path().join("routes");
        fs::create_dir_all(&routes).unwrap();
        fs::write(routes.join("AboutUs.svelte"), "").unwrap();

        let targets = discover_targets(&config_for(&routes, temp.path())).unwrap();

        assert_eq!(targets[0].identifier, "aboutus");
        assert_eq!(targets[0].component_name, "AboutUs");
    }

    #[test]
    fn missing_routes_dir_is_fatal() {
        let temp = tempdir().unwrap();
        let config = config_for(&temp.path().join("absent"), temp.path());

        let err = discover_targets(&config).unwrap_err();

        assert!(matches!(err, DiscoverError::RoutesDirNotFound(_)));
    }

    #[test]
    fn colliding_identifiers_are_rejected() {
        let temp = tempdir().unwrap();
        let routes = temp.path().join("routes");
        fs::create_dir_all(&routes).unwrap();
        fs::write(routes.join("Home.svelte"), "").unwrap();
        fs::write(routes.join("HOME.svelte"), "").unwrap();

        let err = discover_targets(&config_for(&routes, temp.path())).unwrap_err();

        match err {
            DiscoverError::DuplicateIdentifier { identifier, .. } => {
                assert_eq!(identifier, "home");
            }
            other => panic!("expected DuplicateIdentifier, got {other:?}"),
        }
    }

    #[test]
    fn respects_configured_extension() {
        let temp = tempdir().unwrap();
        let routes = temp.path().join("routes");
        fs::create_dir_all(&routes).unwrap();
        fs::write(routes.join("Home.svelte"), "").unwrap();
        fs::write(routes.join("Index.page"), "").unwrap();

        let mut config = config_for(&routes, temp.path());
        config.extension = "page".to_string();

        let targets = discover_targets(&config).unwrap();

        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].identifier, "index");
    }
}
