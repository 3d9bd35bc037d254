//! Scaffold generation.
//!
//! Each target gets three synthesized artifacts before its build runs: the
//! entry module the compiler consumes, the shell document the bundle loads
//! into, and the baseline stylesheet shared by every page. Artifacts are
//! typed builders rendered through one template environment so the filename
//! contract between the shell and the compiler outputs stays in one place.

use minijinja::Environment;

use crate::discover::BuildTarget;

/// Entry module filename inside a workspace.
pub const ENTRY_FILE: &str = "main.js";
/// Shell document filename inside a workspace.
pub const SHELL_FILE: &str = "index.html";
/// Baseline stylesheet filename inside a workspace.
pub const GLOBAL_STYLESHEET_FILE: &str = "global.css";
/// Script bundle the shell loads; written by the compiler.
pub const BUNDLE_FILE: &str = "bundle.js";
/// Source map written next to the bundle.
pub const BUNDLE_MAP_FILE: &str = "bundle.js.map";
/// Extracted component stylesheet the shell links; written by the compiler.
pub const BUNDLE_STYLESHEET_FILE: &str = "bundle.css";

/// Errors that can occur while generating a scaffold.
#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    #[error("Failed to create workspace {path}: {message}")]
    WorkspaceError { path: String, message: String },

    #[error("Failed to render {artifact}: {message}")]
    RenderError { artifact: String, message: String },

    #[error("Failed to write {path}: {message}")]
    WriteError { path: String, message: String },
}

/// Imports the component under its original name from its absolute source
/// path, instantiates it against the document body, and exports it as the
/// module default.
#[derive(Debug, Clone, serde::Serialize)]
pub struct EntryModule {
    component: String,
    source: String,
}

impl EntryModule {
    /// Build the entry module for a target.
    pub fn for_target(target: &BuildTarget) -> Self {
        Self {
            component: target.component_name.clone(),
            source: target.source_path.display().to_string(),
        }
    }

    /// Render to module source.
    pub fn render(&self, env: &Environment<'_>) -> Result<String, ScaffoldError> {
        render(env, ENTRY_FILE, self)
    }
}

/// Markup skeleton wired to the fixed output filenames of the build.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ShellDocument {
    title: String,
    script: &'static str,
    stylesheets: [&'static str; 2],
}

impl ShellDocument {
    /// Build the shell document with the configured page title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            script: BUNDLE_FILE,
            stylesheets: [GLOBAL_STYLESHEET_FILE, BUNDLE_STYLESHEET_FILE],
        }
    }

    /// Render to markup.
    pub fn render(&self, env: &Environment<'_>) -> Result<String, ScaffoldError> {
        render(env, SHELL_FILE, self)
    }
}

/// Fixed reset and typography rules, identical across all targets.
#[derive(Debug, Clone, Copy)]
pub struct BaselineStylesheet;

impl BaselineStylesheet {
    /// The stylesheet content.
    pub fn render(&self) -> &'static str {
        GLOBAL_CSS
    }
}

fn render<S: serde::Serialize>(
    env: &Environment<'_>,
    artifact: &str,
    ctx: S,
) -> Result<String, ScaffoldError> {
    let to_error = |e: minijinja::Error| ScaffoldError::RenderError {
        artifact: artifact.to_string(),
        message: e.to_string(),
    };

    env.get_template(artifact)
        .map_err(to_error)?
        .render(ctx)
        .map_err(to_error)
}

/// Generates the per-target scaffold artifacts.
pub struct ScaffoldGenerator {
    env: Environment<'static>,
    title: String,
}

impl ScaffoldGenerator {
    /// Create a generator stamping `title` into each shell document.
    pub fn new(title: impl Into<String>) -> Self {
        let mut env = Environment::new();

        env.add_template_owned(ENTRY_FILE.to_string(), ENTRY_TEMPLATE.to_string())
            .expect("Failed to add entry template");
        env.add_template_owned(SHELL_FILE.to_string(), SHELL_TEMPLATE.to_string())
            .expect("Failed to add shell template");

        Self {
            env,
            title: title.into(),
        }
    }

    /// Ensure the target's workspace exists and write all three artifacts.
    ///
    /// Idempotent: an existing workspace is reused and existing artifacts
    /// are overwritten. Each write is awaited; a failure aborts the
    /// scaffold and propagates to the caller.
    pub async fn write(&self, target: &BuildTarget) -> Result<(), ScaffoldError> {
        tokio::fs::create_dir_all(&target.workspace_path)
            .await
            .map_err(|e| ScaffoldError::WorkspaceError {
                path: target.workspace_path.display().to_string(),
                message: e.to_string(),
            })?;

        let entry = EntryModule::for_target(target).render(&self.env)?;
        let shell = ShellDocument::new(&self.title).render(&self.env)?;
        let stylesheet = BaselineStylesheet.render();

        self.write_artifact(target, ENTRY_FILE, &entry).await?;
        self.write_artifact(target, SHELL_FILE, &shell).await?;
        self.write_artifact(target, GLOBAL_STYLESHEET_FILE, stylesheet)
            .await?;

        tracing::debug!("Scaffolded workspace for /{}", target.identifier);

        Ok(())
    }

    async fn write_artifact(
        &self,
        target: &BuildTarget,
        name: &str,
        contents: &str,
    ) -> Result<(), ScaffoldError> {
        let path = target.workspace_path.join(name);

        tokio::fs::write(&path, contents)
            .await
            .map_err(|e| ScaffoldError::WriteError {
                path: path.display().to_string(),
                message: e.to_string(),
            })
    }
}

const ENTRY_TEMPLATE: &str = r#"import {{ component }} from '{{ source }}';

export default new {{ component }}({ target: document.body });
"#;

const SHELL_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width,initial-scale=1">

  <title>{{ title }}</title>

  <link rel="icon" type="image/png" href="./favicon.png">
{% for stylesheet in stylesheets %}  <link rel="stylesheet" href="./{{ stylesheet }}">
{% endfor %}
  <script defer src="./{{ script }}"></script>
</head>

<body>
</body>
</html>
"#;

const GLOBAL_CSS: &str = r#"html, body {
  position: relative;
  width: 100%;
  height: 100%;
}

body {
  color: #333;
  margin: 0;
  padding: 8px;
  box-sizing: border-box;
  font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Oxygen-Sans, Ubuntu, Cantarell, "Helvetica Neue", sans-serif;
}

a {
  color: rgb(0,100,200);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}

a:visited {
  color: rgb(0,80,160);
}

label {
  display: block;
}

input, button, select, textarea {
  font-family: inherit;
  font-size: inherit;
  padding: 0.4em;
  margin: 0 0 0.5em 0;
  box-sizing: border-box;
  border: 1px solid #ccc;
  border-radius: 2px;
}

input:disabled {
  color: #ccc;
}

input[type="range"] {
  height: 0;
}

button {
  color: #333;
  background-color: #f4f4f4;
  outline: none;
}

button:disabled {
  color: #999;
}

button:not(:disabled):active {
  background-color: #ddd;
}

button:focus {
  border-color: #666;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;

    fn target_in(dir: &Path) -> BuildTarget {
        BuildTarget {
            identifier: "home".to_string(),
            component_name: "Home".to_string(),
            source_path: PathBuf::from("/srv/app/src/routes/Home.svelte"),
            workspace_path: dir.join("build/home"),
        }
    }

    #[tokio::test]
    async fn writes_all_three_artifacts() {
        let temp = tempdir().unwrap();
        let target = target_in(temp.path());

        ScaffoldGenerator::new("Svelte app")
            .write(&target)
            .await
            .unwrap();

        for name in [ENTRY_FILE, SHELL_FILE, GLOBAL_STYLESHEET_FILE] {
            let contents = fs::read_to_string(target.workspace_path.join(name)).unwrap();
            assert!(!contents.is_empty(), "{name} should not be empty");
        }
    }

    #[tokio::test]
    async fn entry_module_imports_original_name_from_absolute_path() {
        let temp = tempdir().unwrap();
        let target = target_in(temp.path());

        ScaffoldGenerator::new("Svelte app")
            .write(&target)
            .await
            .unwrap();

        let entry = fs::read_to_string(target.workspace_path.join(ENTRY_FILE)).unwrap();

        assert!(entry.contains("import Home from '/srv/app/src/routes/Home.svelte';"));
        assert!(entry.contains("export default new Home({ target: document.body });"));
    }

    #[tokio::test]
    async fn shell_references_fixed_output_names() {
        let temp = tempdir().unwrap();
        let target = target_in(temp.path());

        ScaffoldGenerator::new("My site").write(&target).await.unwrap();

        let shell = fs::read_to_string(target.workspace_path.join(SHELL_FILE)).unwrap();

        assert!(shell.contains("<title>My site</title>"));
        assert!(shell.contains(r#"<link rel="stylesheet" href="./global.css">"#));
        assert!(shell.contains(r#"<link rel="stylesheet" href="./bundle.css">"#));
        assert!(shell.contains(r#"<script defer src="./bundle.js"></script>"#));
    }

    #[tokio::test]
    async fn scaffolding_twice_is_idempotent() {
        let temp = tempdir().unwrap();
        let target = target_in(temp.path());
        let generator = ScaffoldGenerator::new("Svelte app");

        generator.write(&target).await.unwrap();
        generator.write(&target).await.unwrap();

        let entries = fs::read_dir(&target.workspace_path).unwrap().count();
        assert_eq!(entries, 3);
    }
}
