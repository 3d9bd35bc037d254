//! Bundle, source map, and stylesheet emission.

use std::fs;
use std::path::Path;

use crate::resolve::EntryImport;
use crate::sfc::ComponentParts;
use crate::traits::{CompileError, CompileJob, CompileMode, CompileOutput};

/// Write every artifact for a compiled component into the workspace.
///
/// The bundle is an immediately-invoked expression assigned to `app`,
/// mirroring what the shell document's deferred `bundle.js` script expects.
/// Styles, when present, go to the job's stylesheet path referenced by the
/// shell document.
pub fn write_bundle(
    job: &CompileJob,
    import: &EntryImport,
    parts: &ComponentParts,
    component_source: &str,
) -> Result<CompileOutput, CompileError> {
    let bundle = generate_bundle(import, parts, job);
    write(&job.bundle, &bundle)?;

    let map = source_map(&import.source, component_source, &job.bundle);
    write(&job.bundle_map, &map)?;

    let stylesheet = if parts.style.trim().is_empty() {
        None
    } else {
        let css = match job.mode {
            CompileMode::Production => minify_css(&parts.style)?,
            CompileMode::Development => parts.style.clone(),
        };
        write(&job.stylesheet, &css)?;
        Some(job.stylesheet.clone())
    };

    Ok(CompileOutput {
        bundle: job.bundle.clone(),
        stylesheet,
    })
}

/// Generate the self-contained page bundle.
fn generate_bundle(import: &EntryImport, parts: &ComponentParts, job: &CompileJob) -> String {
    let name = &import.component;
    let template = encode_js_string(&parts.template);
    let script = indent(&parts.script, 8);
    let map_file = file_name(&job.bundle_map);

    let header = match job.mode {
        CompileMode::Development => format!("// dev build of {}\n", import.source.display()),
        CompileMode::Production => String::new(),
    };

    format!(
        r#"{header}var app = (function () {{
    'use strict';

    function {name}(options) {{
        const target = options.target;
        const root = document.createElement('div');
        root.innerHTML = {template};
{script}
        target.appendChild(root);
        this.target = target;
        this.root = root;
    }}

    return new {name}({{ target: document.body }});

}})();
//# sourceMappingURL={map_file}
"#
    )
}

/// Version-3 source map carrying the component source verbatim.
fn source_map(source_path: &Path, source: &str, bundle_path: &Path) -> String {
    serde_json::json!({
        "version": 3,
        "file": file_name(bundle_path),
        "sources": [source_path.display().to_string()],
        "sourcesContent": [source],
        "names": [],
        "mappings": "",
    })
    .to_string()
}

/// Minify CSS using lightningcss.
fn minify_css(css: &str) -> Result<String, CompileError> {
    use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

    let stylesheet = StyleSheet::parse(css, ParserOptions::default())
        .map_err(|e| CompileError::StylesheetError(format!("CSS parse error: {}", e)))?;

    let minified = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| CompileError::StylesheetError(format!("CSS minify error: {}", e)))?;

    Ok(minified.code)
}

/// Encode a string as a JavaScript string literal.
fn encode_js_string(s: &str) -> String {
    serde_json::to_string(s).expect("Failed to encode template string")
}

/// Indent every non-empty line by `spaces`.
fn indent(s: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    s.lines()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn write(path: &Path, contents: &str) -> Result<(), CompileError> {
    fs::write(path, contents).map_err(|e| CompileError::WriteError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn job(mode: CompileMode) -> CompileJob {
        CompileJob {
            entry: PathBuf::from("/ws/main.js"),
            bundle: PathBuf::from("/ws/bundle.js"),
            bundle_map: PathBuf::from("/ws/bundle.js.map"),
            stylesheet: PathBuf::from("/ws/bundle.css"),
            mode,
        }
    }

    fn import() -> EntryImport {
        EntryImport {
            component: "Home".to_string(),
            source: PathBuf::from("/srv/src/routes/Home.svelte"),
        }
    }

    #[test]
    fn bundle_wraps_component_in_iife() {
        let parts = ComponentParts {
            script: "let count = 0;".to_string(),
            style: String::new(),
            template: "<h1>Hi</h1>".to_string(),
        };

        let bundle = generate_bundle(&import(), &parts, &job(CompileMode::Production));

        assert!(bundle.starts_with("var app = (function () {"));
        assert!(bundle.contains("function Home(options)"));
        assert!(bundle.contains(r#"root.innerHTML = "<h1>Hi</h1>";"#));
        assert!(bundle.contains("        let count = 0;"));
        assert!(bundle.contains("return new Home({ target: document.body });"));
        assert!(bundle.ends_with("//# sourceMappingURL=bundle.js.map\n"));
    }

    #[test]
    fn dev_bundle_names_its_source() {
        let parts = ComponentParts::default();

        let bundle = generate_bundle(&import(), &parts, &job(CompileMode::Development));

        assert!(bundle.starts_with("// dev build of /srv/src/routes/Home.svelte\n"));
    }

    #[test]
    fn encodes_template_quotes_and_newlines() {
        let parts = ComponentParts {
            script: String::new(),
            style: String::new(),
            template: "<p class=\"big\">a\nb</p>".to_string(),
        };

        let bundle = generate_bundle(&import(), &parts, &job(CompileMode::Production));

        assert!(bundle.contains(r#"root.innerHTML = "<p class=\"big\">a\nb</p>";"#));
    }

    #[test]
    fn source_map_references_bundle_and_source() {
        let map = source_map(
            Path::new("/srv/src/routes/Home.svelte"),
            "<h1/>",
            Path::new("/ws/bundle.js"),
        );

        let value: serde_json::Value = serde_json::from_str(&map).unwrap();
        assert_eq!(value["version"], 3);
        assert_eq!(value["file"], "bundle.js");
        assert_eq!(value["sources"][0], "/srv/src/routes/Home.svelte");
        assert_eq!(value["sourcesContent"][0], "<h1/>");
    }

    #[test]
    fn minifies_css() {
        let css = "h1 {\n    color: purple;\n}\n";

        let minified = minify_css(css).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.contains("h1"));
    }

    #[test]
    fn indents_only_nonempty_lines() {
        assert_eq!(indent("a;\n\nb;", 4), "    a;\n\n    b;");
    }
}
