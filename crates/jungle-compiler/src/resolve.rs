//! Entry-module import resolution.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::traits::CompileError;

static DEFAULT_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s+([A-Za-z_$][A-Za-z0-9_$]*)\s+from\s+['"]([^'"]+)['"]"#)
        .expect("Invalid import regex")
});

/// The component import found in an entry module.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryImport {
    /// Imported binding, the component's original (non-lower-cased) name.
    pub component: String,

    /// Resolved path of the component source file.
    pub source: PathBuf,
}

/// Resolve the first default import of an entry module.
///
/// Relative specifiers are resolved against `entry_dir`; absolute
/// specifiers are taken as-is.
pub fn resolve_entry(source: &str, entry_dir: &Path) -> Result<EntryImport, CompileError> {
    let captures = DEFAULT_IMPORT
        .captures(source)
        .ok_or_else(|| CompileError::UnresolvedImport(entry_dir.display().to_string()))?;

    let component = captures[1].to_string();
    let specifier = Path::new(&captures[2]);

    let source = if specifier.is_absolute() {
        specifier.to_path_buf()
    } else {
        entry_dir.join(specifier)
    };

    Ok(EntryImport { component, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resolves_absolute_import() {
        let entry = "import Home from '/srv/app/src/routes/Home.svelte';\n\
                     export default new Home({ target: document.body });";

        let import = resolve_entry(entry, Path::new("/srv/app/jungle/build/home")).unwrap();

        assert_eq!(import.component, "Home");
        assert_eq!(import.source, PathBuf::from("/srv/app/src/routes/Home.svelte"));
    }

    #[test]
    fn resolves_relative_import_against_entry_dir() {
        let entry = "import About from '../../src/routes/About.svelte';";

        let import = resolve_entry(entry, Path::new("/srv/app/build/about")).unwrap();

        assert_eq!(import.component, "About");
        assert_eq!(
            import.source,
            PathBuf::from("/srv/app/build/about/../../src/routes/About.svelte")
        );
    }

    #[test]
    fn accepts_double_quoted_specifiers() {
        let entry = r#"import Card from "/srv/Card.svelte";"#;

        let import = resolve_entry(entry, Path::new("/tmp")).unwrap();

        assert_eq!(import.component, "Card");
    }

    #[test]
    fn rejects_entry_without_import() {
        let err = resolve_entry("export default 1;", Path::new("/tmp")).unwrap_err();

        assert!(matches!(err, CompileError::UnresolvedImport(_)));
    }
}
