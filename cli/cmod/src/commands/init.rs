//! `cmod init` — create a new `c.mod`.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use c_modfile::{format_manifest, Manifest, MANIFEST_FILE};

/// Create `c.mod` for `import_path` in the current directory.
pub fn run(import_path: &str) -> Result<()> {
    let cwd = std::env::current_dir()?;
    create_manifest(&cwd, import_path)?;
    println!("Created {MANIFEST_FILE} for module '{import_path}'");
    Ok(())
}

pub(crate) fn create_manifest(dir: &Path, import_path: &str) -> Result<()> {
    if import_path.is_empty() || import_path.contains([' ', '\n']) {
        bail!("invalid import path '{import_path}': must be a single non-empty token");
    }

    let path = dir.join(MANIFEST_FILE);
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    let manifest = Manifest {
        import_path: Some(import_path.to_string()),
        ..Manifest::default()
    };
    let contents = format_manifest(&manifest)?;
    fs::write(&path, contents).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use c_modfile::ParseContext;

    #[test]
    fn init_writes_module_directive() {
        let dir = tempfile::tempdir().unwrap();
        create_manifest(dir.path(), "c.example.org/hello").unwrap();

        let contents = fs::read_to_string(dir.path().join("c.mod")).unwrap();
        assert_eq!(contents, "module c.example.org/hello\n");
    }

    #[test]
    fn init_generates_parseable_manifest() {
        let dir = tempfile::tempdir().unwrap();
        create_manifest(dir.path(), "hello").unwrap();

        let manifest =
            Manifest::parse_file(&mut ParseContext::new(), &dir.path().join("c.mod")).unwrap();
        assert_eq!(manifest.require_module().unwrap(), "hello");
    }

    #[test]
    fn init_refuses_existing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("c.mod"), "module old\n").unwrap();

        let err = create_manifest(dir.path(), "new").unwrap_err();
        assert!(err.to_string().contains("already exists"));
        let contents = fs::read_to_string(dir.path().join("c.mod")).unwrap();
        assert_eq!(contents, "module old\n");
    }

    #[test]
    fn init_rejects_unparseable_import_path() {
        let dir = tempfile::tempdir().unwrap();
        assert!(create_manifest(dir.path(), "two words").is_err());
        assert!(create_manifest(dir.path(), "").is_err());
        assert!(!dir.path().join("c.mod").exists());
    }
}
