//! CLI command implementations.

pub mod flags;
pub mod fmt;
pub mod init;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use c_modfile::{Manifest, ModfileError, ParseContext, MANIFEST_FILE};

/// Manifest problems reported verbatim, without the usual `error:` prefix.
#[derive(Debug, thiserror::Error)]
pub enum Diagnostic {
    #[error("{}:{line}: syntax error", path.display())]
    Syntax { path: PathBuf, line: usize },

    #[error("cmod: no 'module' directive specified")]
    MissingModule,
}

/// Resolve the manifest a command operates on.
///
/// An explicit path is canonicalized; without one, `./c.mod` is used if it
/// exists.
pub fn resolve_manifest_path(path: Option<&Path>) -> Result<PathBuf> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default = Path::new(".").join(MANIFEST_FILE);
            if !default.is_file() {
                bail!("no {MANIFEST_FILE} in the current directory; pass a path to one");
            }
            default
        }
    };
    fs::canonicalize(&path).with_context(|| format!("couldn't resolve '{}'", path.display()))
}

/// Parse the manifest at `path` with a fresh context.
///
/// Syntax errors are reported as `<path>:<line>: syntax error`.
pub(crate) fn load_manifest(path: &Path) -> Result<Manifest> {
    let mut ctx = ParseContext::new();
    match Manifest::parse_file(&mut ctx, path) {
        Ok(manifest) => Ok(manifest),
        Err(ModfileError::Syntax { line }) => Err(Diagnostic::Syntax {
            path: path.to_path_buf(),
            line,
        }
        .into()),
        Err(e) => Err(e.into()),
    }
}
