//! `cmod fmt` — print a manifest in canonical form.

use std::path::Path;

use anyhow::{bail, Context, Result};
use c_modfile::format_manifest;

use super::{load_manifest, Diagnostic};

/// Format the manifest at `path` to stdout.
pub fn run(path: &Path, export: Option<&str>) -> Result<()> {
    print!("{}", render(path, export)?);
    Ok(())
}

pub(crate) fn render(path: &Path, export: Option<&str>) -> Result<String> {
    let manifest = load_manifest(path)?;
    manifest.require_module().map_err(|_| Diagnostic::MissingModule)?;

    match export.unwrap_or("text") {
        "text" => Ok(format_manifest(&manifest)?),
        "json" => {
            let mut json = serde_json::to_string_pretty(&manifest).context("serializing manifest")?;
            json.push('\n');
            Ok(json)
        }
        other => bail!("unknown export format '{other}' (expected text or json)"),
    }
}
