//! `cmod flags` — print the compiler flags declared for one platform.

use std::path::Path;

use anyhow::{Context, Result};

use super::load_manifest;

/// Print the flags for `os` (default: the host OS) on one line.
///
/// A platform with no `os` directive prints nothing.
pub fn run(path: &Path, os: Option<&str>) -> Result<()> {
    if let Some(flags) = lookup(path, os)? {
        println!("{}", flags.join(" "));
    }
    Ok(())
}

pub(crate) fn lookup(path: &Path, os: Option<&str>) -> Result<Option<Vec<String>>> {
    let manifest = load_manifest(path)?;
    manifest
        .require_module()
        .with_context(|| format!("{}", path.display()))?;

    let flags = match os {
        Some(os) => manifest.flags_for(os),
        None => manifest.host_flags(),
    };
    log::debug!("flags for {}: {:?}", os.unwrap_or(std::env::consts::OS), flags);
    Ok(flags.map(<[String]>::to_vec))
}
