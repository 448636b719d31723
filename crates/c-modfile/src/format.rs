//! Canonical `c.mod` rendering.
//!
//! Output is `module`, then `version` if present, then one `os` line per
//! platform in store order. Repeated `os` lines for a platform are merged
//! into one, and runs of spaces collapse to a single space.

use crate::error::Result;
use crate::manifest::Manifest;

/// Render `manifest` in canonical form.
///
/// Fails with [`ModfileError::MissingModule`](crate::ModfileError::MissingModule)
/// if the manifest has no `module` directive.
pub fn format_manifest(manifest: &Manifest) -> Result<String> {
    let import_path = manifest.require_module()?;

    let mut out = format!("module {import_path}\n");
    if let Some(version) = &manifest.version {
        out.push_str(&format!("version {version}\n"));
    }
    for (platform, flags) in &manifest.platform_flags {
        out.push_str(&format!("os {platform} {}\n", flags.join(" ")));
    }
    Ok(out)
}
