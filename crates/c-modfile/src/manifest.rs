//! `c.mod` parsing.
//!
//! A manifest is a list of directives, one per line:
//!
//! ```text
//! module <import-path>
//! version <version>
//! os <platform> <flag>...
//! ```
//!
//! Parsing stops at the first bad line and reports its number.

use std::path::Path;

use serde::Serialize;

use crate::arena::ParseContext;
use crate::error::{ModfileError, Result};
use crate::store::PlatformFlags;
use crate::token;

/// The parsed form of a `c.mod` file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Manifest {
    /// Argument of the `module` directive, if one was present.
    #[serde(rename = "module")]
    pub import_path: Option<String>,
    /// Argument of the `version` directive, if one was present.
    pub version: Option<String>,
    /// Flags from every `os` directive, keyed by platform.
    #[serde(rename = "platforms")]
    pub platform_flags: PlatformFlags,
}

/// One recognized line of a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive<'a> {
    Module(&'a str),
    Version(&'a str),
    Os { platform: &'a str, flags: &'a [&'a str] },
}

impl<'a> Directive<'a> {
    /// Classify a non-empty token list. `None` means the line is malformed.
    pub fn from_tokens(tokens: &'a [&'a str]) -> Option<Self> {
        match tokens {
            ["module", path] => Some(Directive::Module(*path)),
            ["version", version] => Some(Directive::Version(*version)),
            ["os", platform, flags @ ..] if !flags.is_empty() => Some(Directive::Os {
                platform: *platform,
                flags,
            }),
            _ => None,
        }
    }
}

impl Manifest {
    /// Read and parse the manifest at `path`.
    pub fn parse_file(ctx: &mut ParseContext, path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| ModfileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        ctx.scratch.alloc(bytes.len() + 1)?;
        log::debug!("read {} bytes from {}", bytes.len(), path.display());
        Self::parse_bytes(ctx, &bytes)
    }

    /// Parse raw manifest contents.
    pub fn parse_bytes(ctx: &mut ParseContext, bytes: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes).map_err(|_| ModfileError::InvalidUtf8)?;
        Self::parse_str(ctx, text)
    }

    /// Parse manifest text.
    ///
    /// Returns [`ModfileError::Syntax`] for the first malformed line. A
    /// manifest without a `module` line still parses; see
    /// [`require_module`](Self::require_module).
    pub fn parse_str(ctx: &mut ParseContext, text: &str) -> Result<Self> {
        let mut manifest = Manifest::default();
        let lines: Vec<(usize, &str)> = token::lines(text).collect();
        ctx.scratch.alloc_array::<*const u8>(lines.len())?;

        for (line_no, line) in lines {
            let mark = ctx.scratch.mark();
            let tokens = token::tokens(line);
            ctx.scratch.alloc_array::<*const u8>(tokens.len())?;
            if !tokens.is_empty() {
                let directive = Directive::from_tokens(&tokens).ok_or_else(|| syntax(line_no))?;
                manifest.apply(ctx, line_no, directive)?;
            }
            ctx.scratch.rewind(mark);
        }

        log::debug!(
            "parsed manifest: module={:?} version={:?} platforms={}",
            manifest.import_path,
            manifest.version,
            manifest.platform_flags.len()
        );
        Ok(manifest)
    }

    fn apply(&mut self, ctx: &mut ParseContext, line: usize, directive: Directive<'_>) -> Result<()> {
        match directive {
            Directive::Module(path) => {
                if self.import_path.is_some() {
                    return Err(syntax(line));
                }
                self.import_path = Some(ctx.mem.alloc_str(path)?);
            }
            Directive::Version(version) => {
                if self.version.is_some() {
                    return Err(syntax(line));
                }
                self.version = Some(ctx.mem.alloc_str(version)?);
            }
            Directive::Os { platform, flags } => {
                self.platform_flags.extend(&mut ctx.mem, platform, flags)?;
            }
        }
        Ok(())
    }

    /// The import path, or [`ModfileError::MissingModule`] if the manifest
    /// had no `module` directive.
    pub fn require_module(&self) -> Result<&str> {
        self.import_path.as_deref().ok_or(ModfileError::MissingModule)
    }

    /// The flags declared for `platform`, if any.
    pub fn flags_for(&self, platform: &str) -> Option<&[String]> {
        self.platform_flags.get(platform)
    }

    /// The flags declared for the platform this binary was built for.
    pub fn host_flags(&self) -> Option<&[String]> {
        self.flags_for(std::env::consts::OS)
    }

    /// Approximate bytes of `mem` a manifest of this shape needs.
    #[cfg(test)]
    fn footprint(&self) -> usize {
        let strings = self.import_path.iter().chain(self.version.iter());
        strings.map(|s| s.len() + 1).sum::<usize>()
            + self
                .platform_flags
                .iter()
                .map(|(k, f)| {
                    let flags = f.iter().map(|s| s.len() + 1 + std::mem::size_of::<String>());
                    k.len() + 1 + flags.sum::<usize>()
                })
                .sum::<usize>()
    }
}

fn syntax(line: usize) -> ModfileError {
    log::debug!("syntax error at line {line}");
    ModfileError::Syntax { line }
}
