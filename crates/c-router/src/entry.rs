//! Discovery of command binaries.
//!
//! A command `name` is installed as a file called `c<name>` in the commands
//! directory. Anything else in the directory is ignored.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, RouterError};

/// Prefix every command binary's file name starts with.
pub const PREFIX: char = 'c';

/// The command name encoded in `file_name`, if it is a command binary.
pub fn command_name(file_name: &str) -> Option<&str> {
    file_name.strip_prefix(PREFIX).filter(|rest| !rest.is_empty())
}

/// A command binary found in the commands directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    file_name: String,
    path: PathBuf,
}

impl CommandEntry {
    /// The command name (file name without the prefix).
    pub fn name(&self) -> &str {
        &self.file_name[PREFIX.len_utf8()..]
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Full path to the binary.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// List the command binaries in `dir`, in directory order.
///
/// Subdirectories and names that are not valid UTF-8 are skipped.
pub fn scan(dir: &Path) -> Result<Vec<CommandEntry>> {
    let read_err = |source: std::io::Error| RouterError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        if entry.file_type().map_err(read_err)?.is_dir() {
            continue;
        }
        let file_name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(name) => {
                log::debug!("skipping non UTF-8 entry {name:?}");
                continue;
            }
        };
        if command_name(&file_name).is_none() {
            continue;
        }
        entries.push(CommandEntry {
            path: dir.join(&file_name),
            file_name,
        });
    }
    log::debug!("found {} commands in {}", entries.len(), dir.display());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_is_stripped() {
        assert_eq!(command_name("cbuild"), Some("build"));
        assert_eq!(command_name("cc"), Some("c"));
    }

    #[test]
    fn non_commands_are_rejected() {
        assert_eq!(command_name("c"), None);
        assert_eq!(command_name(""), None);
        assert_eq!(command_name("other"), None);
        assert_eq!(command_name("Cbuild"), None);
    }

    #[test]
    fn scan_skips_directories_and_other_files() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["cbuild", "cmod", "other", "c"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        fs::create_dir(dir.path().join("cdir")).unwrap();

        let mut names: Vec<String> = scan(dir.path())
            .unwrap()
            .iter()
            .map(|e| e.name().to_string())
            .collect();
        names.sort();
        assert_eq!(names, ["build", "mod"]);
    }

    #[test]
    fn entry_path_is_inside_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("cfmt"), b"").unwrap();

        let entries = scan(dir.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].file_name(), "cfmt");
        assert_eq!(entries[0].path(), dir.path().join("cfmt"));
    }

    #[test]
    fn scan_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = scan(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, RouterError::ReadDir { .. }));
    }
}
