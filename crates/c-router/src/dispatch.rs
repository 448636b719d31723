//! Command lookup and process hand-off.

use std::convert::Infallible;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::RouterConfig;
use crate::entry::{scan, CommandEntry};
use crate::error::{Result, RouterError};

/// Routes command names to the binaries in one commands directory.
#[derive(Debug, Clone)]
pub struct Router {
    dir: PathBuf,
}

impl Router {
    /// A router over `<root>/commands`.
    pub fn new(config: &RouterConfig) -> Self {
        Self::with_dir(config.commands_dir())
    }

    /// A router over an arbitrary directory.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Every command in the directory, in directory order.
    pub fn commands(&self) -> Result<Vec<CommandEntry>> {
        scan(&self.dir)
    }

    /// Command names for the usage listing.
    ///
    /// An unreadable directory is logged and lists nothing.
    pub fn list(&self) -> Vec<String> {
        match self.commands() {
            Ok(entries) => entries.iter().map(|e| e.name().to_string()).collect(),
            Err(err) => {
                log::warn!("{err}");
                Vec::new()
            }
        }
    }

    /// The first entry whose name is exactly `command`.
    pub fn resolve(&self, command: &str) -> Result<CommandEntry> {
        self.commands()?
            .into_iter()
            .find(|entry| entry.name() == command)
            .ok_or_else(|| RouterError::NotFound {
                command: command.to_string(),
            })
    }

    /// Replace the current process with `command`, passing it `args`.
    ///
    /// The target sees its own full path as `argv[0]` followed by `args`.
    /// Only returns on failure.
    pub fn dispatch<I, S>(&self, command: &str, args: I) -> Result<Infallible>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let entry = self.resolve(command)?;
        log::debug!("dispatching '{command}' to {}", entry.path().display());
        let mut cmd = Command::new(entry.path());
        cmd.args(args);
        hand_off(cmd, entry.path())
    }
}

#[cfg(unix)]
fn hand_off(mut cmd: Command, path: &Path) -> Result<Infallible> {
    use std::os::unix::process::CommandExt;

    let source = cmd.exec();
    Err(RouterError::Exec {
        path: path.to_path_buf(),
        source,
    })
}

/// Without exec, run the target as a child and exit with its status.
#[cfg(not(unix))]
fn hand_off(mut cmd: Command, path: &Path) -> Result<Infallible> {
    let status = cmd.status().map_err(|source| RouterError::Exec {
        path: path.to_path_buf(),
        source,
    })?;
    std::process::exit(status.code().unwrap_or(1))
}
