//! Toolchain root configuration.

use std::path::{Path, PathBuf};

/// Environment variable naming the toolchain root.
pub const ROOT_ENV: &str = "C_ROOT";

/// Toolchain root used when [`ROOT_ENV`] is unset.
pub const DEFAULT_ROOT: &str = "/c";

/// Subdirectory of the root holding the command binaries.
pub const COMMANDS_DIR: &str = "commands";

/// Where a toolchain installation lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterConfig {
    root: PathBuf,
}

impl RouterConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/commands`.
    pub fn commands_dir(&self) -> PathBuf {
        self.root.join(COMMANDS_DIR)
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_dir_is_under_root() {
        let config = RouterConfig::new("/opt/c");
        assert_eq!(config.commands_dir(), Path::new("/opt/c/commands"));
    }

    #[test]
    fn default_root() {
        assert_eq!(RouterConfig::default().root(), Path::new("/c"));
    }
}
