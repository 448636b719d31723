//! Error types for command resolution and dispatch.

use std::path::PathBuf;

/// Errors that can occur while locating or launching a command.
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// The commands directory could not be enumerated.
    #[error("couldn't read directory {}: {source}", path.display())]
    ReadDir {
        /// The directory being scanned.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No entry in the commands directory matches the requested name.
    #[error("no such command: '{command}'")]
    NotFound { command: String },

    /// The matching program could not be started.
    #[error("exec failed for {}: {source}", path.display())]
    Exec {
        /// The program that failed to start.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for router operations.
pub type Result<T> = std::result::Result<T, RouterError>;
