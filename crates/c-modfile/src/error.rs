//! Error types for manifest parsing and formatting.

use std::path::PathBuf;

use crate::arena::ArenaKind;

/// Errors that can occur while reading, parsing, or formatting a `c.mod` file.
#[derive(Debug, thiserror::Error)]
pub enum ModfileError {
    /// The manifest could not be opened or fully read.
    #[error("error reading modfile {}: {source}", path.display())]
    Io {
        /// The manifest path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The manifest contents are not valid UTF-8.
    #[error("error reading modfile: contents are not valid UTF-8")]
    InvalidUtf8,

    /// A malformed or unrecognized directive.
    #[error("line {line}: syntax error")]
    Syntax {
        /// 1-indexed line of the first bad directive.
        line: usize,
    },

    /// A syntactically valid manifest with no `module` directive.
    #[error("no 'module' directive specified")]
    MissingModule,

    /// One of the invocation's arenas ran out of room.
    #[error("allocation failure: {arena} arena cannot fit {requested} more bytes")]
    OutOfMemory {
        /// Which arena was exhausted.
        arena: ArenaKind,
        /// Size of the request that failed.
        requested: usize,
    },
}

impl ModfileError {
    /// The numeric parse status for this error.
    ///
    /// Negative for read failures, the offending line for syntax errors.
    /// A successful parse has status 0, which is represented by `Ok`.
    /// Errors that are not parse outcomes (missing module, allocation
    /// failure) report -1.
    pub fn status(&self) -> i64 {
        match self {
            ModfileError::Syntax { line } => *line as i64,
            _ => -1,
        }
    }
}

/// Result type for manifest operations.
pub type Result<T> = std::result::Result<T, ModfileError>;
