//! `c.mod` manifest support for the c toolchain.
//!
//! A `c.mod` file names an importable module, optionally pins its version,
//! and lists compiler flags per target platform:
//!
//! ```text
//! module c.example.org/hello
//! version 0.3.1
//! os linux -O2 -pthread
//! os darwin -O2
//! ```
//!
//! Parsing draws all of its memory from an explicit [`ParseContext`] with
//! fixed-capacity arenas; running out is reported as
//! [`ModfileError::OutOfMemory`] rather than aborting.

pub mod arena;
pub mod error;
pub mod format;
pub mod hash;
pub mod manifest;
pub mod store;
pub mod token;

pub use arena::{Arena, ArenaKind, ParseContext, DEFAULT_ARENA_CAPACITY};
pub use error::{ModfileError, Result};
pub use format::format_manifest;
pub use manifest::{Directive, Manifest};
pub use store::{FlagList, PlatformFlags};

/// Conventional file name of a module manifest.
pub const MANIFEST_FILE: &str = "c.mod";
