//! Command routing for the c toolchain.
//!
//! Every entry-point binary that fronts subcommands works the same way: the
//! subcommands are executables named `c<name>` in `<C_ROOT>/commands`, and
//! invoking `<tool> <name> args...` replaces the current process with the
//! matching executable. With no name, the available commands are listed.

pub mod config;
pub mod dispatch;
pub mod entry;
pub mod error;

pub use config::{RouterConfig, DEFAULT_ROOT, ROOT_ENV};
pub use dispatch::Router;
pub use entry::{command_name, CommandEntry, PREFIX};
pub use error::{Result, RouterError};
