//! Fixed-capacity allocation budgets for a single invocation.
//!
//! A [`ParseContext`] owns two arenas. `mem` pays for everything that
//! outlives the parse (copied directive arguments and store nodes), while
//! `scratch` pays for the raw file contents and the per-line token vectors
//! and is rewound after each line. Neither arena grows: a request that does
//! not fit fails with [`ModfileError::OutOfMemory`] and the whole invocation
//! is expected to stop.

use std::fmt;
use std::mem::size_of;

use crate::error::{ModfileError, Result};

/// Default capacity of each arena, in bytes.
pub const DEFAULT_ARENA_CAPACITY: usize = 1 << 16;

/// Identifies which arena of a [`ParseContext`] an allocation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArenaKind {
    /// Long-lived allocations.
    Mem,
    /// Per-call temporaries.
    Scratch,
}

impl fmt::Display for ArenaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArenaKind::Mem => write!(f, "mem"),
            ArenaKind::Scratch => write!(f, "scratch"),
        }
    }
}

/// A bump-style allocation budget.
///
/// The arena tracks a single offset. Allocations move it forward;
/// [`rewind`](Self::rewind) moves it back to an earlier [`mark`](Self::mark),
/// releasing everything allocated since in O(1).
#[derive(Debug, Clone)]
pub struct Arena {
    kind: ArenaKind,
    capacity: usize,
    offset: usize,
}

impl Arena {
    /// Create an empty arena holding at most `capacity` bytes.
    pub fn with_capacity(kind: ArenaKind, capacity: usize) -> Self {
        Self {
            kind,
            capacity,
            offset: 0,
        }
    }

    /// Reserve `bytes` from the arena.
    pub fn alloc(&mut self, bytes: usize) -> Result<()> {
        match self.offset.checked_add(bytes) {
            Some(end) if end <= self.capacity => {
                self.offset = end;
                Ok(())
            }
            _ => Err(ModfileError::OutOfMemory {
                arena: self.kind,
                requested: bytes,
            }),
        }
    }

    /// Reserve room for `len` values of type `T`.
    pub fn alloc_array<T>(&mut self, len: usize) -> Result<()> {
        let bytes = size_of::<T>().checked_mul(len).ok_or(ModfileError::OutOfMemory {
            arena: self.kind,
            requested: usize::MAX,
        })?;
        self.alloc(bytes)
    }

    /// Copy `s` into a new owned string paid for by this arena.
    ///
    /// One extra byte is charged for the terminator the on-disk tools expect.
    pub fn alloc_str(&mut self, s: &str) -> Result<String> {
        self.alloc(s.len() + 1)?;
        Ok(s.to_owned())
    }

    /// The current offset, to be passed back to [`rewind`](Self::rewind).
    pub fn mark(&self) -> usize {
        self.offset
    }

    /// Release everything allocated after `mark`.
    pub fn rewind(&mut self, mark: usize) {
        debug_assert!(mark <= self.offset);
        self.offset = mark.min(self.offset);
    }

    #[cfg(test)]
    pub(crate) fn bytes_used(&self) -> usize {
        self.offset
    }

    #[cfg(test)]
    pub(crate) fn remaining(&self) -> usize {
        self.capacity - self.offset
    }
}

/// The allocation state for one invocation.
///
/// Pass the same context to every operation of a single command. Nothing
/// about it is global, so independent invocations (and tests) never share
/// budget.
#[derive(Debug, Clone)]
pub struct ParseContext {
    pub mem: Arena,
    pub scratch: Arena,
}

impl ParseContext {
    /// A context with [`DEFAULT_ARENA_CAPACITY`] bytes in each arena.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_ARENA_CAPACITY, DEFAULT_ARENA_CAPACITY)
    }

    pub fn with_capacity(mem: usize, scratch: usize) -> Self {
        Self {
            mem: Arena::with_capacity(ArenaKind::Mem, mem),
            scratch: Arena::with_capacity(ArenaKind::Scratch, scratch),
        }
    }
}

impl Default for ParseContext {
    fn default() -> Self {
        Self::new()
    }
}
