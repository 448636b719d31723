//! Platform-scoped flag storage.
//!
//! [`PlatformFlags`] maps a platform key (`linux`, `darwin`, ...) to the
//! ordered list of compiler flags declared for it. It is a 4-ary hash trie:
//! each node has four child slots, and a key descends by consuming two bits
//! of its FNV-1a hash per level until it reaches either its own node or an
//! empty slot. Keys that share a prefix of selectors are not merged, they
//! simply end up deeper.
//!
//! Nodes live in a single `Vec` and refer to their children by index. The
//! root (index 0) never carries a key.

use std::mem::size_of;

use serde::ser::{Serialize, Serializer};

use crate::arena::Arena;
use crate::error::Result;
use crate::hash::{fnv1a, Selectors};

/// An ordered, duplicate-preserving list of flags for one platform.
pub type FlagList = Vec<String>;

/// Index of a node in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(u32);

impl NodeId {
    const ROOT: NodeId = NodeId(0);

    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Default)]
struct Node {
    key: Option<String>,
    flags: FlagList,
    children: [Option<NodeId>; 4],
}

/// Where a lookup stopped.
enum Probe {
    Found(NodeId),
    /// The key is absent; it belongs in `slot` of `parent`.
    Vacant { parent: NodeId, slot: usize },
}

/// The hash-branching map from platform key to [`FlagList`].
#[derive(Debug, Clone)]
pub struct PlatformFlags {
    nodes: Vec<Node>,
}

impl PlatformFlags {
    /// An empty store: just the key-less root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }

    fn probe(&self, key: &str) -> Probe {
        let mut current = NodeId::ROOT;
        let mut selectors = Selectors::new(fnv1a(key));
        loop {
            let node = &self.nodes[current.index()];
            if node.key.as_deref() == Some(key) {
                return Probe::Found(current);
            }
            let slot = selectors.next().unwrap_or(0);
            match node.children[slot] {
                Some(child) => current = child,
                None => return Probe::Vacant { parent: current, slot },
            }
        }
    }

    /// Look up the flags for `key` without inserting.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        match self.probe(key) {
            Probe::Found(id) => Some(&self.nodes[id.index()].flags),
            Probe::Vacant { .. } => None,
        }
    }

    /// Fetch the flag list for `key`, creating an empty one if needed.
    ///
    /// A new node and its copy of `key` are charged to `mem`.
    pub fn entry(&mut self, mem: &mut Arena, key: &str) -> Result<&mut FlagList> {
        let id = match self.probe(key) {
            Probe::Found(id) => id,
            Probe::Vacant { parent, slot } => {
                mem.alloc_array::<Node>(1)?;
                let key = mem.alloc_str(key)?;
                let id = NodeId(self.nodes.len() as u32);
                self.nodes.push(Node {
                    key: Some(key),
                    ..Node::default()
                });
                self.nodes[parent.index()].children[slot] = Some(id);
                log::trace!("new platform node {:?} under {:?}[{slot}]", id, parent);
                id
            }
        };
        Ok(&mut self.nodes[id.index()].flags)
    }

    /// Append copies of `flags`, in order, to the list for `key`.
    pub fn extend(&mut self, mem: &mut Arena, key: &str, flags: &[&str]) -> Result<()> {
        let list = self.entry(mem, key)?;
        for flag in flags {
            push_flag(list, mem, flag)?;
        }
        Ok(())
    }

    /// Number of platform keys stored.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over `(key, flags)` in canonical order: pre-order, children
    /// visited by slot index 0 to 3.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            store: self,
            stack: vec![NodeId::ROOT],
        }
    }
}

impl Default for PlatformFlags {
    fn default() -> Self {
        Self::new()
    }
}

/// Append one flag, growing the list by doubling and charging each growth to `mem`.
fn push_flag(list: &mut FlagList, mem: &mut Arena, flag: &str) -> Result<()> {
    if list.len() == list.capacity() {
        let new_cap = (list.capacity() * 2).max(4);
        mem.alloc((new_cap - list.capacity()) * size_of::<String>())?;
        list.reserve_exact(new_cap - list.len());
    }
    let flag = mem.alloc_str(flag)?;
    list.push(flag);
    Ok(())
}

/// Pre-order iterator over a [`PlatformFlags`] store.
pub struct Iter<'a> {
    store: &'a PlatformFlags,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a [String]);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            let node = &self.store.nodes[id.index()];
            self.stack.extend(node.children.iter().rev().flatten());
            if let Some(key) = node.key.as_deref() {
                return Some((key, node.flags.as_slice()));
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a PlatformFlags {
    type Item = (&'a str, &'a [String]);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

#[derive(serde::Serialize)]
struct PlatformEntry<'a> {
    os: &'a str,
    flags: &'a [String],
}

impl Serialize for PlatformFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(|(os, flags)| PlatformEntry { os, flags }))
    }
}
