//! A prefix tree keyed by path names.
//!
//! [`SegmentTrie`] attaches caller-supplied entries to path prefixes. Nodes
//! are materialized lazily, only along prefixes a caller actually stores
//! something at, so most of the namespace never costs anything.
//!
//! The main way in is [`SegmentTrie::descend`], which yields a [`Descender`]
//! cursor. One pass of the cursor over a path discovers how far the indexed
//! prefix reaches, lets the caller extend the trie exactly where needed, and
//! lets the caller carry "best so far" state down the path.
//!
//! Keys are the names of a [`UnixPath`]; whether the path is absolute is
//! ignored, so `/a/b` and `a/b` share a node. The empty path `""` and the root
//! `/` both address the root node.
//!
//! # Examples
//!
//! ```
//! use segpath::{Descent, SegmentTrie, UnixPath};
//!
//! let mut trie = SegmentTrie::new();
//! trie.insert(&UnixPath::parse("/a/b"), "granted");
//!
//! let path = UnixPath::parse("/a/b/c");
//! let mut descender = trie.descend(&path);
//! assert_eq!(descender.next(), Some(Descent::Directory));
//! assert_eq!(descender.next(), Some(Descent::Directory));
//! assert_eq!(descender.next(), Some(Descent::MissingFile));
//! assert_eq!(descender.parent(), Some(&"granted"));
//! ```
//!
//! # Concurrency
//!
//! Reads take `&self` and mutation takes `&mut self`; share a trie between
//! threads behind a lock such as `RwLock`.

mod descender;
mod node;

pub use descender::Descender;

use crate::path::UnixPath;
use node::{Arena, NodeId};

/// Classification of the position a descent step lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Descent {
    /// An intermediate name whose node exists.
    Directory,
    /// An intermediate name with no node yet.
    MissingDirectory,
    /// The final name, whose node exists.
    File,
    /// The final name, with no node yet.
    MissingFile,
}

impl Descent {
    /// Whether the position has not been materialized.
    #[must_use]
    pub fn is_missing(self) -> bool {
        matches!(self, Self::MissingDirectory | Self::MissingFile)
    }

    /// Whether this is the final name of the path.
    #[must_use]
    pub fn is_last(self) -> bool {
        matches!(self, Self::File | Self::MissingFile)
    }
}

/// A prefix tree mapping path prefixes to entries.
#[derive(Debug, Clone)]
pub struct SegmentTrie<E> {
    arena: Arena<E>,
    len: usize,
}

impl<E> SegmentTrie<E> {
    /// Create an empty trie whose root holds no entry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            arena: Arena::new(None),
            len: 0,
        }
    }

    /// Create a trie whose root holds `entry`.
    #[must_use]
    pub fn with_root(entry: E) -> Self {
        Self {
            arena: Arena::new(Some(entry)),
            len: 1,
        }
    }

    /// The entry at the root.
    #[must_use]
    pub fn root_entry(&self) -> Option<&E> {
        self.arena.node(NodeId::ROOT).entry.as_ref()
    }

    /// The number of entries stored. Nodes that only exist to reach deeper
    /// entries are not counted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no entry is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of materialized nodes, the root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.arena.node_count()
    }

    /// The entry stored exactly at `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::{SegmentTrie, UnixPath};
    ///
    /// let mut trie = SegmentTrie::new();
    /// trie.insert(&UnixPath::parse("/a/b"), 1);
    /// assert_eq!(trie.get(&UnixPath::parse("a/b")), Some(&1));
    /// assert_eq!(trie.get(&UnixPath::parse("/a")), None);
    /// ```
    #[must_use]
    pub fn get(&self, path: &UnixPath) -> Option<&E> {
        let id = self.arena.lookup(path.segments())?;
        self.arena.node(id).entry.as_ref()
    }

    /// Mutable access to the entry stored exactly at `path`.
    pub fn get_mut(&mut self, path: &UnixPath) -> Option<&mut E> {
        let id = self.arena.lookup(path.segments())?;
        self.arena.node_mut(id).entry.as_mut()
    }

    /// Whether an entry is stored exactly at `path`.
    #[must_use]
    pub fn contains(&self, path: &UnixPath) -> bool {
        self.get(path).is_some()
    }

    /// Store `entry` at `path`, materializing any missing nodes, and return
    /// the entry it replaced.
    pub fn insert(&mut self, path: &UnixPath, entry: E) -> Option<E> {
        let mut descender = self.descend(path);
        descender.by_ref().for_each(drop);
        descender.set(entry)
    }

    /// Remove every node and entry, the root entry included.
    pub fn clear(&mut self) {
        log::debug!("clearing trie of {} entries", self.len);
        self.arena.reset();
        self.len = 0;
    }

    /// Walk from the root towards `path`, yielding each existing entry with
    /// its depth (the number of names above it).
    ///
    /// The walk stops where the materialized prefix ends.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::{SegmentTrie, UnixPath};
    ///
    /// let mut trie = SegmentTrie::with_root("root");
    /// trie.insert(&UnixPath::parse("/a"), "a");
    /// trie.insert(&UnixPath::parse("/a/b/c"), "c");
    ///
    /// let along: Vec<_> = trie.entries_along(&UnixPath::parse("/a/b/c/d")).collect();
    /// assert_eq!(along, [(0, &"root"), (1, &"a"), (3, &"c")]);
    /// ```
    pub fn entries_along<'a, 'p>(&'a self, path: &'p UnixPath) -> EntriesAlong<'a, 'p, E> {
        EntriesAlong {
            trie: self,
            names: path.segments(),
            depth: 0,
            current: Some(NodeId::ROOT),
        }
    }

    /// The root-closest entry on the way to `path` that satisfies
    /// `predicate`, with its depth.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::{SegmentTrie, UnixPath};
    ///
    /// let mut trie = SegmentTrie::new();
    /// trie.insert(&UnixPath::parse("/a"), false);
    /// trie.insert(&UnixPath::parse("/a/b"), true);
    /// trie.insert(&UnixPath::parse("/a/b/c"), true);
    ///
    /// let found = trie.find_shortest(&UnixPath::parse("/a/b/c/d"), |granted| *granted);
    /// assert_eq!(found, Some((2, &true)));
    /// ```
    pub fn find_shortest<'a, P>(
        &'a self,
        path: &UnixPath,
        mut predicate: P,
    ) -> Option<(usize, &'a E)>
    where
        P: FnMut(&E) -> bool,
    {
        self.entries_along(path).find(|&(_, entry)| predicate(entry))
    }

    /// Start a descent along `path`.
    ///
    /// See [`Descender`] for the cursor operations.
    pub fn descend<'a>(&'a mut self, path: &'a UnixPath) -> Descender<'a, E> {
        Descender::new(self, path.segments())
    }
}

impl<E> Default for SegmentTrie<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator returned by [`SegmentTrie::entries_along`].
pub struct EntriesAlong<'a, 'p, E> {
    trie: &'a SegmentTrie<E>,
    names: &'p [String],
    depth: usize,
    current: Option<NodeId>,
}

impl<'a, E> Iterator for EntriesAlong<'a, '_, E> {
    type Item = (usize, &'a E);

    fn next(&mut self) -> Option<Self::Item> {
        let trie: &'a SegmentTrie<E> = self.trie;
        let arena = &trie.arena;
        loop {
            let id = self.current?;
            let depth = self.depth;
            self.current = self
                .names
                .get(depth)
                .and_then(|name| arena.child(id, name));
            self.depth += 1;
            if let Some(entry) = arena.node(id).entry.as_ref() {
                return Some((depth, entry));
            }
        }
    }
}
