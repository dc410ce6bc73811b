//! The streaming descent cursor.

use super::node::NodeId;
use super::{Descent, SegmentTrie};

/// A cursor walking a [`SegmentTrie`] one name of a target path at a time.
///
/// Each call to [`next`](Iterator::next) consumes one name and classifies the
/// position it lands on. Between steps the caller may read the entry at the
/// position or its parent, and may [`set`](Descender::set) an entry, which
/// materializes the position if it does not exist yet.
///
/// Before the first step the cursor sits on the root.
///
/// # Examples
///
/// ```
/// use segpath::{Descent, SegmentTrie, UnixPath};
///
/// let mut trie = SegmentTrie::new();
/// let path = UnixPath::parse("/music/rock");
///
/// let mut descender = trie.descend(&path);
/// while let Some(step) = descender.next() {
///     if step.is_missing() {
///         let depth = descender.depth();
///         descender.set(depth);
///     }
/// }
///
/// assert_eq!(trie.get(&path), Some(&2));
/// ```
pub struct Descender<'a, E> {
    trie: &'a mut SegmentTrie<E>,
    names: &'a [String],
    depth: usize,
    /// Existing nodes from the root along the path; `chain[d]` is at depth `d`.
    chain: Vec<NodeId>,
}

impl<'a, E> Descender<'a, E> {
    pub(super) fn new(trie: &'a mut SegmentTrie<E>, names: &'a [String]) -> Self {
        Self {
            trie,
            names,
            depth: 0,
            chain: vec![NodeId::ROOT],
        }
    }

    /// Whether there are names left to consume.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.depth < self.names.len()
    }

    /// The number of names consumed so far.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The name consumed by the last step, or `None` before the first step.
    #[must_use]
    pub fn segment(&self) -> Option<&'a str> {
        let names: &'a [String] = self.names;
        self.depth.checked_sub(1).map(|i| names[i].as_str())
    }

    fn node_at(&self, depth: usize) -> Option<NodeId> {
        self.chain.get(depth).copied()
    }

    /// The entry at the current position, if the node exists and holds one.
    #[must_use]
    pub fn entry(&self) -> Option<&E> {
        let id = self.node_at(self.depth)?;
        self.trie.arena.node(id).entry.as_ref()
    }

    /// Mutable access to the entry at the current position.
    pub fn entry_mut(&mut self) -> Option<&mut E> {
        let id = self.node_at(self.depth)?;
        self.trie.arena.node_mut(id).entry.as_mut()
    }

    /// The entry one level above the current position.
    ///
    /// `None` before the first step, or when the parent has no entry.
    #[must_use]
    pub fn parent(&self) -> Option<&E> {
        let depth = self.depth.checked_sub(1)?;
        let id = self.node_at(depth)?;
        self.trie.arena.node(id).entry.as_ref()
    }

    /// Store `entry` at the current position and return the entry it
    /// replaced.
    ///
    /// A missing position is materialized together with any missing
    /// ancestors; ancestors created this way hold no entry.
    pub fn set(&mut self, entry: E) -> Option<E> {
        let missing = self.depth + 1 - self.chain.len();
        if missing > 0 {
            log::debug!(
                "materializing {missing} node(s) below depth {}",
                self.chain.len() - 1
            );
        }
        while self.chain.len() <= self.depth {
            let parent = self.chain[self.chain.len() - 1];
            let name = &self.names[self.chain.len() - 1];
            let id = self.trie.arena.child_or_insert(parent, name);
            self.chain.push(id);
        }

        let id = self.chain[self.depth];
        let previous = self.trie.arena.node_mut(id).entry.replace(entry);
        if previous.is_none() {
            self.trie.len += 1;
        }
        previous
    }
}

impl<E> Iterator for Descender<'_, E> {
    type Item = Descent;

    fn next(&mut self) -> Option<Descent> {
        let name = self.names.get(self.depth)?;

        // Only extend the chain while it reaches the current position.
        if self.chain.len() == self.depth + 1 {
            let current = self.chain[self.depth];
            if let Some(child) = self.trie.arena.child(current, name) {
                self.chain.push(child);
            }
        }
        self.depth += 1;

        let exists = self.chain.len() > self.depth;
        let last = self.depth == self.names.len();
        let step = match (exists, last) {
            (true, false) => Descent::Directory,
            (false, false) => Descent::MissingDirectory,
            (true, true) => Descent::File,
            (false, true) => Descent::MissingFile,
        };
        log::trace!("descend {name:?} at depth {}: {step:?}", self.depth);
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.names.len() - self.depth;
        (remaining, Some(remaining))
    }
}

impl<E> ExactSizeIterator for Descender<'_, E> {}
