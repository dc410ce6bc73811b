//! Tree grants over mounted stores.
//!
//! A [`GrantIndex`] answers the question "which persisted tree grant, if any,
//! lets me write to this path?" in one walk from the root. It keeps a
//! [`SegmentTrie`] whose nodes are materialized only along store private
//! directories and granted trees.
//!
//! Grants are identified by tree document ids of the form
//! `"<store name>:<path relative to the store root>"`.
//!
//! # Examples
//!
//! ```
//! use segpath::grant::{Coverage, Grant, GrantIndex, Store};
//! use segpath::UnixPath;
//!
//! let mut index = GrantIndex::new([
//!     Store::new("primary", UnixPath::parse("/storage/emulated/0")).primary(),
//!     Store::new("1234-ABCD", UnixPath::parse("/storage/1234-ABCD")),
//! ])
//! .unwrap();
//! index.add_grant(Grant::read_write("1234-ABCD:Music")).unwrap();
//!
//! let song = UnixPath::parse("/storage/1234-ABCD/Music/rock/a.mp3");
//! assert!(matches!(index.coverage(&song).unwrap(), Coverage::Granted(_)));
//! assert_eq!(
//!     index.document_id(&song).unwrap().as_deref(),
//!     Some("1234-ABCD:Music/rock/a.mp3")
//! );
//! ```

use std::collections::HashMap;

use serde::Serialize;

use crate::config::schema::split_document_id;
use crate::config::{Config, ConfigValidator};
use crate::error::{Error, Result};
use crate::path::UnixPath;
use crate::trie::{Descent, SegmentTrie};

/// A mounted storage volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Store {
    /// Store name; the prefix of its document ids.
    pub name: String,
    /// Absolute mount point.
    pub root: UnixPath,
    /// Whether this is the primary (built-in) store. Paths on the primary
    /// store never map to a document id.
    pub primary: bool,
}

impl Store {
    /// A non-primary store.
    #[must_use]
    pub fn new(name: &str, root: UnixPath) -> Self {
        Self {
            name: name.to_string(),
            root,
            primary: false,
        }
    }

    /// Mark the store as primary.
    #[must_use]
    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }
}

/// A persisted tree grant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grant {
    /// Tree document id, `"<store>:<relative path>"`.
    pub tree: String,
    /// Read access.
    pub read: bool,
    /// Write access.
    pub write: bool,
}

impl Grant {
    /// A grant with both read and write access.
    #[must_use]
    pub fn read_write(tree: &str) -> Self {
        Self {
            tree: tree.to_string(),
            read: true,
            write: true,
        }
    }

    /// Whether the grant allows both reading and writing.
    #[must_use]
    pub fn is_read_write(&self) -> bool {
        self.read && self.write
    }
}

impl From<&crate::config::GrantConfig> for Grant {
    fn from(config: &crate::config::GrantConfig) -> Self {
        Self {
            tree: config.tree.clone(),
            read: config.read,
            write: config.write,
        }
    }
}

/// The payload stored at each materialized trie node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrantEntry {
    /// Absolute path of the node.
    pub path: UnixPath,
    /// Name of the store that created the node, or that last anchored a
    /// grant or unprotected mark on it.
    pub store: Option<String>,
    /// The grant anchored at this node, if any.
    pub grant: Option<Grant>,
    /// Whether this subtree needs no grant at all.
    pub unprotected: bool,
}

impl GrantEntry {
    fn intermediate(path: UnixPath, store: &str) -> Self {
        Self {
            path,
            store: Some(store.to_string()),
            grant: None,
            unprotected: false,
        }
    }
}

/// What governs access to a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage<'a> {
    /// The path lies in an unprotected subtree.
    Unprotected,
    /// The root-closest read and write grant covering the path.
    Granted(&'a GrantEntry),
    /// Nothing covers the path.
    Uncovered,
}

/// Stores and tree grants, indexed by path.
///
/// The index is owned by the caller. After a storage mount change, call
/// [`invalidate`](GrantIndex::invalidate) and register stores and grants
/// again.
#[derive(Debug, Clone)]
pub struct GrantIndex {
    stores: HashMap<String, Store>,
    trie: SegmentTrie<GrantEntry>,
}

impl GrantIndex {
    /// Create an index over `stores` with no grants.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error if a store root is not absolute.
    pub fn new<I>(stores: I) -> Result<Self>
    where
        I: IntoIterator<Item = Store>,
    {
        let mut index = Self {
            stores: HashMap::new(),
            trie: Self::empty_trie(),
        };
        for store in stores {
            index.add_store(store)?;
        }
        Ok(index)
    }

    /// Build an index from a validated grant table.
    ///
    /// The private directory is marked unprotected under every store.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the configuration is inconsistent.
    pub fn from_config(config: &Config) -> Result<Self> {
        ConfigValidator::validate(config)?;

        let mut index = Self::new(config.stores.iter().map(|store| Store {
            name: store.name.clone(),
            root: UnixPath::parse(&store.root),
            primary: store.primary,
        }))?;

        if let Some(ref private_dir) = config.private_dir {
            let relative = UnixPath::parse(private_dir);
            for store in &config.stores {
                index.mark_unprotected(&store.name, &relative)?;
            }
        }
        for grant in &config.grants {
            index.add_grant(Grant::from(grant))?;
        }
        Ok(index)
    }

    fn empty_trie() -> SegmentTrie<GrantEntry> {
        SegmentTrie::with_root(GrantEntry {
            path: UnixPath::root(),
            store: None,
            grant: None,
            unprotected: false,
        })
    }

    /// Register a store, replacing any store of the same name.
    ///
    /// The root is normalized on registration.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error if the root is not absolute.
    pub fn add_store(&mut self, mut store: Store) -> Result<Option<Store>> {
        if !store.root.is_absolute() {
            return Err(Error::invalid_argument(format!(
                "store {} has a relative root {:?}",
                store.name,
                store.root.to_string()
            )));
        }
        store.root = store.root.normalize();
        log::debug!("registering store {} at {}", store.name, store.root);
        Ok(self.stores.insert(store.name.clone(), store))
    }

    /// The store called `name`.
    #[must_use]
    pub fn store(&self, name: &str) -> Option<&Store> {
        self.stores.get(name)
    }

    /// All registered stores, in no particular order.
    pub fn stores(&self) -> impl Iterator<Item = &Store> {
        self.stores.values()
    }

    /// The number of materialized entries, the root included.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.trie.len()
    }

    fn require_store(&self, name: &str) -> Result<&Store> {
        self.stores.get(name).ok_or_else(|| Error::NotFound {
            resource: format!("store {name}"),
        })
    }

    /// The normalized path `relative` names under the root of `store`.
    fn within_store(&self, store: &str, relative: &UnixPath) -> Result<UnixPath> {
        let root = &self.require_store(store)?.root;
        if relative.is_absolute() {
            return Err(Error::invalid_argument(format!(
                "path {:?} in store {store} must be relative",
                relative.to_string()
            )));
        }
        let reduced = relative.normalize();
        if reduced.segments().first().is_some_and(|name| name == "..") {
            return Err(Error::invalid_argument(format!(
                "path {:?} leaves the root of store {store}",
                relative.to_string()
            )));
        }
        Ok(root.resolve(&reduced).normalize())
    }

    /// Mark `relative` under the store's root as needing no grant.
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown store, and an
    /// invalid-argument error if `relative` is absolute or climbs above the
    /// store root.
    pub fn mark_unprotected(&mut self, store: &str, relative: &UnixPath) -> Result<()> {
        let path = self.within_store(store, relative)?;
        self.anchor(&path, store, |entry| entry.unprotected = true);
        Ok(())
    }

    /// Record a persisted tree grant.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error if the tree id is malformed or its
    /// path leaves the store, and a not-found error if it names an unknown
    /// store.
    pub fn add_grant(&mut self, grant: Grant) -> Result<()> {
        let (store, relative) = split_id(&grant.tree)?;
        let path = self.within_store(store, &UnixPath::parse(relative))?;
        let store = store.to_string();
        log::debug!("granting {} at {}", grant.tree, path);
        self.anchor(&path, &store, move |entry| entry.grant = Some(grant));
        Ok(())
    }

    /// Walk to `path`, creating intermediate entries on the way, and apply
    /// `update` to the entry at `path`, which is then owned by `store`.
    fn anchor<F>(&mut self, path: &UnixPath, store: &str, update: F)
    where
        F: FnOnce(&mut GrantEntry),
    {
        // The root has no descent steps.
        if path.segments().is_empty() {
            if let Some(entry) = self.trie.get_mut(path) {
                entry.store = Some(store.to_string());
                update(entry);
            }
            return;
        }

        let mut update = Some(update);
        let mut descender = self.trie.descend(path);
        while let Some(step) = descender.next() {
            let depth = descender.depth();
            match step {
                Descent::MissingDirectory => {
                    descender.set(GrantEntry::intermediate(prefix(path, depth), store));
                }
                Descent::MissingFile => {
                    let mut entry = GrantEntry::intermediate(path.clone(), store);
                    if let Some(update) = update.take() {
                        update(&mut entry);
                    }
                    descender.set(entry);
                }
                Descent::File => {
                    if let (Some(entry), Some(update)) = (descender.entry_mut(), update.take()) {
                        entry.store = Some(store.to_string());
                        update(entry);
                    }
                }
                Descent::Directory => {}
            }
        }
    }

    /// What governs access to `path`.
    ///
    /// Walking from the root, an unprotected entry anywhere on the path wins.
    /// Otherwise the root-closest entry holding a read and write grant
    /// covers the path. `path` is normalized first.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error if `path` is relative.
    pub fn coverage(&self, path: &UnixPath) -> Result<Coverage<'_>> {
        Self::require_absolute(path)?;

        let path = path.normalize();
        let mut shortest = None;
        for (_, entry) in self.trie.entries_along(&path) {
            if entry.unprotected {
                return Ok(Coverage::Unprotected);
            }
            if shortest.is_none() && entry.grant.as_ref().is_some_and(Grant::is_read_write) {
                shortest = Some(entry);
            }
        }
        Ok(shortest.map_or(Coverage::Uncovered, Coverage::Granted))
    }

    /// The document id addressing `path` through its covering grant.
    ///
    /// `None` when the path is unprotected, uncovered, or covered by a grant
    /// on the primary store.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error if `path` is relative.
    pub fn document_id(&self, path: &UnixPath) -> Result<Option<String>> {
        let Coverage::Granted(entry) = self.coverage(path)? else {
            return Ok(None);
        };
        let owner = entry
            .grant
            .as_ref()
            .and_then(|grant| split_document_id(&grant.tree))
            .map(|(store, _)| store);
        let Some(store) = owner.and_then(|name| self.store(name)) else {
            return Ok(None);
        };
        if store.primary {
            return Ok(None);
        }
        let relative = store.root.relativize(path)?;
        Ok(Some(format!("{}:{}", store.name, relative)))
    }

    /// The absolute path a document id refers to.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error if the id has no `:` or its path is
    /// absolute or climbs above the store root, and a not-found error if it
    /// names an unknown store.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::grant::{GrantIndex, Store};
    /// use segpath::UnixPath;
    ///
    /// let index = GrantIndex::new([Store::new("sd", UnixPath::parse("/storage/sd"))]).unwrap();
    /// let path = index.resolve_document_id("sd:Music/a.mp3").unwrap();
    /// assert_eq!(path.to_string(), "/storage/sd/Music/a.mp3");
    /// assert!(index.resolve_document_id("usb:Music").is_err());
    /// assert!(index.resolve_document_id("sd:/Music").is_err());
    /// ```
    pub fn resolve_document_id(&self, id: &str) -> Result<UnixPath> {
        let (store, relative) = split_id(id)?;
        self.within_store(store, &UnixPath::parse(relative))
    }

    /// Forget every store, grant and unprotected mark.
    pub fn invalidate(&mut self) {
        log::debug!(
            "invalidating grant index ({} stores, {} entries)",
            self.stores.len(),
            self.trie.len()
        );
        self.stores.clear();
        self.trie = Self::empty_trie();
    }

    fn require_absolute(path: &UnixPath) -> Result<()> {
        if path.is_absolute() {
            Ok(())
        } else {
            Err(Error::invalid_argument(format!(
                "path must be absolute: {:?}",
                path.to_string()
            )))
        }
    }
}

fn split_id(id: &str) -> Result<(&str, &str)> {
    split_document_id(id)
        .ok_or_else(|| Error::invalid_argument(format!("malformed document id {id:?}")))
}

/// The absolute path made of the first `depth` names of `path`.
fn prefix(path: &UnixPath, depth: usize) -> UnixPath {
    UnixPath::from_names(true, path.segments()[..depth].to_vec())
}
