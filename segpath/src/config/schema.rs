//! Configuration schema definitions.
//!
//! A grant table describes the mounted stores, the app-private directory
//! that needs no grant, and the persisted tree grants.

use serde::{Deserialize, Deserializer, Serialize};

/// Complete grant table configuration.
///
/// # Examples
///
/// ```
/// use segpath::config::{Config, GrantConfig, StoreConfig};
///
/// let config = Config {
///     stores: vec![StoreConfig {
///         name: "1234-ABCD".to_string(),
///         root: "/storage/1234-ABCD".to_string(),
///         primary: false,
///     }],
///     grants: vec![GrantConfig::read_write("1234-ABCD:Music")],
///     ..Default::default()
/// };
/// assert_eq!(config.stores.len(), 1);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// App-private directory, relative to every store root. Paths inside it
    /// never need a grant.
    pub private_dir: Option<String>,

    /// Mounted stores.
    #[serde(default)]
    pub stores: Vec<StoreConfig>,

    /// Persisted tree grants.
    #[serde(default)]
    pub grants: Vec<GrantConfig>,
}

/// A mounted storage volume.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Store name; the prefix of document ids within the store.
    pub name: String,

    /// Absolute mount point of the store.
    pub root: String,

    /// Whether this is the primary (built-in) store.
    #[serde(default)]
    pub primary: bool,
}

/// A persisted tree grant.
///
/// In YAML a grant is either a mapping or a bare `"store:path"` string, which
/// is shorthand for a read and write grant.
///
/// # Examples
///
/// ```
/// use segpath::config::GrantConfig;
///
/// let short: GrantConfig = serde_yaml::from_str(r#""sd:Music""#).unwrap();
/// assert_eq!(short, GrantConfig::read_write("sd:Music"));
///
/// let long: GrantConfig = serde_yaml::from_str("tree: sd:Music\nread: true").unwrap();
/// assert!(long.read && !long.write);
/// ```
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GrantConfig {
    /// Tree document id, `"<store>:<path relative to the store root>"`.
    pub tree: String,

    /// Read access.
    pub read: bool,

    /// Write access.
    pub write: bool,
}

impl GrantConfig {
    /// A grant with both read and write access.
    #[must_use]
    pub fn read_write(tree: &str) -> Self {
        Self {
            tree: tree.to_string(),
            read: true,
            write: true,
        }
    }
}

impl<'de> Deserialize<'de> for GrantConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct Full {
            tree: String,
            #[serde(default)]
            read: bool,
            #[serde(default)]
            write: bool,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Helper {
            Tree(String),
            Full(Full),
        }

        match Helper::deserialize(deserializer)? {
            Helper::Tree(tree) => Ok(Self::read_write(&tree)),
            Helper::Full(Full { tree, read, write }) => Ok(Self { tree, read, write }),
        }
    }
}

/// Split a tree document id into its store name and relative path.
///
/// Returns `None` when the id has no `:`.
///
/// # Examples
///
/// ```
/// use segpath::config::schema::split_document_id;
///
/// assert_eq!(split_document_id("sd:Music/Rock"), Some(("sd", "Music/Rock")));
/// assert_eq!(split_document_id("sd:"), Some(("sd", "")));
/// assert_eq!(split_document_id("Music"), None);
/// ```
#[must_use]
pub fn split_document_id(id: &str) -> Option<(&str, &str)> {
    id.split_once(':')
}
