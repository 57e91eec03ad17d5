//! Bundle data model
//!
//! A [`Bundle`] wraps one [`Tree`] under a root key. Trees keep their
//! entries in insertion order, which the builder fills in sorted order, so
//! serialization reproduces that order exactly.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Default top-level key of a bundle
pub const DEFAULT_ROOT_KEY: &str = "components";

/// Base64 encoded file content
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct FileBlob(String);

impl FileBlob {
    /// Encode raw file bytes
    pub fn encode(bytes: &[u8]) -> Self {
        Self(BASE64.encode(bytes))
    }

    #[allow(dead_code)]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A directory entry in the bundle
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum Node {
    Directory(Tree),
    File(FileBlob),
}

/// Ordered mapping of entry names to nodes for one directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: Vec<(String, Node)>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, or replace the node of an existing entry with the
    /// same name in place. Returns the replaced node.
    ///
    /// New entries serialize in insertion order.
    pub fn insert(&mut self, name: impl Into<String>, node: Node) -> Option<Node> {
        let name = name.into();
        match self.entries.iter_mut().find(|(entry, _)| *entry == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, node)),
            None => {
                self.entries.push((name, node));
                None
            }
        }
    }

    #[allow(dead_code)]
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, node)| node)
    }

    /// Look up a node by a `/` separated relative path.
    #[allow(dead_code)]
    pub fn get_path(&self, path: &str) -> Option<&Node> {
        let mut parts = path.split('/');
        let mut node = self.get(parts.next()?)?;
        for part in parts {
            match node {
                Node::Directory(tree) => node = tree.get(part)?,
                Node::File(_) => return None,
            }
        }
        Some(node)
    }

    #[allow(dead_code)]
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of files at any depth
    pub fn file_count(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, node)| match node {
                Node::Directory(tree) => tree.file_count(),
                Node::File(_) => 1,
            })
            .sum()
    }
}

impl Serialize for Tree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, node) in &self.entries {
            map.serialize_entry(name, node)?;
        }
        map.end()
    }
}

/// The complete document written by a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    root_key: String,
    tree: Tree,
}

impl Bundle {
    pub fn new(root_key: impl Into<String>, tree: Tree) -> Self {
        Self {
            root_key: root_key.into(),
            tree,
        }
    }

    pub fn root_key(&self) -> &str {
        &self.root_key
    }
}

impl Serialize for Bundle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.root_key, &self.tree)?;
        map.end()
    }
}
