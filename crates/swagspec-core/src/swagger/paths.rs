//! Paths container.

use serde::ser::SerializeMap as _;

use super::{
    PathItem,
    extensions::Extensions,
    fragment::{FragmentVisitor, KeyedFragment},
    key::{KeyClass, classify_path_key},
    lookup::{JsonLookup, Node, NodeMut, NotFound},
    map::Map,
};

/// Holds the relative paths to the individual endpoints of an API.
///
/// Each path is appended to the document `basePath` to build the full URL. Every entry key
/// starts with `/`; keys starting with `x-` (any case) are vendor extensions; any other key is
/// dropped on decode.
///
/// The paths may be empty, for example when access control filters every endpoint out.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paths {
    /// Path items by path, such as `/pets/{id}`.
    pub paths: Map<String, PathItem>,

    /// Extension properties.
    pub extensions: Extensions,
}

impl Paths {
    /// Creates a new empty paths container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a path item.
    pub fn path(mut self, path: impl Into<String>, item: PathItem) -> Self {
        self.paths.insert(path.into(), item);
        self
    }

    /// Adds an extension property.
    pub fn extension(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extensions.insert(key.into(), value);
        self
    }

    /// Returns `true` if the container has neither paths nor extensions.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.extensions.is_empty()
    }

    /// The path entries that are written on encode. Keys not starting with `/` are skipped.
    fn encodable_paths(&self) -> impl Iterator<Item = (&String, &PathItem)> {
        self.paths.iter().filter(|(path, _)| path.starts_with('/'))
    }
}

impl KeyedFragment for Paths {
    type Key = ();
    type Entry = PathItem;

    const EXPECTING: &'static str = "a paths object or null";

    fn classify(key: &str) -> KeyClass<()> {
        classify_path_key(key)
    }

    fn insert_entry(&mut self, raw: String, _key: (), entry: PathItem) {
        self.paths.insert(raw, entry);
    }

    fn extensions_mut(&mut self) -> &mut Extensions {
        &mut self.extensions
    }

    fn encode_parts(&self) -> Result<[Vec<u8>; 2], serde_json::Error> {
        let extensions = serde_json::to_vec(&self.extensions)?;
        let paths = serde_json::to_vec(&EncodablePaths(self))?;
        Ok([extensions, paths])
    }
}

/// Serializes the encodable path entries of a [`Paths`] as one object.
struct EncodablePaths<'a>(&'a Paths);

impl serde::Serialize for EncodablePaths<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.encodable_paths())
    }
}

impl serde::Serialize for Paths {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in &self.extensions {
            map.serialize_entry(key, value)?;
        }
        for (path, item) in self.encodable_paths() {
            map.serialize_entry(path, item)?;
        }
        map.end()
    }
}

impl<'de> serde::Deserialize<'de> for Paths {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FragmentVisitor::<Self>::new())
    }
}

impl JsonLookup for Paths {
    fn json_lookup(&self, token: &str) -> Result<Node<'_>, NotFound> {
        if let Some(item) = self.paths.get(token) {
            return Ok(Node::PathItem(item));
        }
        if let Some(value) = self.extensions.get(token) {
            return Ok(Node::Extension(value));
        }
        Err(NotFound(token.to_owned()))
    }

    fn json_lookup_mut(&mut self, token: &str) -> Result<NodeMut<'_>, NotFound> {
        if let Some(item) = self.paths.get_mut(token) {
            return Ok(NodeMut::PathItem(item));
        }
        if let Some(value) = self.extensions.get_mut(token) {
            return Ok(NodeMut::Extension(value));
        }
        Err(NotFound(token.to_owned()))
    }
}
