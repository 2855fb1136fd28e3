//! Path item entity.

use super::{
    Operation,
    extensions::{Extensions, deserialize_extensions},
};

/// Describes the operations available on a single path.
///
/// Path items are the entry values of a [`Paths`](super::Paths) object.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct PathItem {
    /// A reference to a path item defined elsewhere.
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub ref_path: Option<String>,

    /// The GET operation on this path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,

    /// The PUT operation on this path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,

    /// The POST operation on this path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,

    /// The DELETE operation on this path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,

    /// The OPTIONS operation on this path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Operation>,

    /// The HEAD operation on this path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<Operation>,

    /// The PATCH operation on this path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,

    /// Parameters shared by all operations on this path, kept as raw JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<serde_json::Value>>,

    /// Extension properties. Unknown keys without the `x-` prefix are dropped on decode.
    #[serde(flatten, deserialize_with = "deserialize_extensions")]
    pub extensions: Extensions,
}

impl PathItem {
    /// Creates a new empty path item.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reference path.
    pub fn ref_path(mut self, ref_path: impl Into<String>) -> Self {
        self.ref_path = Some(ref_path.into());
        self
    }

    /// Sets the GET operation.
    pub fn get(mut self, operation: Operation) -> Self {
        self.get = Some(operation);
        self
    }

    /// Sets the PUT operation.
    pub fn put(mut self, operation: Operation) -> Self {
        self.put = Some(operation);
        self
    }

    /// Sets the POST operation.
    pub fn post(mut self, operation: Operation) -> Self {
        self.post = Some(operation);
        self
    }

    /// Sets the DELETE operation.
    pub fn delete(mut self, operation: Operation) -> Self {
        self.delete = Some(operation);
        self
    }

    /// Sets the OPTIONS operation.
    pub fn options(mut self, operation: Operation) -> Self {
        self.options = Some(operation);
        self
    }

    /// Sets the HEAD operation.
    pub fn head(mut self, operation: Operation) -> Self {
        self.head = Some(operation);
        self
    }

    /// Sets the PATCH operation.
    pub fn patch(mut self, operation: Operation) -> Self {
        self.patch = Some(operation);
        self
    }

    /// Sets the shared parameters.
    pub fn parameters(mut self, parameters: Vec<serde_json::Value>) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Sets the extensions for the path item.
    pub fn extensions(mut self, extensions: Extensions) -> Self {
        self.extensions = extensions;
        self
    }
}
