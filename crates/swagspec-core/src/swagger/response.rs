//! Response entity.

use super::{
    extensions::{Extensions, deserialize_extensions},
    map::Map,
};

/// Describes a single response from an API operation.
///
/// Responses are the entry values of a [`Responses`](super::Responses) object, keyed by HTTP
/// status code or by `default`.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Response {
    /// A short description of the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The structure of the response body, kept as raw JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<serde_json::Value>,

    /// Headers sent with the response, by header name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Map<String, serde_json::Value>>,

    /// Example response bodies, by MIME type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Map<String, serde_json::Value>>,

    /// Extension properties. Unknown keys without the `x-` prefix are dropped on decode.
    #[serde(flatten, deserialize_with = "deserialize_extensions")]
    pub extensions: Extensions,
}

impl Response {
    /// Creates a new empty response.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the description for the response.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the schema of the response body.
    pub fn schema(mut self, schema: serde_json::Value) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Sets the response headers.
    pub fn headers(mut self, headers: Map<String, serde_json::Value>) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Sets the examples.
    pub fn examples(mut self, examples: Map<String, serde_json::Value>) -> Self {
        self.examples = Some(examples);
        self
    }

    /// Sets the extensions for the response.
    pub fn extensions(mut self, extensions: Extensions) -> Self {
        self.extensions = extensions;
        self
    }
}
