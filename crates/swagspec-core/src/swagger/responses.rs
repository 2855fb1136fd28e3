//! Responses container.

use std::collections::BTreeMap;

use serde::ser::SerializeMap as _;

use super::{
    Response,
    extensions::Extensions,
    fragment::{FragmentVisitor, KeyedFragment},
    key::{KeyClass, ResponseKey, classify_response_key, parse_status_code},
    lookup::{JsonLookup, Node, NodeMut, NotFound},
    map::Map,
};

/// The expected responses of an operation.
///
/// The container maps HTTP status codes to the expected response. It is not required to cover
/// every possible status code, but it should cover the successful response and any known errors.
/// The `default` response stands for every status code not covered individually.
///
/// On decode, `default` and canonical status code keys are entries, `x-` keys (any case) are
/// vendor extensions, and any other key is dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Responses {
    /// The keyed responses.
    pub props: ResponsesProps,

    /// Extension properties.
    pub extensions: Extensions,
}

/// The keyed half of a [`Responses`] object: the default response and the responses by status
/// code.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResponsesProps {
    /// The response for every status code without a dedicated entry.
    pub default: Option<Response>,

    /// Responses by HTTP status code.
    pub status_code_responses: Map<u64, Response>,
}

impl ResponsesProps {
    /// Returns `true` if there is neither a default response nor a status code response.
    pub fn is_empty(&self) -> bool {
        self.default.is_none() && self.status_code_responses.is_empty()
    }

    /// The entries keyed by their wire form, in the order they are encoded.
    fn keyed_entries(&self) -> BTreeMap<String, &Response> {
        let default = self
            .default
            .as_ref()
            .map(|response| (ResponseKey::Default.to_string(), response));
        let by_status = self
            .status_code_responses
            .iter()
            .map(|(code, response)| (ResponseKey::StatusCode(*code).to_string(), response));
        default.into_iter().chain(by_status).collect()
    }
}

impl serde::Serialize for ResponsesProps {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.keyed_entries())
    }
}

impl Responses {
    /// Creates a new empty responses container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default response.
    pub fn default_response(mut self, response: Response) -> Self {
        self.props.default = Some(response);
        self
    }

    /// Adds a response for a status code.
    pub fn status_code(mut self, code: u64, response: Response) -> Self {
        self.props.status_code_responses.insert(code, response);
        self
    }

    /// Adds an extension property.
    pub fn extension(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extensions.insert(key.into(), value);
        self
    }

    /// Returns `true` if the container has no responses and no extensions.
    pub fn is_empty(&self) -> bool {
        self.props.is_empty() && self.extensions.is_empty()
    }
}

impl KeyedFragment for Responses {
    type Key = ResponseKey;
    type Entry = Response;

    const EXPECTING: &'static str = "a responses object or null";

    fn classify(key: &str) -> KeyClass<ResponseKey> {
        classify_response_key(key)
    }

    fn insert_entry(&mut self, _raw: String, key: ResponseKey, entry: Response) {
        match key {
            ResponseKey::Default => self.props.default = Some(entry),
            ResponseKey::StatusCode(code) => {
                self.props.status_code_responses.insert(code, entry);
            }
        }
    }

    fn extensions_mut(&mut self) -> &mut Extensions {
        &mut self.extensions
    }

    fn encode_parts(&self) -> Result<[Vec<u8>; 2], serde_json::Error> {
        let props = serde_json::to_vec(&self.props)?;
        let extensions = serde_json::to_vec(&self.extensions)?;
        Ok([props, extensions])
    }
}

impl serde::Serialize for Responses {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (key, response) in self.props.keyed_entries() {
            map.serialize_entry(&key, response)?;
        }
        for (key, value) in &self.extensions {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> serde::Deserialize<'de> for Responses {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FragmentVisitor::<Self>::new())
    }
}

impl JsonLookup for Responses {
    fn json_lookup(&self, token: &str) -> Result<Node<'_>, NotFound> {
        if token == "default" {
            return Ok(Node::DefaultResponse(self.props.default.as_ref()));
        }
        if let Some(value) = self.extensions.get(token) {
            return Ok(Node::Extension(value));
        }
        parse_status_code(token)
            .and_then(|code| self.props.status_code_responses.get(&code))
            .map(Node::Response)
            .ok_or_else(|| NotFound(token.to_owned()))
    }

    fn json_lookup_mut(&mut self, token: &str) -> Result<NodeMut<'_>, NotFound> {
        if token == "default" {
            return Ok(NodeMut::DefaultResponse(&mut self.props.default));
        }
        if let Some(value) = self.extensions.get_mut(token) {
            return Ok(NodeMut::Extension(value));
        }
        if let Some(code) = parse_status_code(token) {
            if let Some(response) = self.props.status_code_responses.get_mut(&code) {
                return Ok(NodeMut::Response(response));
            }
        }
        Err(NotFound(token.to_owned()))
    }
}
