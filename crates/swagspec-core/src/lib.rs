//! # swagspec-core
//!
//! Core types and codecs for swagspec - Swagger 2.0 keyed document fragments.
//!
//! The `paths` and `responses` objects of a Swagger document are open JSON objects: their keys
//! are split into vendor extensions, keyed entries, and ignored noise. This crate decodes them
//! with either a generic-tree or a single-pass streaming strategy, both yielding the same result,
//! and encodes them back into one flat JSON object.

pub mod error;
pub mod swagger;

// Re-export main types at the crate root for convenience
pub use error::{DecodeError, EncodeError};
pub use swagger::{
    DecodeStrategy, Extensions, JsonLookup, KeyClass, KeyedFragment, Map, Node, NodeMut, NotFound,
    Operation, PathItem, Paths, Response, ResponseKey, Responses, ResponsesProps, decode_streaming,
    decode_tree, decode_with, encode,
};
