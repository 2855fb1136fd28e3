//! # swagspec
//!
//! Swagger 2.0 keyed document fragments with dual-strategy JSON decoding.
//!
//! This crate provides the main API for working with the `paths` and `responses` objects of a
//! Swagger document, re-exporting all types from the `swagspec-core` crate.

// Re-export the swagger module for access to the classifier, codec, and lookup internals
pub use swagspec_core::swagger;
// Re-export all main types at the crate root for convenience
pub use swagspec_core::{
    DecodeError, DecodeStrategy, EncodeError, Extensions, JsonLookup, KeyClass, KeyedFragment, Map,
    Node, NodeMut, NotFound, Operation, PathItem, Paths, Response, ResponseKey, Responses,
    ResponsesProps, decode_streaming, decode_tree, decode_with, encode,
};
