//! Swagger 2.0 document model types.
//!
//! This module provides the keyed fragments of a Swagger document, [`Paths`] and [`Responses`],
//! together with the entry types they hold and the codec they share.

pub mod concat;
pub mod extensions;
pub mod fragment;
pub mod key;
pub mod lookup;
pub mod map;
pub mod operation;
pub mod path_item;
pub mod paths;
pub mod response;
pub mod responses;

pub use self::{
    concat::concat_json,
    extensions::{EXTENSION_PREFIX, Extensions, is_extension_key},
    fragment::{
        DecodeStrategy, KeyedFragment, decode_streaming, decode_tree, decode_with, encode,
    },
    key::{KeyClass, ResponseKey, classify_path_key, classify_response_key, parse_status_code},
    lookup::{JsonLookup, Node, NodeMut, NotFound, unescape_token},
    map::Map,
    operation::Operation,
    path_item::PathItem,
    paths::Paths,
    response::Response,
    responses::{Responses, ResponsesProps},
};
