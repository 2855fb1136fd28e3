//! Single-segment JSON pointer lookup on keyed fragments.
//!
//! A document navigator resolves a pointer such as `/paths/~1pets/get` one segment at a time.
//! Keyed fragments cannot be navigated field by field, since their fields are dynamic, so they
//! resolve a segment themselves through [`JsonLookup`].

use std::borrow::Cow;

use super::{PathItem, Response};

/// A node reached by a lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'a> {
    /// A path item entry of a [`Paths`](super::Paths) object.
    PathItem(&'a PathItem),
    /// A status code entry of a [`Responses`](super::Responses) object.
    Response(&'a Response),
    /// The `default` slot of a [`Responses`](super::Responses) object, which may be unset.
    DefaultResponse(Option<&'a Response>),
    /// A vendor extension value.
    Extension(&'a serde_json::Value),
}

/// A mutable node reached by a lookup.
///
/// Callers can keep navigating from it, or edit the node in place.
#[derive(Debug, PartialEq)]
pub enum NodeMut<'a> {
    /// A path item entry of a [`Paths`](super::Paths) object.
    PathItem(&'a mut PathItem),
    /// A status code entry of a [`Responses`](super::Responses) object.
    Response(&'a mut Response),
    /// The `default` slot of a [`Responses`](super::Responses) object, which may be unset.
    DefaultResponse(&'a mut Option<Response>),
    /// A vendor extension value.
    Extension(&'a mut serde_json::Value),
}

/// The looked up token names no field of the object.
///
/// This is an expected outcome while navigating optional fields, not a decode failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("object has no field {0:?}")]
pub struct NotFound(pub String);

/// Resolves one JSON pointer segment on an object with dynamic fields.
///
/// `token` is an unescaped reference token: `~1` and `~0` have already been replaced by `/` and
/// `~`.
pub trait JsonLookup {
    /// Looks up the field named by `token`.
    fn json_lookup(&self, token: &str) -> Result<Node<'_>, NotFound>;

    /// Looks up the field named by `token` for in-place edits.
    fn json_lookup_mut(&mut self, token: &str) -> Result<NodeMut<'_>, NotFound>;
}

/// Unescapes a JSON pointer reference token (`~1` becomes `/`, then `~0` becomes `~`).
pub fn unescape_token(token: &str) -> Cow<'_, str> {
    if token.contains('~') {
        Cow::Owned(token.replace("~1", "/").replace("~0", "~"))
    } else {
        Cow::Borrowed(token)
    }
}
