//! Key classification for keyed fragments.
//!
//! Every top-level key of a [`Paths`](super::Paths) or [`Responses`](super::Responses) object
//! falls into exactly one [`KeyClass`]. The class depends on the key string alone, never on the
//! value it carries or on the decode strategy in use.
//!
//! The extension rule is checked first. The entry rules (`/` prefix for paths, `default` or a
//! status code for responses) can never overlap with it, but the order is part of the contract.

use std::fmt;

use super::extensions::is_extension_key;

/// The class of a fragment key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyClass<E> {
    /// A vendor extension (`x-` prefix, any case).
    Extension,
    /// A keyed entry of the fragment, with the fragment-specific entry key.
    Entry(E),
    /// Any other key. Its value is dropped without being decoded.
    Ignored,
}

/// The entry key of a [`Responses`](super::Responses) object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResponseKey {
    /// The literal `default` key.
    Default,
    /// An HTTP status code key, such as `404`.
    StatusCode(u64),
}

impl fmt::Display for ResponseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseKey::Default => f.write_str("default"),
            ResponseKey::StatusCode(code) => write!(f, "{code}"),
        }
    }
}

/// Classifies a key of a [`Paths`](super::Paths) object.
pub fn classify_path_key(key: &str) -> KeyClass<()> {
    if is_extension_key(key) {
        KeyClass::Extension
    } else if key.starts_with('/') {
        KeyClass::Entry(())
    } else {
        KeyClass::Ignored
    }
}

/// Classifies a key of a [`Responses`](super::Responses) object.
pub fn classify_response_key(key: &str) -> KeyClass<ResponseKey> {
    if is_extension_key(key) {
        KeyClass::Extension
    } else if key == "default" {
        KeyClass::Entry(ResponseKey::Default)
    } else if let Some(code) = parse_status_code(key) {
        KeyClass::Entry(ResponseKey::StatusCode(code))
    } else {
        KeyClass::Ignored
    }
}

/// Parses a status code key.
///
/// Only the canonical decimal form is accepted: ASCII digits, no sign, no surrounding
/// whitespace, and no leading zero unless the whole key is `0`. Any such number is accepted, not
/// only the registered HTTP codes, as long as it fits in a `u64`.
pub fn parse_status_code(key: &str) -> Option<u64> {
    match key.as_bytes() {
        [] | [b'0', _, ..] => None,
        digits if digits.iter().all(u8::is_ascii_digit) => key.parse().ok(),
        _ => None,
    }
}
