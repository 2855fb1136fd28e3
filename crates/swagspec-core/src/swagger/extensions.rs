//! Vendor extension support.
//!
//! Extensions allow vendor-specific properties (`x-something`) to be added to most objects of a
//! Swagger document. The prefix is matched case-insensitively, so `X-Foo` is an extension too.

use super::map::Map;

/// The prefix that marks a key as a vendor extension.
pub const EXTENSION_PREFIX: &str = "x-";

/// A map of extension properties.
///
/// Keys are stored with their original casing. Values are arbitrary JSON.
pub type Extensions = Map<String, serde_json::Value>;

/// Returns `true` if `key` starts with [`EXTENSION_PREFIX`], ignoring ASCII case.
pub fn is_extension_key(key: &str) -> bool {
    key.get(..EXTENSION_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(EXTENSION_PREFIX))
}

/// Deserializes the flattened remainder of an object, keeping only the extension keys.
pub(crate) fn deserialize_extensions<'de, D>(deserializer: D) -> Result<Extensions, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let mut extensions = <Extensions as serde::Deserialize>::deserialize(deserializer)?;
    extensions.retain(|key, _| {
        let keep = is_extension_key(key);
        if !keep {
            log::trace!("dropping unrecognized object key {key:?}");
        }
        keep
    });
    Ok(extensions)
}
