//! Decoding and encoding of open, keyed document fragments.
//!
//! A keyed fragment is a JSON object whose fields are split at decode time into vendor
//! extensions, keyed entries, and everything else, which is dropped. [`Paths`](super::Paths) and
//! [`Responses`](super::Responses) are the two fragments of the Swagger document model.
//!
//! Two decode strategies are provided and must always agree:
//!
//! - [`decode_tree`] parses the whole object into a list of deferred [`RawValue`]s first, then
//!   classifies each key and decodes only the claimed values.
//! - [`decode_streaming`] classifies each key as it is read and decodes its value straight into
//!   the target type, skipping ignored values without materializing them. This is also the path
//!   taken by the `Deserialize` impls of the fragments.
//!
//! [`encode`] serializes the two halves of a fragment separately and merges the encoded objects
//! with [`concat_json`].

use std::{fmt, marker::PhantomData};

use serde::{
    Deserializer as _,
    de::{self, DeserializeOwned, IgnoredAny, MapAccess, Visitor},
};
use serde_json::value::RawValue;

use super::{concat::concat_json, extensions::Extensions, key::KeyClass};
use crate::error::{DecodeError, EncodeError};

/// A JSON object split into vendor extensions and keyed entries.
pub trait KeyedFragment: Default {
    /// The fragment-specific key of an entry, as produced by [`KeyedFragment::classify`].
    type Key;

    /// The typed value of an entry.
    type Entry: DeserializeOwned;

    /// What the fragment visitor expects, used in decode error messages.
    const EXPECTING: &'static str;

    /// Classifies a top-level key of the fragment.
    fn classify(key: &str) -> KeyClass<Self::Key>;

    /// Stores a decoded entry. `raw` is the key as it appeared in the input.
    fn insert_entry(&mut self, raw: String, key: Self::Key, entry: Self::Entry);

    /// The extension map of the fragment.
    fn extensions_mut(&mut self) -> &mut Extensions;

    /// Encodes the two halves of the fragment as JSON objects, in output order.
    fn encode_parts(&self) -> Result<[Vec<u8>; 2], serde_json::Error>;
}

/// The decoding strategy used by [`decode_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DecodeStrategy {
    /// Parse into a generic map of raw values first, then classify.
    GenericTree,
    /// Classify keys in a single forward pass over the token stream.
    #[default]
    Streaming,
}

/// Decodes a fragment with the given strategy.
pub fn decode_with<F: KeyedFragment>(
    bytes: &[u8],
    strategy: DecodeStrategy,
) -> Result<F, DecodeError> {
    match strategy {
        DecodeStrategy::GenericTree => decode_tree(bytes),
        DecodeStrategy::Streaming => decode_streaming(bytes),
    }
}

/// Decodes a fragment through an intermediate map of raw values.
///
/// A JSON `null` document yields an empty fragment. Values of ignored keys are validated as JSON
/// but never decoded into a typed target. Every occurrence of a duplicated key is decoded, in
/// document order, and the last one wins.
pub fn decode_tree<F: KeyedFragment>(bytes: &[u8]) -> Result<F, DecodeError> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    let fields = (&mut deserializer)
        .deserialize_any(RawFieldsVisitor)
        .and_then(|fields| {
            deserializer.end()?;
            Ok(fields)
        })
        .map_err(DecodeError::Malformed)?;

    let mut fragment = F::default();
    for (key, raw) in fields {
        match F::classify(&key) {
            KeyClass::Extension => {
                let value = decode_raw_field(&key, &raw)?;
                fragment.extensions_mut().insert(key, value);
            }
            KeyClass::Entry(entry_key) => {
                let entry = decode_raw_field(&key, &raw)?;
                fragment.insert_entry(key, entry_key, entry);
            }
            KeyClass::Ignored => log::trace!("dropping unrecognized fragment key {key:?}"),
        }
    }
    Ok(fragment)
}

/// Decodes a fragment in a single pass over the input.
///
/// A JSON `null` document yields an empty fragment. Values of ignored keys are skipped without
/// being materialized, however deeply nested they are.
pub fn decode_streaming<F: KeyedFragment>(bytes: &[u8]) -> Result<F, DecodeError> {
    let mut failed_key = None;
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);

    let decoded = (&mut deserializer)
        .deserialize_any(FragmentVisitor::<F>::tracking(&mut failed_key))
        .and_then(|fragment| {
            deserializer.end()?;
            Ok(fragment)
        });

    decoded.map_err(|err| match failed_key {
        Some(key) if !(err.is_syntax() || err.is_eof()) => {
            // A syntax error later in the document takes precedence over a field error.
            match serde_json::from_slice::<IgnoredAny>(bytes) {
                Ok(_) => DecodeError::Field { key, source: err },
                Err(syntax) => DecodeError::Malformed(syntax),
            }
        }
        _ => DecodeError::Malformed(err),
    })
}

/// Encodes a fragment as a single flat JSON object.
///
/// The extension map and the entry map are serialized independently and merged at byte level.
/// The output always starts with `{` and ends with `}`.
pub fn encode<F: KeyedFragment>(fragment: &F) -> Result<Vec<u8>, EncodeError> {
    let [first, second] = fragment.encode_parts()?;
    Ok(concat_json(&[first.as_slice(), second.as_slice()]))
}

/// Decodes a deferred field value.
///
/// The value is wrapped in a one-element array so that it is decoded one level deep, as it is
/// inside the fragment object. Nesting limits then trip at the same depth in both strategies.
fn decode_raw_field<T: DeserializeOwned>(key: &str, raw: &RawValue) -> Result<T, DecodeError> {
    let nested = format!("[{}]", raw.get());
    match serde_json::from_str::<(T,)>(&nested) {
        Ok((value,)) => Ok(value),
        Err(err) if err.is_syntax() || err.is_eof() => Err(DecodeError::Malformed(err)),
        Err(source) => {
            log::debug!("failed to decode fragment field {key:?}: {source}");
            Err(DecodeError::Field {
                key: key.to_owned(),
                source,
            })
        }
    }
}

/// Collects the fields of the fragment object as deferred values, keeping duplicates.
struct RawFieldsVisitor;

impl<'de> Visitor<'de> for RawFieldsVisitor {
    type Value = Vec<(String, Box<RawValue>)>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object or null")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut fields = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(key) = map.next_key::<String>()? {
            let raw = map.next_value::<Box<RawValue>>()?;
            fields.push((key, raw));
        }
        Ok(fields)
    }
}

/// The single-pass visitor shared by [`decode_streaming`] and the fragment `Deserialize` impls.
pub(crate) struct FragmentVisitor<'a, F> {
    /// Receives the key whose value failed to decode, if any.
    failed_key: Option<&'a mut Option<String>>,
    marker: PhantomData<fn() -> F>,
}

impl<F> FragmentVisitor<'_, F> {
    pub(crate) fn new() -> Self {
        Self {
            failed_key: None,
            marker: PhantomData,
        }
    }
}

impl<'a, F> FragmentVisitor<'a, F> {
    fn tracking(failed_key: &'a mut Option<String>) -> Self {
        Self {
            failed_key: Some(failed_key),
            marker: PhantomData,
        }
    }
}

impl<'de, F: KeyedFragment> Visitor<'de> for FragmentVisitor<'_, F> {
    type Value = F;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(F::EXPECTING)
    }

    fn visit_unit<E: de::Error>(self) -> Result<F, E> {
        Ok(F::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<F, E> {
        Ok(F::default())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<F, A::Error> {
        let mut failed_key = self.failed_key;
        let mut fragment = F::default();

        while let Some(key) = map.next_key::<String>()? {
            match F::classify(&key) {
                KeyClass::Extension => match map.next_value::<serde_json::Value>() {
                    Ok(value) => {
                        fragment.extensions_mut().insert(key, value);
                    }
                    Err(err) => return Err(blame(&mut failed_key, key, err)),
                },
                KeyClass::Entry(entry_key) => match map.next_value::<F::Entry>() {
                    Ok(entry) => fragment.insert_entry(key, entry_key, entry),
                    Err(err) => return Err(blame(&mut failed_key, key, err)),
                },
                KeyClass::Ignored => {
                    log::trace!("dropping unrecognized fragment key {key:?}");
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(fragment)
    }
}

fn blame<E: fmt::Display>(failed_key: &mut Option<&mut Option<String>>, key: String, err: E) -> E {
    log::debug!("failed to decode fragment field {key:?}: {err}");
    if let Some(slot) = failed_key {
        **slot = Some(key);
    }
    err
}
