//! Error types for decoding and encoding keyed fragments.

/// An error raised while decoding a keyed fragment.
///
/// Decoding is all-or-nothing: no partially populated fragment is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The input is not valid JSON, has trailing data, or its top-level value is neither an
    /// object nor `null`.
    ///
    /// Malformed bytes inside an ignored value end up here as well.
    #[error("malformed fragment document")]
    Malformed(#[source] serde_json::Error),

    /// An extension or entry value could not be decoded into its target type.
    #[error("failed to decode field {key:?}")]
    Field {
        /// The top-level key whose value failed to decode.
        key: String,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },
}

impl DecodeError {
    /// Returns the offending key for [`DecodeError::Field`] errors.
    pub fn key(&self) -> Option<&str> {
        match self {
            DecodeError::Malformed(_) => None,
            DecodeError::Field { key, .. } => Some(key.as_str()),
        }
    }
}

/// An error raised while encoding one side of a keyed fragment.
#[derive(Debug, thiserror::Error)]
#[error("failed to encode fragment")]
pub struct EncodeError(#[from] serde_json::Error);
