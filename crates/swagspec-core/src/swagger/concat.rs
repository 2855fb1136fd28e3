//! Byte-level merge of encoded JSON objects.

/// Merges already-encoded JSON objects into a single flat object without reparsing them.
///
/// Each blob is trimmed of surrounding ASCII whitespace. Blobs that are empty, `null`, or an
/// empty object are skipped. For the rest, the closing `}` of the accumulated output and the
/// opening `{` of the next blob are dropped and a `,` is inserted between the two bodies.
///
/// The result is always an object: `{}` when nothing remains to merge. Keys are not
/// deduplicated, so when two blobs share a key the later one wins on the next decode.
pub fn concat_json(blobs: &[&[u8]]) -> Vec<u8> {
    let mut merged = Vec::with_capacity(blobs.iter().map(|blob| blob.len()).sum::<usize>() + 2);
    merged.push(b'{');

    for blob in blobs {
        let Some(body) = object_body(blob) else {
            continue;
        };
        if merged.len() > 1 {
            merged.push(b',');
        }
        merged.extend_from_slice(body);
    }

    merged.push(b'}');
    merged
}

/// Returns the non-empty body of an encoded object, between its braces.
fn object_body(blob: &[u8]) -> Option<&[u8]> {
    let body = blob
        .trim_ascii()
        .strip_prefix(b"{")?
        .strip_suffix(b"}")?
        .trim_ascii();
    (!body.is_empty()).then_some(body)
}
