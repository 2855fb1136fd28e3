//! Shared fixtures for the swagspec integration tests.

use serde_json::Value;

/// A small Swagger 2.0 document with extensions and ignored keys at every fragment level.
pub const PETSTORE: &str = include_str!("../assets/petstore.json");

/// Returns the encoded `paths` object of the [`PETSTORE`] document.
pub fn petstore_paths() -> Vec<u8> {
    let document: Value = serde_json::from_str(PETSTORE).expect("fixture should be valid JSON");
    serde_json::to_vec(&document["paths"]).expect("paths should re-encode")
}

/// Returns every encoded `responses` object of the [`PETSTORE`] document, `null` ones included.
pub fn petstore_responses() -> Vec<Vec<u8>> {
    let document: Value = serde_json::from_str(PETSTORE).expect("fixture should be valid JSON");
    let Some(paths) = document["paths"].as_object() else {
        return Vec::new();
    };

    paths
        .values()
        .filter_map(Value::as_object)
        .flat_map(|item| item.values())
        .filter_map(|operation| operation.get("responses"))
        .map(|responses| serde_json::to_vec(responses).expect("responses should re-encode"))
        .collect()
}

/// Builds a value nested `depth` levels deep, alternating objects and arrays.
pub fn nested_value(depth: usize) -> Value {
    (0..depth).fold(Value::from("leaf"), |inner, level| {
        if level % 2 == 0 {
            serde_json::json!({ "level": level, "inner": inner, "tail": [] })
        } else {
            serde_json::json!([level, inner, {}])
        }
    })
}
