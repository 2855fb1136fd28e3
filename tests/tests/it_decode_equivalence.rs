//! Differential tests between the generic-tree and the streaming decode strategies.
//!
//! Both strategies are live and must be interchangeable: for any input they either produce equal
//! fragments, or fail on the same field.

use std::fmt::Debug;

use proptest::{prelude::*, test_runner::TestCaseError};
use serde_json::{Map as JsonMap, Value, json};
use swagspec::{
    DecodeError, KeyedFragment, Paths, Responses, decode_streaming, decode_tree, encode,
};

/// Decodes `bytes` with both strategies and checks that the outcomes match.
fn assert_equivalent<F>(bytes: &[u8]) -> Result<Option<F>, TestCaseError>
where
    F: KeyedFragment + Debug + PartialEq,
{
    let tree = decode_tree::<F>(bytes);
    let streaming = decode_streaming::<F>(bytes);

    match (tree, streaming) {
        (Ok(tree), Ok(streaming)) => {
            prop_assert_eq!(&tree, &streaming);
            Ok(Some(tree))
        }
        (Err(tree), Err(streaming)) => {
            prop_assert_eq!(tree.key(), streaming.key());
            prop_assert_eq!(
                matches!(tree, DecodeError::Malformed(_)),
                matches!(streaming, DecodeError::Malformed(_))
            );
            Ok(None)
        }
        (tree, streaming) => Err(TestCaseError::fail(format!(
            "strategies disagree: tree={tree:?} streaming={streaming:?}"
        ))),
    }
}

fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z ]{0,8}".prop_map(Value::from),
    ];
    leaf.prop_recursive(5, 48, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..4)
                .prop_map(|fields| Value::Object(fields.into_iter().collect())),
        ]
    })
}

fn extension_key() -> impl Strategy<Value = String> {
    "[xX]-[a-zA-Z0-9-]{0,8}"
}

fn ignored_key() -> impl Strategy<Value = String> {
    "[a-wyz_][a-z0-9]{0,8}"
}

fn status_code_key() -> impl Strategy<Value = String> {
    prop_oneof![
        (100u16..600).prop_map(|code| code.to_string()),
        Just("default".to_owned()),
        Just("0404".to_owned()),
        Just("2XX".to_owned()),
    ]
}

fn response_json() -> impl Strategy<Value = Value> {
    (
        prop::option::of("[a-zA-Z ]{0,12}"),
        prop::option::of(json_value()),
    )
        .prop_map(|(description, trace)| {
            let mut response = JsonMap::new();
            if let Some(description) = description {
                response.insert("description".to_owned(), description.into());
            }
            if let Some(trace) = trace {
                response.insert("x-trace".to_owned(), trace);
            }
            Value::Object(response)
        })
}

fn responses_json() -> impl Strategy<Value = Value> {
    let field = prop_oneof![
        3 => (status_code_key(), response_json()),
        1 => (extension_key(), json_value()),
        1 => (ignored_key(), json_value()),
    ];
    prop::collection::vec(field, 0..6)
        .prop_map(|fields| Value::Object(fields.into_iter().collect()))
}

fn path_item_json() -> impl Strategy<Value = Value> {
    (
        prop::option::of("[a-zA-Z ]{0,12}"),
        prop::option::of(responses_json()),
        prop::option::of(json_value()),
    )
        .prop_map(|(summary, responses, owner)| {
            let mut operation = JsonMap::new();
            if let Some(summary) = summary {
                operation.insert("summary".to_owned(), summary.into());
            }
            if let Some(responses) = responses {
                operation.insert("responses".to_owned(), responses);
            }
            let mut item = JsonMap::new();
            item.insert("get".to_owned(), Value::Object(operation));
            if let Some(owner) = owner {
                item.insert("x-owner".to_owned(), owner);
            }
            Value::Object(item)
        })
}

fn paths_json() -> impl Strategy<Value = Value> {
    let field = prop_oneof![
        3 => ("/[a-z{}/]{0,10}", path_item_json()),
        1 => (extension_key(), json_value()),
        1 => (ignored_key(), json_value()),
        1 => ("/[a-z]{0,4}", json_value()),
    ];
    prop::collection::vec(field, 0..6)
        .prop_map(|fields| Value::Object(fields.into_iter().collect()))
}

proptest! {
    #![proptest_config(proptest::test_runner::Config {
        cases: 512,
        ..Default::default()
    })]

    #[test]
    fn decode_strategies_agree_on_paths(document in paths_json()) {
        let bytes = serde_json::to_vec(&document)?;
        assert_equivalent::<Paths>(&bytes)?;
    }

    #[test]
    fn decode_strategies_agree_on_responses(document in responses_json()) {
        let bytes = serde_json::to_vec(&document)?;
        assert_equivalent::<Responses>(&bytes)?;
    }

    #[test]
    fn encode_then_decode_paths_is_idempotent(document in paths_json()) {
        let bytes = serde_json::to_vec(&document)?;
        if let Some(decoded) = assert_equivalent::<Paths>(&bytes)? {
            let encoded = encode(&decoded)?;
            let redecoded = assert_equivalent::<Paths>(&encoded)?;
            prop_assert_eq!(redecoded, Some(decoded));
        }
    }

    #[test]
    fn encode_then_decode_responses_is_idempotent(document in responses_json()) {
        let bytes = serde_json::to_vec(&document)?;
        if let Some(decoded) = assert_equivalent::<Responses>(&bytes)? {
            let encoded = encode(&decoded)?;
            let redecoded = assert_equivalent::<Responses>(&encoded)?;
            prop_assert_eq!(redecoded, Some(decoded));
        }
    }
}

#[test]
fn decode_strategies_agree_on_too_deep_extension_value() {
    //* Given
    let deep = testlib::nested_value(200);
    let input = serde_json::to_vec(&json!({"/a": {}, "x-deep": deep})).expect("input should encode");

    //* When
    let tree = decode_tree::<Paths>(&input);
    let streaming = decode_streaming::<Paths>(&input);

    //* Then
    for result in [tree, streaming] {
        let err = result.expect_err("nesting limit should trip");
        assert!(matches!(err, DecodeError::Malformed(_)), "got {err:?}");
    }
}

#[test]
fn decode_strategies_agree_on_extension_values_around_nesting_limit() {
    for depth in 120..136 {
        //* Given
        let input = format!(r#"{{"x-deep": {}{}}}"#, "[".repeat(depth), "]".repeat(depth));

        //* When
        let tree = decode_tree::<Paths>(input.as_bytes());
        let streaming = decode_streaming::<Paths>(input.as_bytes());

        //* Then
        match (tree, streaming) {
            (Ok(tree), Ok(streaming)) => assert_eq!(tree, streaming, "depth {depth}"),
            (Err(tree), Err(streaming)) => {
                assert!(matches!(tree, DecodeError::Malformed(_)), "depth {depth}: {tree:?}");
                assert!(
                    matches!(streaming, DecodeError::Malformed(_)),
                    "depth {depth}: {streaming:?}"
                );
            }
            (tree, streaming) => {
                panic!("strategies disagree at depth {depth}: tree={tree:?} streaming={streaming:?}")
            }
        }
    }
}

#[test]
fn decode_strategies_agree_on_fixture_paths() {
    //* Given
    let input = testlib::petstore_paths();

    //* When
    let tree: Paths = decode_tree(&input).expect("tree decode should succeed");
    let streaming: Paths = decode_streaming(&input).expect("streaming decode should succeed");

    //* Then
    assert_eq!(tree, streaming);
    assert_eq!(
        tree.paths.keys().map(String::as_str).collect::<Vec<_>>(),
        ["/pets", "/pets/{petId}"]
    );
    assert_eq!(tree.extensions.len(), 2);
    assert!(tree.extensions.contains_key("x-paths-owner"));
    assert_eq!(tree.extensions.get("X-Generated"), Some(&Value::Null));
}

#[test]
fn decode_strategies_agree_on_fixture_responses() {
    //* Given
    let inputs = testlib::petstore_responses();
    assert_eq!(inputs.len(), 4, "fixture should hold four responses objects");

    for input in inputs {
        //* When
        let tree: Responses = decode_tree(&input).expect("tree decode should succeed");
        let streaming: Responses =
            decode_streaming(&input).expect("streaming decode should succeed");

        //* Then
        assert_eq!(tree, streaming);
        assert!(
            tree.props
                .status_code_responses
                .keys()
                .all(|code| (100..600).contains(code)),
            "non-canonical codes should be dropped"
        );
    }
}
