use alloc::{string::String, vec, vec::Vec};

use rstest::*;

use crate::{
    Input, JsonValue, Map, Parser, json_array, json_bool, json_null, json_number, json_object,
    json_string, json_value, parse_document, parse_value,
};

fn object<const N: usize>(pairs: [(&str, JsonValue); N]) -> JsonValue {
    JsonValue::Object(
        pairs
            .into_iter()
            .map(|(k, v)| (String::from(k), v))
            .collect(),
    )
}

#[test]
fn null_literal() {
    let (rest, value) = json_null().parse(Input::new("nullable")).unwrap();
    assert_eq!(value, JsonValue::Null);
    assert_eq!(rest, "able");
}

#[rstest]
#[case("true", JsonValue::Bool(true))]
#[case("false", JsonValue::Bool(false))]
fn bool_literals(#[case] input: &str, #[case] expected: JsonValue) {
    let (rest, value) = json_bool().parse(Input::new(input)).unwrap();
    assert_eq!(value, expected);
    assert!(rest.is_empty());
}

#[rstest]
#[case("0", 0)]
#[case("-0", 0)]
#[case("42", 42)]
#[case("007", 7)]
#[case("-123", -123)]
#[case("2147483647", i32::MAX)]
#[case("-2147483648", i32::MIN)]
fn numbers(#[case] input: &str, #[case] expected: i32) {
    let (rest, value) = json_number().parse(Input::new(input)).unwrap();
    assert_eq!(value, JsonValue::Number(expected));
    assert!(rest.is_empty());
}

#[test]
fn string_contents_are_verbatim() {
    // No escape decoding: the backslash and the `n` stay two separate
    // characters.
    let (rest, value) = json_string().parse(Input::new(r#""a\nb""#)).unwrap();
    assert_eq!(value, JsonValue::String(String::from(r"a\nb")));
    assert!(rest.is_empty());
}

#[test]
fn escaped_quote_still_terminates_the_literal() {
    // Inherited limitation: `\"` is not special-cased, so the literal ends
    // at the first quote after the backslash.
    let (rest, value) = json_string().parse(Input::new(r#""a\"b""#)).unwrap();
    assert_eq!(value, JsonValue::String(String::from(r"a\")));
    assert_eq!(rest, "b\"");
}

#[test]
fn array_of_numbers() {
    let (rest, value) = json_array().parse(Input::new("[1, 2, 3]")).unwrap();
    assert_eq!(
        value,
        JsonValue::Array(vec![
            JsonValue::Number(1),
            JsonValue::Number(2),
            JsonValue::Number(3),
        ])
    );
    assert!(rest.is_empty());
}

#[rstest]
#[case("[]")]
#[case("[ ]")]
#[case("[\n\t ]")]
fn empty_arrays(#[case] input: &str) {
    let (_, value) = json_array().parse(Input::new(input)).unwrap();
    assert_eq!(value, JsonValue::Array(Vec::new()));
}

#[rstest]
#[case("{}")]
#[case("{ }")]
#[case("{\r\n}")]
fn empty_objects(#[case] input: &str) {
    let (_, value) = json_object().parse(Input::new(input)).unwrap();
    assert_eq!(value, JsonValue::Object(Map::new()));
}

#[test]
fn duplicate_object_keys_last_wins() {
    let (_, value) = json_object()
        .parse(Input::new("{\"a\":1,\"a\":2}"))
        .unwrap();
    assert_eq!(value, object([("a", JsonValue::Number(2))]));
}

#[rstest]
#[case("{\"a\":1}")]
#[case("{ \"a\" : 1 }")]
#[case("{\n  \"a\"\t:\n  1\n}")]
fn whitespace_around_object_punctuation(#[case] input: &str) {
    let (_, value) = json_object().parse(Input::new(input)).unwrap();
    assert_eq!(value, object([("a", JsonValue::Number(1))]));
}

#[test]
fn nested_mixed_document() {
    let text = r#"{"test": [[-1,[2],[[4,3,[9,8,7], 2], 1,2,3]], 1,2,3], "foo": 1, "bar": false, "baz": "value"}"#;
    let value = parse_document(text).unwrap();

    let expected = object([
        (
            "test",
            JsonValue::Array(vec![
                JsonValue::Array(vec![
                    JsonValue::Number(-1),
                    JsonValue::Array(vec![JsonValue::Number(2)]),
                    JsonValue::Array(vec![
                        JsonValue::Array(vec![
                            JsonValue::Number(4),
                            JsonValue::Number(3),
                            JsonValue::Array(vec![
                                JsonValue::Number(9),
                                JsonValue::Number(8),
                                JsonValue::Number(7),
                            ]),
                            JsonValue::Number(2),
                        ]),
                        JsonValue::Number(1),
                        JsonValue::Number(2),
                        JsonValue::Number(3),
                    ]),
                ]),
                JsonValue::Number(1),
                JsonValue::Number(2),
                JsonValue::Number(3),
            ]),
        ),
        ("foo", JsonValue::Number(1)),
        ("bar", JsonValue::Bool(false)),
        ("baz", JsonValue::String(String::from("value"))),
    ]);

    assert_eq!(value, expected);
}

#[test]
fn value_alternation_order_is_fixed() {
    // Each leading character selects exactly one production.
    for (input, expected) in [
        ("null", JsonValue::Null),
        ("true", JsonValue::Bool(true)),
        ("-5", JsonValue::Number(-5)),
        ("\"s\"", JsonValue::String(String::from("s"))),
        ("[]", JsonValue::Array(Vec::new())),
        ("{}", JsonValue::Object(Map::new())),
    ] {
        let (_, value) = json_value().parse(Input::new(input)).unwrap();
        assert_eq!(value, expected);
    }
}

#[test]
fn parse_value_hands_back_trailing_input() {
    let (rest, value) = parse_value("1 and the rest").unwrap();
    assert_eq!(value, JsonValue::Number(1));
    assert_eq!(rest, " and the rest");
}

#[rstest]
#[case("1")]
#[case(" 1")]
#[case("1 ")]
#[case("\t\n 1 \r\n")]
fn parse_document_tolerates_surrounding_whitespace(#[case] input: &str) {
    assert_eq!(parse_document(input), Ok(JsonValue::Number(1)));
}

#[test]
fn matches_reference_parser_on_supported_subset() {
    let documents = [
        "null",
        "true",
        "false",
        "0",
        "-42",
        "\"hello world\"",
        "[1, 2, 3]",
        "[[], [null], [true, false]]",
        r#"{"a": 1, "b": [true, null], "c": {"d": "e"}}"#,
        r#"{"nested": {"x": [{"y": 0}]}}"#,
    ];

    for document in documents {
        let reference: serde_json::Value = serde_json::from_str(document).unwrap();
        assert_eq!(
            parse_document(document),
            Ok(from_reference(&reference)),
            "mismatch on {document}"
        );
    }
}

fn from_reference(v: &serde_json::Value) -> JsonValue {
    match v {
        serde_json::Value::Null => JsonValue::Null,
        serde_json::Value::Bool(b) => JsonValue::Bool(*b),
        serde_json::Value::Number(n) => {
            JsonValue::Number(i32::try_from(n.as_i64().unwrap()).unwrap())
        }
        serde_json::Value::String(s) => JsonValue::String(s.clone()),
        serde_json::Value::Array(items) => {
            JsonValue::Array(items.iter().map(from_reference).collect())
        }
        serde_json::Value::Object(map) => JsonValue::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), from_reference(v)))
                .collect(),
        ),
    }
}
