use alloc::{string::ToString, vec};

use crate::{
    Map, Reader, ReaderOptions, Value,
    tokens::{NUMBER_TOKENS, STRING_TOKENS},
};

fn parse_ok(text: &str) -> Value {
    Reader::new(ReaderOptions::default())
        .parse(text)
        .expect("document should parse under the default configuration")
}

#[test]
fn literals() {
    assert_eq!(parse_ok("null"), Value::Null);
    assert_eq!(parse_ok("true"), Value::Boolean(true));
    assert_eq!(parse_ok("false"), Value::Boolean(false));
}

#[test]
fn numbers() {
    assert_eq!(parse_ok("0"), Value::Number(0.0));
    assert_eq!(parse_ok("-1"), Value::Number(-1.0));
    assert_eq!(parse_ok("1.25"), Value::Number(1.25));
    assert_eq!(parse_ok("1e3"), Value::Number(1000.0));
    assert_eq!(parse_ok("-2.5e-1"), Value::Number(-0.25));
    assert_eq!(parse_ok("1E+2"), Value::Number(100.0));
}

#[test]
fn signed_zero_is_negative() {
    let Value::Number(n) = parse_ok("-0") else {
        panic!("expected number");
    };
    assert!(n == 0.0 && n.is_sign_negative());
}

#[test]
fn leading_plus_and_leading_zeros_tolerated() {
    // The generator's number vocabulary relies on both relaxations.
    assert_eq!(parse_ok("+0"), Value::Number(0.0));
    assert_eq!(parse_ok("+3"), Value::Number(3.0));
    assert_eq!(parse_ok("007"), Value::Number(7.0));
}

#[test]
fn strings_and_escapes() {
    assert_eq!(parse_ok("\"abc\""), Value::String("abc".into()));
    assert_eq!(
        parse_ok("\"\\b\\f\\n\\r\\t\\\\\\\"\\/\""),
        Value::String("\u{0008}\u{000C}\n\r\t\\\"/".into())
    );
    assert_eq!(parse_ok("\"\\u0041\""), Value::String("A".into()));
    assert_eq!(parse_ok("\"\\u0000\""), Value::String("\u{0}".into()));
}

#[test]
fn surrogate_pairs_combine() {
    assert_eq!(
        parse_ok("\"\\uD83D\\uDE00\""),
        Value::String("\u{1F600}".into())
    );
}

#[test]
fn arrays() {
    assert_eq!(parse_ok("[]"), Value::Array(vec![]));
    assert_eq!(
        parse_ok("[1,[2,3]]"),
        Value::Array(vec![
            Value::Number(1.0),
            Value::Array(vec![Value::Number(2.0), Value::Number(3.0)]),
        ])
    );
}

#[test]
fn objects() {
    assert_eq!(parse_ok("{}"), Value::Object(Map::new()));

    let mut inner = Map::new();
    inner.insert("b".to_string(), Value::Number(2.0));
    let mut outer = Map::new();
    outer.insert("a".to_string(), Value::Object(inner));
    assert_eq!(parse_ok("{\"a\":{\"b\":2}}"), Value::Object(outer));
}

#[test]
fn whitespace_between_tokens() {
    assert_eq!(parse_ok(" {\t\"a\" :\n [ 1 , 2 ]\r} "), {
        let mut map = Map::new();
        map.insert(
            "a".to_string(),
            Value::Array(vec![Value::Number(1.0), Value::Number(2.0)]),
        );
        Value::Object(map)
    });
}

#[test]
fn duplicate_keys_last_wins_by_default() {
    let mut map = Map::new();
    map.insert("a".to_string(), Value::Number(2.0));
    assert_eq!(parse_ok("{\"a\":1,\"a\":2}"), Value::Object(map));
}

#[test]
fn trailing_input_ignored_by_default() {
    assert_eq!(parse_ok("1 2"), Value::Number(1.0));
    assert_eq!(parse_ok("[] not json"), Value::Array(vec![]));
}

#[test]
fn generator_string_vocabulary_parses() {
    for token in STRING_TOKENS {
        assert!(matches!(parse_ok(token), Value::String(_)), "token {token}");
    }
}

#[test]
fn generator_number_vocabulary_parses() {
    for token in NUMBER_TOKENS {
        assert!(matches!(parse_ok(token), Value::Number(_)), "token {token}");
    }
}

#[test]
fn generator_key_vocabulary_parses() {
    // Every string token doubles as an object key.
    for token in STRING_TOKENS {
        let doc = alloc::format!("{{{token}:null}}");
        assert!(matches!(parse_ok(&doc), Value::Object(_)), "doc {doc}");
    }
}
