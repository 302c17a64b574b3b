use fieldpath::{parse_arguments, parse_literal, Value};
use serde_json::json;

// ============================================================================
// Literal Recognition
// ============================================================================

#[test]
fn empty_field_is_empty_string() {
    assert_eq!(parse_literal(""), Value::from(""));
    assert_eq!(parse_literal("   "), Value::from(""));
}

#[test]
fn double_quoted_string() {
    assert_eq!(parse_literal("\"hello\""), Value::from("hello"));
}

#[test]
fn single_quoted_string() {
    assert_eq!(parse_literal("'hello'"), Value::from("hello"));
}

#[test]
fn quotes_stripped_without_unescaping() {
    // The literal layer strips the wrapping pair only; inner escapes are
    // carried through untouched.
    assert_eq!(parse_literal(r#""a\"b""#), Value::from(r#"a\"b"#));
}

#[test]
fn mismatched_quotes_stay_raw() {
    assert_eq!(parse_literal("\"oops'"), Value::from("\"oops'"));
}

#[test]
fn integers_and_floats() {
    assert_eq!(parse_literal("42"), Value::Number(42.0));
    assert_eq!(parse_literal("-7"), Value::Number(-7.0));
    assert_eq!(parse_literal("3.14"), Value::Number(3.14));
    assert_eq!(parse_literal("1e3"), Value::Number(1000.0));
}

#[test]
fn inf_and_nan_spellings_are_strings() {
    assert_eq!(parse_literal("inf"), Value::from("inf"));
    assert_eq!(parse_literal("NaN"), Value::from("NaN"));
}

#[test]
fn booleans() {
    assert_eq!(parse_literal("true"), Value::Bool(true));
    assert_eq!(parse_literal("false"), Value::Bool(false));
}

#[test]
fn null_and_undefined() {
    assert_eq!(parse_literal("null"), Value::Null);
    assert_eq!(parse_literal("undefined"), Value::Undefined);
}

#[test]
fn bare_word_is_string() {
    assert_eq!(parse_literal("hello"), Value::from("hello"));
}

#[test]
fn surrounding_whitespace_trimmed() {
    assert_eq!(parse_literal("  42  "), Value::Number(42.0));
    assert_eq!(parse_literal("  hi  "), Value::from("hi"));
}

// ============================================================================
// Structured Literals
// ============================================================================

#[test]
fn array_literal() {
    assert_eq!(
        parse_literal("[3, 4]"),
        Value::from(json!([3.0, 4.0]))
    );
}

#[test]
fn object_literal() {
    assert_eq!(
        parse_literal(r#"{"a": 1}"#),
        Value::from(json!({"a": 1.0}))
    );
}

#[test]
fn malformed_array_falls_back_to_string() {
    assert_eq!(parse_literal("[1,,2]"), Value::from("[1,,2]"));
}

#[test]
fn malformed_object_falls_back_to_string() {
    assert_eq!(parse_literal("{a: 1}"), Value::from("{a: 1}"));
}

// ============================================================================
// Argument List Splitting
// ============================================================================

#[test]
fn empty_input_yields_no_arguments() {
    assert_eq!(parse_arguments(""), vec![]);
    assert_eq!(parse_arguments("   "), vec![]);
}

#[test]
fn mixed_argument_list() {
    assert_eq!(
        parse_arguments("1, 'two', [3,4], true, null"),
        vec![
            Value::Number(1.0),
            Value::from("two"),
            Value::from(json!([3.0, 4.0])),
            Value::Bool(true),
            Value::Null,
        ]
    );
}

#[test]
fn quoted_comma_does_not_split() {
    assert_eq!(
        parse_arguments("\"a,b\", 2"),
        vec![Value::from("a,b"), Value::Number(2.0)]
    );
}

#[test]
fn single_quoted_comma_does_not_split() {
    assert_eq!(
        parse_arguments("'a,b', 2"),
        vec![Value::from("a,b"), Value::Number(2.0)]
    );
}

#[test]
fn escaped_quote_stays_inside_field() {
    assert_eq!(
        parse_arguments(r#"'it\'s', 2"#),
        vec![Value::from(r#"it\'s"#), Value::Number(2.0)]
    );
}

#[test]
fn bracketed_comma_does_not_split() {
    assert_eq!(
        parse_arguments("[1,2], 3"),
        vec![Value::from(json!([1.0, 2.0])), Value::Number(3.0)]
    );
}

#[test]
fn parenthesized_comma_does_not_split() {
    assert_eq!(
        parse_arguments("f(1,2), 3"),
        vec![Value::from("f(1,2)"), Value::Number(3.0)]
    );
}

#[test]
fn final_field_flushed_without_trailing_comma() {
    assert_eq!(
        parse_arguments("1, 2"),
        vec![Value::Number(1.0), Value::Number(2.0)]
    );
}

#[test]
fn trailing_comma_leaves_no_extra_field() {
    assert_eq!(parse_arguments("1,"), vec![Value::Number(1.0)]);
}

#[test]
fn interior_empty_field_is_empty_string() {
    assert_eq!(
        parse_arguments("1,,2"),
        vec![Value::Number(1.0), Value::from(""), Value::Number(2.0)]
    );
}

#[test]
fn fields_are_trimmed_before_parsing() {
    assert_eq!(
        parse_arguments("  1 ,  'x'  "),
        vec![Value::Number(1.0), Value::from("x")]
    );
}
