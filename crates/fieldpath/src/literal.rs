//! Argument-list and literal parsing for call-shaped path segments.
//!
//! `parse_arguments` splits the raw content of a `name(…)` segment into
//! top-level comma-separated fields; `parse_literal` turns one field into a
//! typed value. Both are total: input that matches no recognized shape comes
//! back as a plain string rather than an error. Structured `[…]`/`{…}`
//! literals are handed to `serde_json` for a strict parse, with the raw text
//! as the fallback.

use crate::value::Value;

/// Split a parenthesized argument string into parsed literal values.
///
/// A comma only terminates a field when quote mode is off and both the
/// paren and bracket depths are zero; otherwise it belongs to the field.
/// Quote mode is entered on an unescaped `"` or `'` and left on a matching
/// unescaped quote (escape means the immediately preceding raw character is
/// `\`). Empty or whitespace-only input yields no arguments; a trailing
/// field is flushed at end of string without needing a comma.
///
/// ```
/// use fieldpath::{parse_arguments, Value};
///
/// let args = parse_arguments("1, 'two', true");
/// assert_eq!(args, vec![Value::Number(1.0), Value::from("two"), Value::Bool(true)]);
/// ```
pub fn parse_arguments(raw: &str) -> Vec<Value> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    let mut fields = Vec::new();
    let mut buf = String::new();
    let mut quote: Option<char> = None;
    let mut parens = 0usize;
    let mut brackets = 0usize;
    let mut prev: Option<char> = None;

    for c in raw.chars() {
        match c {
            '"' | '\'' => {
                match quote {
                    Some(q) if q == c && prev != Some('\\') => quote = None,
                    None if prev != Some('\\') => quote = Some(c),
                    _ => {}
                }
                buf.push(c);
            }
            '(' if quote.is_none() => {
                parens += 1;
                buf.push(c);
            }
            ')' if quote.is_none() => {
                parens = parens.saturating_sub(1);
                buf.push(c);
            }
            '[' if quote.is_none() => {
                brackets += 1;
                buf.push(c);
            }
            ']' if quote.is_none() => {
                brackets = brackets.saturating_sub(1);
                buf.push(c);
            }
            ',' if quote.is_none() && parens == 0 && brackets == 0 => {
                fields.push(parse_literal(buf.trim()));
                buf.clear();
            }
            _ => buf.push(c),
        }
        prev = Some(c);
    }

    let tail = buf.trim();
    if !tail.is_empty() {
        fields.push(parse_literal(tail));
    }

    fields
}

/// Decode a single raw argument field into a typed value. Total: anything
/// that matches no recognized literal shape is returned verbatim as a
/// string.
///
/// Recognition order, first match wins: empty → empty string; one matching
/// pair of `"…"`/`'…'` → inner substring (no unescaping at this layer);
/// `[…]`/`{…}` → strict JSON parse with raw-string fallback; numeric text →
/// number; `true`/`false` → bool; `null` → null; `undefined` → the absent
/// value; anything else → the trimmed raw string.
pub fn parse_literal(field: &str) -> Value {
    let s = field.trim();
    if s.is_empty() {
        return Value::String(String::new());
    }

    let bytes = s.as_bytes();
    if s.len() >= 2 {
        let first = bytes[0];
        let last = bytes[s.len() - 1];
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return Value::String(s[1..s.len() - 1].to_string());
        }
    }

    if (s.starts_with('[') && s.ends_with(']')) || (s.starts_with('{') && s.ends_with('}')) {
        return match serde_json::from_str::<serde_json::Value>(s) {
            Ok(json) => Value::from(json),
            Err(_) => Value::String(s.to_string()),
        };
    }

    if let Ok(n) = s.parse::<f64>() {
        // f64 parsing also accepts "inf"/"nan" spellings; those are not
        // numeric literals here.
        if n.is_finite() {
            return Value::Number(n);
        }
    }

    match s {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        "undefined" => Value::Undefined,
        _ => Value::String(s.to_string()),
    }
}
