//! Read-side path evaluation.
//!
//! The public entry points never fail: any internal miss or failure
//! collapses to the caller's default value. `try_get` is the precise layer
//! underneath — it reports `NotInvocable` for call tokens that land on a
//! non-callable member and resolves missing structure to `Undefined`, which
//! the collapse layer then substitutes.

use crate::error::{PathError, Result};
use crate::token::{tokenize, IndexKey, Token};
use crate::value::Value;

/// Read the value at `path`, or `Undefined` when the path does not resolve.
///
/// ```
/// use fieldpath::{get, Value};
/// use serde_json::json;
///
/// let root = Value::from(json!({"address": {"city": "Oslo"}}));
/// assert_eq!(get(&root, "address.city"), Value::from("Oslo"));
/// assert!(get(&root, "address.zip").is_undefined());
/// ```
pub fn get(root: &Value, path: &str) -> Value {
    get_or(root, path, Value::Undefined)
}

/// Read the value at `path`, or `default` when the path does not resolve.
///
/// Traversal through a null or absent intermediate, a call on a
/// non-invocable member, and an absent final value all yield `default`. A
/// present `null` at the final position is returned as `null`, not
/// substituted.
///
/// ```
/// use fieldpath::{get_or, Value};
/// use serde_json::json;
///
/// let root = Value::from(json!({"items": [{"total": 9.5}]}));
/// assert_eq!(get_or(&root, "items[0].total", Value::Null), Value::Number(9.5));
/// assert_eq!(get_or(&root, "items[3].total", Value::Null), Value::Null);
/// ```
pub fn get_or(root: &Value, path: &str, default: Value) -> Value {
    match try_get(root, path) {
        Ok(value) if !value.is_undefined() => value,
        _ => default,
    }
}

/// Precise read: resolves missing structure to `Undefined` and reports call
/// failures as errors instead of collapsing them.
pub fn try_get(root: &Value, path: &str) -> Result<Value> {
    let tokens = tokenize(path)?;
    eval_tokens(root, &tokens)
}

/// Walk the token sequence left to right. A null/absent current value
/// short-circuits before each token; a missing member resolves the rest of
/// the path to `Undefined`.
fn eval_tokens(current: &Value, tokens: &[Token]) -> Result<Value> {
    let Some((token, rest)) = tokens.split_first() else {
        return Ok(current.clone());
    };

    if current.is_missing() {
        return Ok(Value::Undefined);
    }

    match token {
        Token::Property(name) => match current.member(name) {
            Some(next) => eval_tokens(next, rest),
            None => Ok(Value::Undefined),
        },
        Token::Index(key) => match index_of(current, key) {
            Some(next) => eval_tokens(next, rest),
            None => Ok(Value::Undefined),
        },
        Token::Call { name, args } => {
            let result = invoke(current, name, args)?;
            eval_tokens(&result, rest)
        }
    }
}

/// Indexed lookup. Numeric keys index sequences; on a mapping they fall
/// back to the stringified member name, matching how loosely-typed callers
/// address object fields with bracket syntax.
fn index_of<'a>(current: &'a Value, key: &IndexKey) -> Option<&'a Value> {
    match (current, key) {
        (Value::Array(items), IndexKey::Num(index)) => {
            usize::try_from(*index).ok().and_then(|i| items.get(i))
        }
        (Value::Object(_), IndexKey::Num(index)) => current.member(&index.to_string()),
        (_, IndexKey::Str(key)) => current.member(key),
        _ => None,
    }
}

/// Invoke the named member on `current` with the parsed arguments.
pub(crate) fn invoke(current: &Value, name: &str, args: &[Value]) -> Result<Value> {
    match current.member(name) {
        Some(Value::Func(f)) => Ok(f.call(current, args)),
        _ => Err(PathError::NotInvocable {
            name: name.to_string(),
        }),
    }
}
