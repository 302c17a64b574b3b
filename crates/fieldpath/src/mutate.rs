//! Write-side path evaluation with auto-vivification.
//!
//! `set` walks the path like the read side, except that a null/absent
//! `Property`/`Index` target grows a fresh container before descent: an
//! array when the next segment indexes numerically, an object otherwise.
//! The final segment assigns the value. The public `set` collapses every
//! internal failure to a no-op return; `try_set` reports the precise kind.
//!
//! # Key design decisions
//!
//! - **Partial mutation is accepted.** A failure deep in the path leaves the
//!   containers vivified up to that point in place; the engine never rolls
//!   back.
//! - **Numeric indexing on the write side is strict.** A numeric `Index`
//!   requires an actual sequence (vivified targets always are one); a
//!   pre-existing mapping or scalar under a numeric index is `NotIndexable`.
//!   The read side stays tolerant instead.
//! - **Call results are not locations.** A call in the path prefix is
//!   invoked for its return value; traversal continues into that owned
//!   temporary, so later segments cannot reach the original graph. A call
//!   as the final segment is `InvalidTarget`.

use crate::error::{PathError, Result};
use crate::eval::invoke;
use crate::token::{tokenize, IndexKey, Token};
use crate::value::Value;

/// Assign `value` at `path`, creating missing intermediate containers.
/// On internal failure the operation is abandoned; mutation up to the
/// failure point may remain.
///
/// ```
/// use fieldpath::{get, set, Value};
///
/// let mut root = Value::object();
/// set(&mut root, "a.b[0].c", Value::from(5.0));
/// assert_eq!(get(&root, "a.b[0].c"), Value::Number(5.0));
/// ```
pub fn set(root: &mut Value, path: &str, value: Value) {
    let _ = try_set(root, path, value);
}

/// Precise write: same traversal as [`set`], reporting the failure kind
/// instead of swallowing it.
pub fn try_set(root: &mut Value, path: &str, value: Value) -> Result<()> {
    let tokens = tokenize(path)?;
    assign(root, &tokens, value)
}

fn assign(current: &mut Value, tokens: &[Token], value: Value) -> Result<()> {
    match tokens {
        [] => Ok(()),
        [last] => assign_final(current, last, value),
        [token, rest @ ..] => match token {
            Token::Property(name) => {
                let slot = ensure_member(current, name, wants_sequence(rest))?;
                assign(slot, rest, value)
            }
            Token::Index(key) => {
                let slot = ensure_index(current, key, wants_sequence(rest))?;
                assign(slot, rest, value)
            }
            Token::Call { name, args } => {
                // The call result is an owned temporary; later segments
                // mutate it, not the original graph.
                let mut result = invoke(current, name, args)?;
                assign(&mut result, rest, value)
            }
        },
    }
}

/// A freshly vivified container is a sequence only when the next segment
/// indexes it numerically.
fn wants_sequence(rest: &[Token]) -> bool {
    matches!(rest.first(), Some(Token::Index(IndexKey::Num(_))))
}

fn new_container(want_sequence: bool) -> Value {
    if want_sequence {
        Value::array()
    } else {
        Value::object()
    }
}

/// Descend into a named member, vivifying it when null/absent. Existing
/// non-missing members are returned as-is; a later segment decides whether
/// their shape fits.
fn ensure_member<'a>(current: &'a mut Value, name: &str, want_sequence: bool) -> Result<&'a mut Value> {
    let Value::Object(members) = current else {
        return Err(PathError::NotAssignable {
            name: name.to_string(),
        });
    };

    let pos = match members.iter().position(|entry| entry.0 == name) {
        Some(pos) => {
            if members[pos].1.is_missing() {
                members[pos].1 = new_container(want_sequence);
            }
            pos
        }
        None => {
            members.push((name.to_string(), new_container(want_sequence)));
            members.len() - 1
        }
    };

    Ok(&mut members[pos].1)
}

/// Descend into an indexed slot, vivifying it when null/absent. Indexing
/// past the end of a sequence pads the gap with absent slots first.
fn ensure_index<'a>(current: &'a mut Value, key: &IndexKey, want_sequence: bool) -> Result<&'a mut Value> {
    match key {
        IndexKey::Str(name) => ensure_member(current, name, want_sequence),
        IndexKey::Num(index) => {
            let Value::Array(items) = current else {
                return Err(PathError::NotIndexable { index: *index });
            };
            let i = usize::try_from(*index)
                .map_err(|_| PathError::NotIndexable { index: *index })?;
            if items.len() <= i {
                items.resize(i + 1, Value::Undefined);
            }
            if items[i].is_missing() {
                items[i] = new_container(want_sequence);
            }
            Ok(&mut items[i])
        }
    }
}

/// Apply the terminal token: assign onto the reached container.
fn assign_final(current: &mut Value, token: &Token, value: Value) -> Result<()> {
    match token {
        Token::Property(name) => assign_member(current, name, value),
        Token::Index(IndexKey::Str(key)) => assign_member(current, key, value),
        Token::Index(IndexKey::Num(index)) => match current {
            Value::Array(items) => {
                let i = usize::try_from(*index)
                    .map_err(|_| PathError::NotIndexable { index: *index })?;
                if items.len() <= i {
                    items.resize(i + 1, Value::Undefined);
                }
                items[i] = value;
                Ok(())
            }
            _ => Err(PathError::NotIndexable { index: *index }),
        },
        Token::Call { .. } => Err(PathError::InvalidTarget),
    }
}

fn assign_member(current: &mut Value, name: &str, value: Value) -> Result<()> {
    match current {
        Value::Object(members) => {
            match members.iter().position(|entry| entry.0 == name) {
                Some(pos) => members[pos].1 = value,
                None => members.push((name.to_string(), value)),
            }
            Ok(())
        }
        _ => Err(PathError::NotAssignable {
            name: name.to_string(),
        }),
    }
}
