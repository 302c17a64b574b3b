//! The dynamic value model paths are evaluated against.
//!
//! `Value` is JSON-shaped data (null, bool, number, string, array, object)
//! plus the two members JSON lacks: `Undefined` for absent slots and `Func`
//! for invocable members. Objects keep key-value pairs in insertion order as
//! a `Vec` of pairs, avoiding an `IndexMap` dependency. Numbers are `f64`
//! throughout; path argument literals are floating point by definition.
//!
//! Interop with `serde_json::Value` is lossless in one direction (`From`)
//! and checked in the other (`TryFrom`): a native function, an absent slot,
//! or a non-finite number has no JSON representation.

use std::fmt;
use std::rc::Rc;

use crate::error::PathError;

/// An invocable member stored inside a value graph.
///
/// The wrapped closure receives the receiver (the value the member was
/// looked up on) and the argument list parsed from the path string.
#[derive(Clone)]
pub struct NativeFn(Rc<dyn Fn(&Value, &[Value]) -> Value>);

impl NativeFn {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Value + 'static,
    {
        Self(Rc::new(f))
    }

    pub fn call(&self, receiver: &Value, args: &[Value]) -> Value {
        (self.0)(receiver, args)
    }

    /// Identity comparison; two functions are equal only if they are the
    /// same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NativeFn")
    }
}

/// A node of the navigable value graph.
#[derive(Debug, Clone)]
pub enum Value {
    /// Absent slot. Distinct from `Null`: reads of missing members resolve
    /// to `Undefined`, while `null` only appears where a caller stored it.
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    /// Key-value pairs in insertion order.
    Object(Vec<(String, Value)>),
    Func(NativeFn),
}

impl Value {
    /// Empty object.
    pub fn object() -> Value {
        Value::Object(Vec::new())
    }

    /// Empty array.
    pub fn array() -> Value {
        Value::Array(Vec::new())
    }

    /// Wrap a closure as an invocable member.
    ///
    /// ```
    /// use fieldpath::{get, Value};
    ///
    /// let mut root = Value::object();
    /// root.insert("greet", Value::func(|_recv, args| match args.first() {
    ///     Some(Value::String(name)) => Value::from(format!("hello {name}")),
    ///     _ => Value::Undefined,
    /// }));
    /// assert_eq!(get(&root, "greet('world')"), Value::from("hello world"));
    /// ```
    pub fn func<F>(f: F) -> Value
    where
        F: Fn(&Value, &[Value]) -> Value + 'static,
    {
        Value::Func(NativeFn::new(f))
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// `Null` or `Undefined` — the two states that terminate traversal.
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Look up a named member. Only objects have members.
    pub fn member(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Object(members) => {
                members.iter().find(|entry| entry.0 == name).map(|entry| &entry.1)
            }
            _ => None,
        }
    }

    /// Mutable member lookup. Only objects have members.
    pub fn member_mut(&mut self, name: &str) -> Option<&mut Value> {
        match self {
            Value::Object(members) => members
                .iter_mut()
                .find(|entry| entry.0 == name)
                .map(|entry| &mut entry.1),
            _ => None,
        }
    }

    /// Insert or replace a member, preserving insertion order for new keys.
    /// No effect unless the receiver is an object.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        if let Value::Object(members) = self {
            let name = name.into();
            match members.iter().position(|entry| entry.0 == name) {
                Some(pos) => members[pos].1 = value,
                None => members.push((name, value)),
            }
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Func(a), Value::Func(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Object(members) => {
                f.write_str("{")?;
                for (i, (key, value)) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key:?}: {value}")?;
                }
                f.write_str("}")
            }
            Value::Func(_) => f.write_str("<native fn>"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl TryFrom<&Value> for serde_json::Value {
    type Error = PathError;

    fn try_from(v: &Value) -> Result<Self, PathError> {
        match v {
            Value::Undefined => Err(PathError::Unrepresentable("undefined".to_string())),
            Value::Null => Ok(serde_json::Value::Null),
            Value::Bool(b) => Ok(serde_json::Value::Bool(*b)),
            Value::Number(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .ok_or_else(|| PathError::Unrepresentable(format!("non-finite number {n}"))),
            Value::String(s) => Ok(serde_json::Value::String(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(serde_json::Value::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(serde_json::Value::Array),
            Value::Object(members) => {
                let mut map = serde_json::Map::new();
                for (key, value) in members {
                    map.insert(key.clone(), value.try_into()?);
                }
                Ok(serde_json::Value::Object(map))
            }
            Value::Func(_) => Err(PathError::Unrepresentable("native function".to_string())),
        }
    }
}
