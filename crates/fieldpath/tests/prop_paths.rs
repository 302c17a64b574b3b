/// Property-Based Tests for Path Evaluation
///
/// Uses the `proptest` crate to generate random property/index paths and
/// leaf values, then verifies the engine's core laws:
///
/// - `get(set(empty, p, v), p) == v` for any generated path (write then
///   read lands on the written value)
/// - tokenizing is deterministic
/// - `get` is idempotent and leaves the root untouched
/// - JSON interop round-trips for function-free values
///
/// Paths always start with a property segment: the roots under test are
/// objects, and a leading numeric index on an object is a (deliberate)
/// write-side failure, which is covered by the hand-written tests instead.
use proptest::prelude::*;

use fieldpath::{get, tokenize, try_set, Value};

#[derive(Debug, Clone)]
enum Seg {
    Key(String),
    Index(usize),
}

fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,7}").unwrap()
}

fn arb_seg() -> impl Strategy<Value = Seg> {
    prop_oneof![
        arb_key().prop_map(Seg::Key),
        (0usize..4).prop_map(Seg::Index),
    ]
}

fn arb_path() -> impl Strategy<Value = String> {
    (arb_key(), prop::collection::vec(arb_seg(), 0..5)).prop_map(|(head, tail)| {
        let mut path = head;
        for seg in tail {
            match seg {
                Seg::Key(key) => {
                    path.push('.');
                    path.push_str(&key);
                }
                Seg::Index(i) => {
                    path.push_str(&format!("[{i}]"));
                }
            }
        }
        path
    })
}

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::from),
        (-1_000_000i64..1_000_000).prop_map(|n| Value::Number(n as f64)),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::from),
        Just(Value::Null),
    ]
}

/// Function-free value trees for the JSON interop law. Numbers are kept
/// integral-valued so equality survives the `f64` representation.
fn arb_tree() -> impl Strategy<Value = Value> {
    let leaf = arb_leaf();
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec((arb_key(), inner), 0..4).prop_map(|entries| {
                let mut object = Value::object();
                for (key, value) in entries {
                    object.insert(key, value);
                }
                object
            }),
        ]
    })
}

proptest! {
    #[test]
    fn set_then_get_lands_on_written_value(path in arb_path(), leaf in arb_leaf()) {
        let mut root = Value::object();
        prop_assert!(try_set(&mut root, &path, leaf.clone()).is_ok());
        prop_assert_eq!(get(&root, &path), leaf);
    }

    #[test]
    fn tokenize_is_deterministic(path in arb_path()) {
        prop_assert_eq!(tokenize(&path).unwrap(), tokenize(&path).unwrap());
    }

    #[test]
    fn get_is_pure(path in arb_path(), leaf in arb_leaf()) {
        let mut root = Value::object();
        prop_assert!(try_set(&mut root, &path, leaf).is_ok());
        let snapshot = root.clone();
        let first = get(&root, &path);
        let second = get(&root, &path);
        prop_assert_eq!(first, second);
        prop_assert_eq!(root, snapshot);
    }

    #[test]
    fn json_interop_round_trips(tree in arb_tree()) {
        let json = serde_json::Value::try_from(&tree).expect("function-free tree");
        prop_assert_eq!(Value::from(json), tree);
    }
}
