use alloc::{string::String, vec::Vec};

use quickcheck::{Arbitrary, Gen, QuickCheck};
use quickcheck_macros::quickcheck;
use serde_json as reference;

use crate::{parse, Value};

/// A reference document generated the way the corpus generates test trees:
/// scalar-heavy, with small containers and a hard depth limit.
#[derive(Debug, Clone)]
struct ReferenceDoc(reference::Value);

fn finite_f64(g: &mut Gen) -> f64 {
    let mut value = f64::arbitrary(g);
    while !value.is_finite() {
        value = f64::arbitrary(g);
    }
    value
}

fn gen_val(g: &mut Gen, depth: usize) -> reference::Value {
    let choices = if depth == 0 { 4 } else { 6 };
    match usize::arbitrary(g) % choices {
        0 => reference::Value::Null,
        1 => reference::Value::Bool(bool::arbitrary(g)),
        2 => {
            let n = finite_f64(g);
            reference::Number::from_f64(n).map_or(reference::Value::Null, reference::Value::Number)
        }
        3 => reference::Value::String(String::arbitrary(g)),
        4 => {
            let len = usize::arbitrary(g) % 3;
            reference::Value::Array((0..len).map(|_| gen_val(g, depth - 1)).collect())
        }
        _ => {
            let len = usize::arbitrary(g) % 3;
            let mut map = reference::Map::new();
            for _ in 0..len {
                map.insert(String::arbitrary(g), gen_val(g, depth - 1));
            }
            reference::Value::Object(map)
        }
    }
}

impl Arbitrary for ReferenceDoc {
    fn arbitrary(g: &mut Gen) -> Self {
        let depth = usize::arbitrary(g) % 3;
        ReferenceDoc(gen_val(g, depth))
    }
}

/// Converts a reference tree into the expected [`Value`] tree, preserving
/// member order (the reference map is order-preserving in tests).
fn expected_tree(v: &reference::Value) -> Value {
    match v {
        reference::Value::Null => Value::Null,
        reference::Value::Bool(b) => Value::Boolean(*b),
        reference::Value::Number(n) => Value::Number(n.as_f64().unwrap()),
        reference::Value::String(s) => Value::String(s.clone()),
        reference::Value::Array(a) => Value::Array(a.iter().map(expected_tree).collect()),
        reference::Value::Object(m) => Value::Object(
            m.iter()
                .map(|(k, v)| (k.clone(), expected_tree(v)))
                .collect(),
        ),
    }
}

/// Any document the reference serializer emits must parse to an equal tree,
/// compact and pretty-printed alike (the pretty form exercises whitespace at
/// every token boundary).
#[test]
fn reference_serializations_parse_to_equal_trees() {
    fn prop(doc: ReferenceDoc) -> bool {
        let expected = expected_tree(&doc.0);
        let compact = reference::to_string(&doc.0).unwrap();
        let pretty = reference::to_string_pretty(&doc.0).unwrap();
        parse(&compact).as_ref() == Ok(&expected) && parse(&pretty).as_ref() == Ok(&expected)
    }
    QuickCheck::new()
        .tests(400)
        .quickcheck(prop as fn(ReferenceDoc) -> bool);
}

/// Parsing arbitrary text never panics, and a failure always reports a
/// position inside the input, on a character boundary.
#[quickcheck]
fn parser_never_panics(text: String) -> bool {
    match parse(&text) {
        Ok(_) => true,
        Err(err) => {
            err.offset <= text.len()
                && text.is_char_boundary(err.offset)
                && err.line >= 1
                && err.column >= 1
        }
    }
}

/// A parsed object never contains two members with the same key.
#[quickcheck]
fn parsed_objects_have_unique_keys(doc: ReferenceDoc) -> bool {
    fn keys_unique(v: &Value) -> bool {
        match v {
            Value::Array(a) => a.iter().all(keys_unique),
            Value::Object(m) => {
                let mut seen = Vec::new();
                for (k, v) in m {
                    if seen.contains(&k) || !keys_unique(v) {
                        return false;
                    }
                    seen.push(k);
                }
                true
            }
            _ => true,
        }
    }
    let text = reference::to_string(&doc.0).unwrap();
    parse(&text).as_ref().is_ok_and(|v| keys_unique(v))
}
