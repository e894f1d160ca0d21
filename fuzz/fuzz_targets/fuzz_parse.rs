#![no_main]
use arbitrary::Arbitrary;
use jsonprism::{Value, parse};
use libfuzzer_sys::fuzz_target;
use serde_json::{Map, Value as JsonValue};

#[derive(Debug)]
struct ArbitraryValue(JsonValue);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let node_type = u.choose_index(21)?;
        let value = match node_type {
            0 => JsonValue::Null,
            1 => JsonValue::Bool(u.arbitrary()?),
            2 => {
                let n: f64 = u.arbitrary()?;
                JsonValue::Number(
                    serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?,
                )
            }
            3..=10 => JsonValue::String(u.arbitrary()?),
            11..=15 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                JsonValue::Array(elems.into_iter().map(|v| v.0).collect())
            }
            16..=20 => {
                let m: Vec<(String, ArbitraryValue)> = u.arbitrary()?;
                JsonValue::Object(Map::from_iter(m.into_iter().map(|(k, v)| (k, v.0))))
            }
            _ => Err(arbitrary::Error::IncorrectFormat)?,
        };
        Ok(ArbitraryValue(value))
    }
}

fn expected_tree(v: &JsonValue) -> Value {
    match v {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Boolean(*b),
        JsonValue::Number(n) => Value::Number(n.as_f64().expect("generated from f64")),
        JsonValue::String(s) => Value::String(s.clone()),
        JsonValue::Array(a) => Value::Array(a.iter().map(expected_tree).collect()),
        JsonValue::Object(m) => Value::Object(
            m.iter()
                .map(|(k, v)| (k.clone(), expected_tree(v)))
                .collect(),
        ),
    }
}

fn run(data: &[u8]) {
    // Arbitrary bytes: parsing must never panic, and a reported failure must
    // point inside the input.
    let text = String::from_utf8_lossy(data);
    if let Err(err) = parse(&text) {
        assert!(err.offset <= text.len());
        assert!(text.is_char_boundary(err.offset));
    }

    // A document produced by the reference serializer must parse to the
    // structurally equal tree.
    if let Ok(value) = ArbitraryValue::arbitrary(&mut arbitrary::Unstructured::new(data)) {
        let serialized = serde_json::to_string(&value.0).expect("serializable document");
        let parsed = parse(&serialized).expect("serialized document must parse");
        assert_eq!(parsed, expected_tree(&value.0));
    }
}

fuzz_target!(|data: &[u8]| run(data));
