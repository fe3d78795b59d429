//! Property-based tests for the encode/decode round trip.
//!
//! Strategies stay inside what the format can carry: strings avoid the
//! single quote (the writer rejects it), floats are finite, and dynamic
//! trees avoid `Bool` (which reads back as an integer by design).

use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use vimson::{from_str, to_string, Dict, Generator, Parser, Value};

fn roundtrip<T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug>(
    value: &T,
) -> bool {
    match to_string(value) {
        Ok(serialized) => match from_str::<T>(&serialized) {
            Ok(deserialized) => *value == deserialized,
            Err(e) => {
                eprintln!("Deserialize failed: {}", e);
                eprintln!("Serialized was: {}", serialized);
                false
            }
        },
        Err(e) => {
            eprintln!("Serialize failed: {}", e);
            false
        }
    }
}

fn quote_free_string() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.,:\\\\\\-]{0,24}"
}

fn leaf_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Int),
        prop::num::f64::NORMAL.prop_map(Value::Float),
        quote_free_string().prop_map(Value::Str),
    ]
}

fn value_tree() -> impl Strategy<Value = Value> {
    leaf_value().prop_recursive(3, 24, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::List),
            prop::collection::vec((quote_free_string(), inner), 0..6).prop_map(|entries| {
                let mut dict = Dict::new();
                for (key, value) in entries {
                    dict.insert(key, value);
                }
                Value::Dict(dict)
            }),
        ]
    })
}

proptest! {
    #[test]
    fn prop_i32(n in any::<i32>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_i64(n in any::<i64>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_u32(n in any::<u32>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_bool(b in any::<bool>()) {
        prop_assert!(roundtrip(&b));
    }

    #[test]
    fn prop_finite_f64(n in prop::num::f64::NORMAL) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_quote_free_string(s in quote_free_string()) {
        prop_assert!(roundtrip(&s));
    }

    #[test]
    fn prop_vec_i32(v in prop::collection::vec(any::<i32>(), 0..20)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_tuple_i32_bool(t in (any::<i32>(), any::<bool>())) {
        prop_assert!(roundtrip(&t));
    }

    // write_value followed by parse reproduces the tree.
    #[test]
    fn prop_value_tree(value in value_tree()) {
        let mut generator = Generator::new();
        generator.write_value(&value).unwrap();
        let text = generator.into_inner();
        let parsed = Parser::from_str(&text).parse().unwrap();
        prop_assert_eq!(parsed, value);
    }

    // Extra spaces and tabs around tokens never change the parsed result.
    #[test]
    fn prop_whitespace_is_inert(v in prop::collection::vec(any::<i64>(), 0..6)) {
        let plain: String = format!(
            "[{}]",
            v.iter().map(|n| format!("{},", n)).collect::<String>()
        );
        let padded: String = format!(
            "[ \t{}]",
            v.iter().map(|n| format!(" {} ,\t", n)).collect::<String>()
        );
        let a = Parser::from_str(&plain).parse().unwrap();
        let b = Parser::from_str(&padded).parse().unwrap();
        prop_assert_eq!(a, b);
    }
}
