//! Property tests for the value and item decoders.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use ddbjson::{decode_item, decode_value, AttributeValue, ErrorKind};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn leaf() -> impl Strategy<Value = AttributeValue> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 0..16).prop_map(AttributeValue::B),
        any::<bool>().prop_map(AttributeValue::Bool),
        prop::collection::vec(prop::collection::vec(any::<u8>(), 0..8), 0..4)
            .prop_map(AttributeValue::Bs),
        "-?[0-9]{1,24}(\\.[0-9]{1,12})?".prop_map(AttributeValue::N),
        prop::collection::vec("[0-9]{1,6}", 0..4).prop_map(AttributeValue::Ns),
        any::<bool>().prop_map(AttributeValue::Null),
        any::<String>().prop_map(AttributeValue::S),
        prop::collection::vec(any::<String>(), 0..4).prop_map(AttributeValue::Ss),
    ]
}

fn attribute_value() -> impl Strategy<Value = AttributeValue> {
    leaf().prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(AttributeValue::L),
            prop::collection::hash_map("[a-z_]{1,8}", inner, 0..4).prop_map(AttributeValue::M),
        ]
    })
}

/// Test-side rendering of a value in its wire form.
fn to_wire(value: &AttributeValue) -> Value {
    match value {
        AttributeValue::B(bytes) => json!({ "B": STANDARD.encode(bytes) }),
        AttributeValue::Bool(b) => json!({ "BOOL": b }),
        AttributeValue::Bs(blobs) => {
            let encoded: Vec<String> = blobs.iter().map(|b| STANDARD.encode(b)).collect();
            json!({ "BS": encoded })
        }
        AttributeValue::L(items) => {
            json!({ "L": items.iter().map(to_wire).collect::<Vec<_>>() })
        }
        AttributeValue::M(map) => {
            let members: Map<String, Value> =
                map.iter().map(|(k, v)| (k.clone(), to_wire(v))).collect();
            json!({ "M": members })
        }
        AttributeValue::N(n) => json!({ "N": n }),
        AttributeValue::Ns(ns) => json!({ "NS": ns }),
        AttributeValue::Null(flag) => json!({ "NULL": flag }),
        AttributeValue::S(s) => json!({ "S": s }),
        AttributeValue::Ss(ss) => json!({ "SS": ss }),
    }
}

proptest! {
    #[test]
    fn decodes_wire_form_to_same_tree(value in attribute_value()) {
        let bytes = serde_json::to_vec(&to_wire(&value)).unwrap();
        prop_assert_eq!(decode_value(&bytes).unwrap(), value);
    }

    #[test]
    fn decoding_is_idempotent(value in attribute_value()) {
        let bytes = serde_json::to_vec(&to_wire(&value)).unwrap();
        prop_assert_eq!(decode_value(&bytes).unwrap(), decode_value(&bytes).unwrap());
    }

    #[test]
    fn numbers_are_kept_verbatim(text in ".*") {
        let bytes = serde_json::to_vec(&json!({ "N": &text })).unwrap();
        prop_assert_eq!(decode_value(&bytes).unwrap(), AttributeValue::N(text));
    }

    #[test]
    fn one_bad_blob_fails_the_whole_set(
        blobs in prop::collection::vec(prop::collection::vec(any::<u8>(), 1..8), 0..6),
        position in any::<prop::sample::Index>(),
    ) {
        let mut encoded: Vec<String> = blobs.iter().map(|b| STANDARD.encode(b)).collect();
        let bad = position.index(encoded.len() + 1);
        encoded.insert(bad, "!!!".to_string());

        let bytes = serde_json::to_vec(&json!({ "BS": encoded })).unwrap();
        let err = decode_value(&bytes).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Value);
        prop_assert_eq!(err.path().to_string(), format!("$[{bad}]"));
    }

    #[test]
    fn one_bad_list_member_fails_the_whole_list(
        values in prop::collection::vec(leaf(), 0..6),
        position in any::<prop::sample::Index>(),
    ) {
        let mut members: Vec<Value> = values.iter().map(to_wire).collect();
        let bad = position.index(members.len() + 1);
        members.insert(bad, json!({ "S": "a", "N": "1" }));

        let bytes = serde_json::to_vec(&json!({ "L": members })).unwrap();
        let err = decode_value(&bytes).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Envelope);
        prop_assert_eq!(err.path().to_string(), format!("$[{bad}]"));
    }

    #[test]
    fn item_has_one_entry_per_attribute(
        attributes in prop::collection::hash_map("[a-zA-Z0-9_]{1,12}", attribute_value(), 0..8),
    ) {
        let body: Map<String, Value> =
            attributes.iter().map(|(k, v)| (k.clone(), to_wire(v))).collect();
        let bytes = serde_json::to_vec(&json!({ "Item": body })).unwrap();

        let item = decode_item(&bytes).unwrap();
        prop_assert_eq!(item, attributes);
    }
}
