use chrono::{TimeZone, Utc};
use easylogin_types::{AttributeBag, Describe, DirectoryValue, describe_debug, describe_object};
use proptest::prelude::*;
use std::collections::BTreeMap;

#[test]
fn string_is_quoted() {
    assert_eq!(describe_object(&DirectoryValue::from("jdoe")), "\"jdoe\"");
}

#[test]
fn control_characters_stay_on_one_line() {
    let out = describe_object(&DirectoryValue::from("a\nb"));
    assert_eq!(out, "\"a\\nb\"");
}

#[test]
fn short_bytes_are_hex() {
    let out = describe_object(&DirectoryValue::Bytes(vec![0xde, 0xad, 0xbe, 0xef]));
    assert_eq!(out, "<4 bytes deadbeef>");
}

#[test]
fn long_bytes_are_elided() {
    let out = describe_object(&DirectoryValue::Bytes(vec![0xab; 40]));
    assert!(out.starts_with("<40 bytes abab"));
    assert!(out.ends_with("...>"));
}

#[test]
fn date_is_rfc3339_utc() {
    let date = Utc.with_ymd_and_hms(2017, 6, 5, 10, 30, 0).unwrap();
    assert_eq!(describe_object(&DirectoryValue::Date(date)), "2017-06-05T10:30:00Z");
}

#[test]
fn list_and_bag_nest() {
    let mut inner = BTreeMap::new();
    inner.insert("salt".to_string(), DirectoryValue::Bytes(vec![1, 2]));
    let value = DirectoryValue::list([DirectoryValue::from("a"), DirectoryValue::Bag(inner)]);
    assert_eq!(describe_object(&value), "[\"a\", {salt: <2 bytes 0102>}]");
}

#[test]
fn attribute_bag_renders_sorted() {
    let bag: AttributeBag = [("uid", "501"), ("RecordName", "jdoe")].into_iter().collect();
    assert_eq!(bag.describe(), "{RecordName: \"jdoe\", uid: \"501\"}");
}

#[test]
fn option_and_slices() {
    let none: Option<DirectoryValue> = None;
    assert_eq!(none.describe(), "(none)");
    let values = vec![DirectoryValue::from("x"), DirectoryValue::from("y")];
    assert_eq!(values.describe(), "[\"x\", \"y\"]");
}

#[test]
fn debug_fallback_is_single_line() {
    #[derive(Debug)]
    #[allow(dead_code)]
    struct Opaque {
        a: u32,
        b: Vec<&'static str>,
    }
    let out = describe_debug(&Opaque { a: 1, b: vec!["x"] });
    assert_eq!(out, "Opaque { a: 1, b: [\"x\"] }");
}

#[test]
fn bag_keys_with_control_characters_stay_on_one_line() {
    let bag: AttributeBag = [("uid\nINJECTED", "x")].into_iter().collect();
    let out = describe_object(&bag);
    assert!(!out.contains('\n'));
    assert_eq!(out, r#"{uid\nINJECTED: "x"}"#);

    let nested = DirectoryValue::Bag([("a\r\tb".to_string(), DirectoryValue::from("y"))].into_iter().collect());
    assert_eq!(describe_object(&nested), r#"{a\r\tb: "y"}"#);
}

fn value_strategy() -> impl Strategy<Value = DirectoryValue> {
    let leaf = prop_oneof![
        any::<String>().prop_map(DirectoryValue::String),
        prop::collection::vec(any::<u8>(), 0..40).prop_map(DirectoryValue::Bytes),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(DirectoryValue::List),
            prop::collection::btree_map(any::<String>(), inner, 0..4).prop_map(DirectoryValue::Bag),
        ]
    })
}

proptest! {
    /// Descriptions never span lines and are stable across calls.
    #[test]
    fn description_is_single_line_and_deterministic(value in value_strategy()) {
        let first = describe_object(&value);
        prop_assert!(!first.contains('\n'));
        prop_assert_eq!(first, describe_object(&value.clone()));
    }
}
