use easylogin_types::{AttributeBag, DirectoryValue};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn insert_replaces_existing_key() {
    let mut bag = AttributeBag::new();
    assert!(bag.insert("uid", "501").is_none());
    let previous = bag.insert("uid", "502");
    assert_eq!(previous, Some(DirectoryValue::from("501")));
    assert_eq!(bag.len(), 1);
}

#[test]
fn insertion_order_is_irrelevant() {
    let a: AttributeBag = [("b", "2"), ("a", "1")].into_iter().collect();
    let b: AttributeBag = [("a", "1"), ("b", "2")].into_iter().collect();
    assert_eq!(a, b);
    assert_eq!(a.keys().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn from_json_object() {
    let bag = AttributeBag::from_json(json!({
        "shortname": "jdoe",
        "uid": 501,
        "email": ["j@x.com", "jd@x.com"],
    }))
    .unwrap();
    assert_eq!(bag.get("shortname"), Some(&DirectoryValue::from("jdoe")));
    assert_eq!(bag.get("uid"), Some(&DirectoryValue::from("501")));
    assert_eq!(
        bag.get("email"),
        Some(&DirectoryValue::list(["j@x.com", "jd@x.com"]))
    );
}

#[test]
fn from_json_rejects_non_objects() {
    assert!(AttributeBag::from_json(json!(["a"])).is_err());
    assert!(AttributeBag::from_json(json!("a")).is_err());
}

#[test]
fn from_json_str_reports_syntax_errors() {
    let err = AttributeBag::from_json_str("{not json").unwrap_err();
    assert!(err.to_string().contains("serialization"));
}

#[test]
fn remove_and_contains() {
    let mut bag: AttributeBag = [("uid", "501")].into_iter().collect();
    assert!(bag.contains_key("uid"));
    assert_eq!(bag.remove("uid"), Some(DirectoryValue::from("501")));
    assert!(bag.is_empty());
}

#[test]
fn serde_roundtrip_keeps_binary_bytes() {
    let mut bag = AttributeBag::new();
    bag.insert("picture", vec![0u8, 159, 146, 150]);
    let json = serde_json::to_string(&bag).unwrap();
    let parsed: AttributeBag = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, bag);
}
