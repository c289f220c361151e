//! Serialized form of `DynoSize` (requires the `serde` feature).
#![cfg(feature = "serde")]

use scheroku_types::DynoSize;

#[test]
fn serializes_as_size_code() {
    assert_eq!(serde_json::to_string(&DynoSize::X1).unwrap(), "\"1X\"");
    assert_eq!(serde_json::to_string(&DynoSize::X2).unwrap(), "\"2X\"");
    assert_eq!(serde_json::to_string(&DynoSize::PX).unwrap(), "\"PX\"");
}

#[test]
fn deserializes_from_size_code() {
    let d: DynoSize = serde_json::from_str("\"2X\"").unwrap();
    assert_eq!(d, DynoSize::X2);
}

#[test]
fn variant_name_is_not_a_serialized_form() {
    assert!(serde_json::from_str::<DynoSize>("\"X1\"").is_err());
    assert!(serde_json::from_str::<DynoSize>("\"1x\"").is_err());
}

#[test]
fn list_serializes_in_order() {
    let all: Vec<DynoSize> = DynoSize::iter().collect();
    assert_eq!(serde_json::to_string(&all).unwrap(), r#"["1X","2X","PX"]"#);
}
