use ethpm_manifest::{canon, v2};
use serde_json::Value;

#[test]
fn key_order_does_not_change_the_output() {
    let a: Value = serde_json::from_str(
        r#"{
            "version": "1.0.0",
            "package_name": "owned",
            "manifest_version": "2",
            "meta": { "license": "MIT", "authors": ["a", "b"] }
        }"#,
    )
    .unwrap();
    let b: Value = serde_json::from_str(
        r#"{
            "meta": { "authors": ["a", "b"], "license": "MIT" },
            "manifest_version": "2",
            "package_name": "owned",
            "version": "1.0.0"
        }"#,
    )
    .unwrap();

    assert_eq!(canon::to_string(&a).unwrap(), canon::to_string(&b).unwrap());
}

#[test]
fn output_is_sorted_and_compact() {
    let value: Value = serde_json::from_str(
        r#"{ "b": { "d": 2, "c": [1, 2] }, "a": "x" }"#,
    )
    .unwrap();
    assert_eq!(
        canon::to_string(&value).unwrap(),
        r#"{"a":"x","b":{"c":[1,2],"d":2}}"#
    );
}

#[test]
fn array_order_is_preserved() {
    let value: Value = serde_json::from_str(r#"{ "offsets": [5, 3, 9] }"#).unwrap();
    assert_eq!(canon::to_string(&value).unwrap(), r#"{"offsets":[5,3,9]}"#);
}

#[test]
fn written_manifests_render_identically_across_producers() {
    // Two structurally equal manifests built by different paths: one
    // parsed from text, one written from the model.
    let json = r#"{"manifest_version":"2","package_name":"owned","version":"1.0.0","sources":{"./contracts/Owned.sol":"ipfs://QmOwned"}}"#;
    let package = v2::from_str(json).unwrap();
    let from_model = canon::to_string(&v2::write(&package)).unwrap();
    let from_text: Value = serde_json::from_str(json).unwrap();
    assert_eq!(from_model, canon::to_string(&from_text).unwrap());
}

#[test]
fn canonical_value_matches_canonical_text() {
    let json = r#"{"manifest_version":"2","package_name":"owned","version":"1.0.0"}"#;
    let package = v2::from_str(json).unwrap();
    let value = canon::to_value(&v2::write(&package)).unwrap();
    assert_eq!(serde_json::from_str::<Value>(json).unwrap(), value);
}
