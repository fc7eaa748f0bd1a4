//! Attribute resolver and schema semantics

use crate::core::attribute::{
    AttributeBag, AttributeDescriptor, AttributeSchema, AttributeType, AttributeValue,
};

/// Absent keys resolve to nothing, whatever else the bag holds
#[test]
fn test_resolve_absent_key_is_none() {
    let bag = AttributeBag::new().with("present", "value");
    assert!(bag.resolve("absent").is_none());
}

/// Presence, not truthiness, governs the fallback: explicit `false`, `0`
/// and empty strings are returned as-is
#[test]
fn test_resolve_returns_falsy_values_verbatim() {
    let bag = AttributeBag::new()
        .with("flag", false)
        .with("count", 0i64)
        .with("label", "");

    assert_eq!(bag.resolve("flag"), Some(&AttributeValue::Bool(false)));
    assert_eq!(bag.resolve("count"), Some(&AttributeValue::Integer(0)));
    assert_eq!(
        bag.resolve("label"),
        Some(&AttributeValue::String(String::new()))
    );
}

#[test]
fn test_resolve_does_not_consult_defaults() {
    let schema = AttributeSchema::new().declare(
        "spacing",
        AttributeDescriptor::new(AttributeType::String).with_default("normal"),
    );
    let bag = AttributeBag::new();

    // Plain resolution is presence-based; the schema-aware lookup applies
    // the declared default.
    assert!(bag.resolve("spacing").is_none());
    assert_eq!(schema.str_of(&bag, "spacing"), Some("normal"));
}

#[test]
fn test_value_of_prefers_explicit_falsy_value_over_default() {
    let schema = AttributeSchema::new().declare(
        "sectionWrapperEnabled",
        AttributeDescriptor::new(AttributeType::Boolean).with_default(true),
    );
    let bag = AttributeBag::new().with("sectionWrapperEnabled", false);

    assert_eq!(
        schema.value_of(&bag, "sectionWrapperEnabled"),
        Some(&AttributeValue::Bool(false))
    );
    assert!(!schema.is_truthy(&bag, "sectionWrapperEnabled"));
}

/// Merging a block schema over the section base never drops a base default
/// unless the block redefines the key
#[test]
fn test_merge_preserves_base_defaults() {
    let base = AttributeSchema::new()
        .declare(
            "align",
            AttributeDescriptor::new(AttributeType::String).with_default("full"),
        )
        .declare(
            "sectionVerticalSpacing",
            AttributeDescriptor::new(AttributeType::String).with_default("normal"),
        );
    let block = AttributeSchema::new()
        .declare(
            "align",
            AttributeDescriptor::new(AttributeType::String).with_default("wide"),
        )
        .declare("custom", AttributeDescriptor::new(AttributeType::Boolean));

    let merged = base.merged_with(&block);

    assert_eq!(
        merged.get("align").unwrap().default,
        Some(AttributeValue::from("wide"))
    );
    assert_eq!(
        merged.get("sectionVerticalSpacing").unwrap().default,
        Some(AttributeValue::from("normal"))
    );
    assert!(merged.contains("custom"));
    assert_eq!(merged.len(), 3);
}

#[test]
fn test_merge_keeps_base_declaration_order() {
    let base = AttributeSchema::new()
        .declare("a", AttributeDescriptor::new(AttributeType::String))
        .declare("b", AttributeDescriptor::new(AttributeType::String));
    let block = AttributeSchema::new()
        .declare("a", AttributeDescriptor::new(AttributeType::Boolean))
        .declare("c", AttributeDescriptor::new(AttributeType::String));

    let merged = base.merged_with(&block);
    let order: Vec<&str> = merged.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(order, vec!["a", "b", "c"]);
}

#[test]
fn test_bag_iteration_preserves_insertion_order() {
    let bag = AttributeBag::new()
        .with("first", 1i64)
        .with("second", 2i64)
        .with("third", 3i64);

    let keys: Vec<&str> = bag.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["first", "second", "third"]);
}

#[test]
fn test_attribute_value_accessors() {
    assert_eq!(AttributeValue::from(1.5).as_number(), Some(1.5));
    assert_eq!(AttributeValue::from(3i64).as_number(), Some(3.0));
    assert_eq!(AttributeValue::from(3i64).as_integer(), Some(3));
    assert_eq!(AttributeValue::from("x").as_string(), Some("x"));
    assert_eq!(AttributeValue::from(true).as_bool(), Some(true));
    assert!(AttributeValue::Null.is_null());
    assert_eq!(AttributeValue::from("x").as_bool(), None);
}

#[test]
fn test_nested_object_round_trips_through_json() {
    let json = r#"{"backgroundImageFocalPoint": {"x": 0.25, "y": 0.75}}"#;
    let bag: AttributeBag = serde_json::from_str(json).unwrap();

    let focal = bag
        .resolve("backgroundImageFocalPoint")
        .and_then(AttributeValue::as_object)
        .unwrap();
    assert_eq!(focal.get("x").and_then(AttributeValue::as_number), Some(0.25));

    let back = serde_json::to_value(&bag).unwrap();
    assert_eq!(back["backgroundImageFocalPoint"]["y"], 0.75);
}
