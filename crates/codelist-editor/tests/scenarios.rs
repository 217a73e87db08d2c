//! End-to-end behavior on small documents.

use serde_json::json;

use codelist_editor::{Mutation, apply_mutation};
use codelist_model::{CodeList, CodeValue, EditorOptions, ValueType};
use codelist_transform::{infer_value_type, update_code_list_value_type};

fn parse(document: serde_json::Value) -> CodeList {
    serde_json::from_value(document).unwrap()
}

#[test]
fn numeric_strings_become_numbers() {
    let list = parse(json!([
        {"value": "2.75", "label": "Pi"},
        {"value": "42", "label": "FortyTwo"}
    ]));
    assert_eq!(infer_value_type(&list), Some(ValueType::Number));

    let normalized = update_code_list_value_type(&list);
    assert_eq!(
        serde_json::to_value(&normalized).unwrap(),
        json!([
            {"value": 2.75, "label": "Pi"},
            {"value": 42, "label": "FortyTwo"}
        ])
    );
}

#[test]
fn boolean_strings_become_booleans() {
    let list = parse(json!([
        {"value": "true", "label": "Yes"},
        {"value": "false", "label": "No"}
    ]));
    let normalized = update_code_list_value_type(&list);
    assert_eq!(normalized[0].value, CodeValue::Bool(true));
    assert_eq!(normalized[1].value, CodeValue::Bool(false));
}

#[test]
fn mixed_boolean_and_numeric_strings_stay_strings() {
    let list = parse(json!([
        {"value": "true", "label": ""},
        {"value": "0", "label": ""}
    ]));
    assert_eq!(infer_value_type(&list), Some(ValueType::String));
    assert_eq!(update_code_list_value_type(&list), list);
}

#[test]
fn removing_middle_row_keeps_order() {
    let list = parse(json!([
        {"value": "a", "label": "A"},
        {"value": "b", "label": "B"},
        {"value": "c", "label": "C"}
    ]));
    let removed = apply_mutation(
        &list,
        &Mutation::RemoveItem { index: 1 },
        &EditorOptions::default(),
    )
    .unwrap();
    assert_eq!(
        removed.values().cloned().collect::<Vec<_>>(),
        vec![CodeValue::from("a"), CodeValue::from("c")]
    );
}

#[test]
fn mutations_deserialize_from_editor_events() {
    let list = parse(json!([{"value": "1", "label": "One"}]));
    let mutation: Mutation =
        serde_json::from_value(json!({"kind": "changeValue", "index": 0, "value": "2"})).unwrap();
    let changed = apply_mutation(&list, &mutation, &EditorOptions::default()).unwrap();
    assert_eq!(changed[0].value, CodeValue::Num(2.0));
}
