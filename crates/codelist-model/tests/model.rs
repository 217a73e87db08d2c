#![allow(missing_docs)]

use codelist_model::{CodeList, CodeListItem, CodeValue, LocalizedText, TextProperty, TextValue};

const DOCUMENT: &str = r#"[
  { "value": "NO", "label": { "nb": "Norge", "en": "Norway" }, "description": "Kingdom" },
  { "value": 47, "label": "Phone prefix" },
  { "value": true, "label": "Yes", "helpText": { "en": "Tick to confirm" } }
]"#;

#[test]
fn test_code_list_document_parsing() {
    let list: CodeList = serde_json::from_str(DOCUMENT).expect("parse code list");
    assert_eq!(list.len(), 3);

    assert_eq!(list[0].value, CodeValue::from("NO"));
    assert_eq!(
        list[0].label,
        TextValue::Localized(LocalizedText::from_iter([("nb", "Norge"), ("en", "Norway")]))
    );
    assert_eq!(list[0].description, Some(TextValue::plain("Kingdom")));
    assert_eq!(list[0].help_text, None);

    assert_eq!(list[1].value, CodeValue::Num(47.0));
    assert_eq!(list[2].value, CodeValue::Bool(true));
    assert!(list[2].text(TextProperty::HelpText).is_some());
}

#[test]
fn test_code_list_order_is_preserved() {
    let list: CodeList = serde_json::from_str(DOCUMENT).expect("parse code list");
    let json = serde_json::to_string(&list).expect("serialize code list");
    let reparsed: CodeList = serde_json::from_str(&json).expect("reparse code list");
    assert_eq!(list, reparsed);
    assert_eq!(
        reparsed.values().map(CodeValue::as_text).collect::<Vec<_>>(),
        vec!["NO", "47", "true"]
    );
}

#[test]
fn test_label_resolution_uses_fallback() {
    let list: CodeList = serde_json::from_str(DOCUMENT).expect("parse code list");
    assert_eq!(list[0].label.resolve("en", Some("nb")), "Norway");
    assert_eq!(list[0].label.resolve("nn", Some("nb")), "Norge");
    assert_eq!(list[0].label.resolve("nn", None), "");
    assert_eq!(list[1].label.resolve("nn", None), "Phone prefix");
}

#[test]
fn test_item_builder() {
    let item = CodeListItem::new(1.0, "One")
        .with_description("First")
        .with_help_text("Help");
    assert_eq!(item.text(TextProperty::Description), Some(&TextValue::plain("First")));
    assert_eq!(item.text(TextProperty::HelpText), Some(&TextValue::plain("Help")));
    assert_eq!(TextProperty::HelpText.label(), "helpText");
}

mod properties {
    use proptest::prelude::*;

    use codelist_model::CodeValue;

    proptest! {
        #[test]
        fn integral_numbers_print_like_integers(n in -1_000_000_000i64..1_000_000_000) {
            #[allow(clippy::cast_precision_loss)]
            let value = CodeValue::Num(n as f64);
            prop_assert_eq!(value.as_text(), n.to_string());
            prop_assert_eq!(serde_json::to_string(&value).unwrap(), n.to_string());
        }

        #[test]
        fn string_values_print_verbatim(text in ".*") {
            prop_assert_eq!(CodeValue::from(text.as_str()).as_text(), text);
        }
    }
}
