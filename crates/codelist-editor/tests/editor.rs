//! Integration tests for the editing session.

use codelist_editor::{ApplyOutcome, CodeListEditor, CodeListHandler, Mutation, TextEdit};
use codelist_model::{
    CodeList, CodeListError, CodeListItem, CodeValue, EditorOptions, LocalizedText,
    TextProperty, ValueError, ValueErrorMap, ValueType,
};

#[derive(Default)]
struct Recorder {
    changes: Vec<CodeList>,
    invalid: Vec<ValueErrorMap>,
    blurs: Vec<CodeList>,
}

impl CodeListHandler for Recorder {
    fn on_change(&mut self, list: &CodeList) {
        self.changes.push(list.clone());
    }

    fn on_invalid(&mut self, errors: &ValueErrorMap) {
        self.invalid.push(errors.clone());
    }

    fn on_blur_any(&mut self, list: &CodeList) {
        self.blurs.push(list.clone());
    }
}

fn code_list_without_duplicates() -> CodeList {
    vec![
        CodeListItem::new("test1", "Test 1")
            .with_description("Test 1 description")
            .with_help_text("Test 1 help text"),
        CodeListItem::new("test2", "Test 2").with_description("Test 2 description"),
        CodeListItem::new("test3", "Test 3"),
    ]
    .into()
}

fn code_list_with_duplicates() -> CodeList {
    vec![
        CodeListItem::new("duplicate", "Test 1"),
        CodeListItem::new("duplicate", "Test 2"),
        CodeListItem::new("unique", "Test 3"),
    ]
    .into()
}

fn editor(list: CodeList) -> CodeListEditor<Recorder> {
    CodeListEditor::new(list, EditorOptions::default(), Recorder::default())
}

fn change_value(index: usize, value: &str) -> Mutation {
    Mutation::ChangeValue {
        index,
        value: value.to_string(),
    }
}

#[test]
fn test_value_change_notifies_host() {
    let mut editor = editor(code_list_without_duplicates());
    let outcome = editor.apply(&change_value(0, "new text")).unwrap();

    assert_eq!(outcome, ApplyOutcome::Committed);
    let recorder = editor.handler();
    assert_eq!(recorder.changes.len(), 1);
    assert_eq!(recorder.changes[0][0].value, CodeValue::from("new text"));
    assert_eq!(recorder.changes[0][1], code_list_without_duplicates()[1]);
    assert!(recorder.invalid.is_empty());
}

#[test]
fn test_text_changes_notify_host() {
    let mut editor = editor(code_list_without_duplicates());
    for property in TextProperty::ALL {
        editor
            .apply(&Mutation::ChangeText {
                index: 0,
                property,
                edit: TextEdit::plain("new text"),
            })
            .unwrap();
    }

    let last = editor.handler().changes.last().unwrap();
    assert_eq!(editor.handler().changes.len(), 3);
    assert_eq!(last[0].label.resolve("nb", None), "new text");
    assert_eq!(
        last[0].description.as_ref().map(|text| text.resolve("nb", None)),
        Some("new text")
    );
    assert_eq!(
        last[0].help_text.as_ref().map(|text| text.resolve("nb", None)),
        Some("new text")
    );
}

#[test]
fn test_add_and_remove_notify_host() {
    let mut editor = editor(code_list_without_duplicates());
    editor.apply(&Mutation::AddItem).unwrap();
    assert_eq!(editor.committed().len(), 4);
    assert_eq!(editor.committed()[3], CodeListItem::new("", ""));

    editor.apply(&Mutation::RemoveItem { index: 0 }).unwrap();
    let committed = editor.committed();
    assert_eq!(committed.len(), 3);
    assert_eq!(committed[0], code_list_without_duplicates()[1]);
    assert_eq!(editor.handler().changes.len(), 2);
}

#[test]
fn test_initial_duplicates_are_flagged_without_callbacks() {
    let editor = editor(code_list_with_duplicates());
    assert!(editor.has_errors());
    assert_eq!(editor.errors().get(0), Some(ValueError::DuplicateValue));
    assert_eq!(editor.errors().get(1), Some(ValueError::DuplicateValue));
    assert_eq!(editor.errors().get(2), None);
    assert!(editor.handler().changes.is_empty());
    assert!(editor.handler().invalid.is_empty());
}

#[test]
fn test_invalid_list_is_withheld() {
    let mut editor = editor(code_list_with_duplicates());
    let outcome = editor.apply(&change_value(2, "new value")).unwrap();

    assert_eq!(outcome, ApplyOutcome::Rejected);
    assert!(editor.handler().changes.is_empty());
    assert_eq!(editor.handler().invalid.len(), 1);
    // The user still sees what was typed
    assert_eq!(editor.draft()[2].value, CodeValue::from("new value"));
    // The host state is not advanced
    assert_eq!(editor.committed(), &code_list_with_duplicates());
}

#[test]
fn test_fixing_duplicates_commits_without_on_invalid() {
    let mut editor = editor(code_list_with_duplicates());
    let outcome = editor.apply(&change_value(1, "new unique value")).unwrap();

    assert_eq!(outcome, ApplyOutcome::Committed);
    assert!(editor.handler().invalid.is_empty());
    assert_eq!(editor.handler().changes.len(), 1);
    assert!(editor.is_valid());
}

#[test]
fn test_closure_handler_ignores_invalid_lists() {
    let mut changes = 0;
    let mut editor = CodeListEditor::new(
        code_list_with_duplicates(),
        EditorOptions::default(),
        |_: &CodeList| changes += 1,
    );
    assert_eq!(
        editor.apply(&change_value(2, "x")).unwrap(),
        ApplyOutcome::Rejected
    );
    assert_eq!(
        editor.apply(&change_value(0, "y")).unwrap(),
        ApplyOutcome::Committed
    );
    drop(editor);
    assert_eq!(changes, 1);
}

#[test]
fn test_blur_reports_current_draft() {
    let mut editor = editor(code_list_without_duplicates());
    editor.apply(&change_value(0, "new text")).unwrap();
    editor.blur();

    let recorder = editor.handler();
    assert_eq!(recorder.blurs.len(), 1);
    assert_eq!(recorder.blurs[0][0].value, CodeValue::from("new text"));
}

#[test]
fn test_out_of_range_leaves_session_unchanged() {
    let mut editor = editor(code_list_without_duplicates());
    let error = editor.apply(&Mutation::RemoveItem { index: 7 }).unwrap_err();

    assert!(matches!(
        error,
        CodeListError::IndexOutOfRange { index: 7, len: 3 }
    ));
    assert_eq!(editor.draft(), &code_list_without_duplicates());
    assert!(editor.handler().changes.is_empty());
}

#[test]
fn test_reset_replaces_state() {
    let mut editor = editor(code_list_with_duplicates());
    editor.reset(code_list_without_duplicates());
    assert!(editor.is_valid());
    assert_eq!(editor.draft().len(), 3);
    assert_eq!(editor.committed(), &code_list_without_duplicates());
}

#[test]
fn test_committed_list_is_normalized() {
    let list: CodeList = vec![CodeListItem::new("3.14", "Pi"), CodeListItem::new("42", "FortyTwo")].into();
    let mut editor = editor(list);
    assert_eq!(editor.value_type(), Some(ValueType::Number));

    editor.apply(&change_value(1, "43")).unwrap();
    let committed = editor.committed();
    assert!(matches!(committed[0].value, CodeValue::Num(_)));
    assert_eq!(committed[1].value, CodeValue::Num(43.0));
    // The draft keeps the raw text
    assert_eq!(editor.draft()[1].value, CodeValue::from("43"));
}

#[test]
fn test_display_text_uses_fallback_language() {
    let list: CodeList = vec![CodeListItem::new(
        "no",
        LocalizedText::from_iter([("nb", "Nei"), ("en", "No")]),
    )]
    .into();
    let editor = editor(list);

    assert_eq!(editor.display_text(0, TextProperty::Label, "en"), Some("No"));
    assert_eq!(editor.display_text(0, TextProperty::Label, "nn"), Some("Nei"));
    assert_eq!(editor.display_text(0, TextProperty::Description, "en"), None);
    assert_eq!(editor.display_text(5, TextProperty::Label, "en"), None);

    let strict = CodeListEditor::new(editor.draft().clone(), EditorOptions::strict(), Recorder::default());
    assert_eq!(strict.display_text(0, TextProperty::Label, "nn"), Some(""));
}

fn numbers() -> CodeList {
    vec![
        CodeListItem::new(CodeValue::Num(1.0), "One"),
        CodeListItem::new(CodeValue::Num(2.0), "Two"),
    ]
    .into()
}

fn declared_number(options: EditorOptions) -> EditorOptions {
    options.with_value_type(Some(ValueType::Number))
}

#[test]
fn test_strict_type_keeps_partial_input_in_draft() {
    let mut editor = CodeListEditor::new(
        numbers(),
        declared_number(EditorOptions::strict()),
        Recorder::default(),
    );
    assert!(editor.is_valid());

    let outcome = editor.apply(&change_value(0, "-")).unwrap();
    assert_eq!(outcome, ApplyOutcome::Rejected);
    assert_eq!(editor.draft()[0].value, CodeValue::from("-"));
    assert_eq!(editor.committed(), &numbers());
    assert_eq!(editor.errors().get(0), Some(ValueError::TypeMismatch));
    assert!(editor.handler().changes.is_empty());
    assert_eq!(editor.handler().invalid.len(), 1);

    let outcome = editor.apply(&change_value(0, "-5")).unwrap();
    assert_eq!(outcome, ApplyOutcome::Committed);
    assert_eq!(editor.committed()[0].value, CodeValue::Num(-5.0));
    assert!(editor.is_valid());
    assert_eq!(editor.handler().changes.len(), 1);
}

#[test]
fn test_strict_type_flags_initial_rows() {
    let list: CodeList = vec![CodeListItem::new("1", "One"), CodeListItem::new("abc", "Abc")].into();
    let editor = CodeListEditor::new(
        list,
        declared_number(EditorOptions::strict()),
        Recorder::default(),
    );
    assert_eq!(editor.errors().get(0), None);
    assert_eq!(editor.errors().get(1), Some(ValueError::TypeMismatch));
    assert!(editor.handler().invalid.is_empty());
}

#[test]
fn test_lenient_type_rejects_repeated_text() {
    let list: CodeList = vec![CodeListItem::new("abc", "A"), CodeListItem::new("x", "B")].into();
    let mut editor = CodeListEditor::new(
        list,
        declared_number(EditorOptions::default()),
        Recorder::default(),
    );

    let outcome = editor.apply(&change_value(1, "abc")).unwrap();
    assert_eq!(outcome, ApplyOutcome::Rejected);
    assert_eq!(editor.errors().get(0), Some(ValueError::DuplicateValue));
    assert_eq!(editor.errors().get(1), Some(ValueError::DuplicateValue));
    assert!(editor.handler().changes.is_empty());
    assert_eq!(editor.handler().invalid.len(), 1);
}

#[test]
fn test_typed_add_keeps_numeric_list() {
    let mut editor = editor(numbers());
    let outcome = editor
        .apply(&Mutation::AddTypedItem { value_type: None })
        .unwrap();

    assert_eq!(outcome, ApplyOutcome::Committed);
    assert_eq!(
        editor.committed().values().cloned().collect::<Vec<_>>(),
        vec![CodeValue::Num(1.0), CodeValue::Num(2.0), CodeValue::Num(0.0)]
    );
    assert_eq!(editor.value_type(), Some(ValueType::Number));
}

#[test]
fn test_typed_add_refused_for_full_boolean_list() {
    let list: CodeList = vec![CodeListItem::new(true, "Yes"), CodeListItem::new(false, "No")].into();
    let mut editor = editor(list.clone());
    let error = editor
        .apply(&Mutation::AddTypedItem { value_type: None })
        .unwrap_err();

    assert!(matches!(error, CodeListError::NoFreeBooleanValue));
    assert_eq!(editor.draft(), &list);
    assert!(editor.handler().changes.is_empty());
    assert!(editor.handler().invalid.is_empty());
}
