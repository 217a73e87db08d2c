//! Property tests for the mutation API.

use proptest::prelude::*;

use codelist_editor::{
    Mutation, MutationError, TextEdit, add_new_code_list_item, apply_mutation,
    remove_code_list_item,
};
use codelist_model::{CodeList, CodeListItem, EditorOptions, TextProperty};
use codelist_validate::find_code_list_errors;

fn code_list() -> impl Strategy<Value = CodeList> {
    prop::collection::vec(
        prop::sample::select(vec!["", "a", "b", "1", "2", "2.0", "true", "false"]),
        0..6,
    )
    .prop_map(|values| {
        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| CodeListItem::new(value, format!("Label {index}")))
            .collect::<CodeList>()
    })
}

fn mutation(len: usize) -> impl Strategy<Value = Mutation> {
    let index = 0..len.max(1) + 1;
    prop_oneof![
        Just(Mutation::AddItem),
        Just(Mutation::AddTypedItem { value_type: None }),
        Just(Mutation::AddLocalizedItem {
            languages: vec!["nb".to_string(), "en".to_string()],
        }),
        index.clone().prop_map(|index| Mutation::RemoveItem { index }),
        (index.clone(), "[a-c0-3]{0,3}")
            .prop_map(|(index, value)| Mutation::ChangeValue { index, value }),
        (index, "[A-Za-z ]{0,8}").prop_map(|(index, text)| Mutation::ChangeText {
            index,
            property: TextProperty::Label,
            edit: TextEdit::localized("en", text),
        }),
    ]
}

fn list_and_mutation() -> impl Strategy<Value = (CodeList, Mutation)> {
    code_list().prop_flat_map(|list| {
        let len = list.len();
        (Just(list), mutation(len))
    })
}

proptest! {
    #[test]
    fn mutations_leave_input_untouched((list, mutation) in list_and_mutation()) {
        let before = list.clone();
        let _ = mutation.apply_to(&list);
        let _ = apply_mutation(&list, &mutation, &EditorOptions::default());
        prop_assert_eq!(list, before);
    }

    #[test]
    fn add_then_remove_restores_list(list in code_list()) {
        let added = add_new_code_list_item(&list);
        prop_assert_eq!(added.len(), list.len() + 1);
        let removed = remove_code_list_item(&added, list.len()).unwrap();
        prop_assert_eq!(removed, list);
    }

    #[test]
    fn only_valid_lists_are_committed((list, mutation) in list_and_mutation()) {
        match apply_mutation(&list, &mutation, &EditorOptions::default()) {
            Ok(committed) => prop_assert!(find_code_list_errors(&committed).is_empty()),
            Err(MutationError::Invalid { list: draft, errors }) => {
                prop_assert!(!errors.is_empty());
                prop_assert_eq!(Some(draft), mutation.apply_to(&list).ok());
            }
            Err(MutationError::Model(_)) => prop_assert!(mutation.apply_to(&list).is_err()),
        }
    }
}
