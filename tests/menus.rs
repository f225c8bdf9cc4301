use liszt::fragment::route;
use liszt::menu::{Action, LETTER_RESET_LABEL, Menu, MenuKind, ResetFragment, SUBJECT_RESET_LABEL};

#[test]
fn letter_menu_lists_letters_then_view_all() {
    let menu = Menu::letters(['b', 'a'], Some("az"), ResetFragment::Marker);
    assert_eq!(menu.kind, MenuKind::List);
    assert_eq!(menu.class.as_deref(), Some("az"));
    let labels: Vec<_> = menu.items.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(labels, vec!["B", "A", LETTER_RESET_LABEL]);
    assert_eq!(menu.items[0].href(), "#b");
    assert_eq!(menu.items[0].action, Action::ShowLetter('b'));
    assert_eq!(menu.items[2].action, Action::Reset);
    assert!(menu.items.iter().all(|i| !i.selected));
}

#[test]
fn subject_menu_starts_with_selected_view_all() {
    let menu = Menu::subjects(["history", "social-sciences"], None, ResetFragment::Clear);
    assert_eq!(menu.kind, MenuKind::Select);
    assert_eq!(menu.items[0].label, SUBJECT_RESET_LABEL);
    assert!(menu.items[0].selected);
    assert_eq!(menu.items[0].fragment, None);
    assert_eq!(menu.items[2].label, "Social Sciences");
    // the action keeps the hyphenated key, not the label
    assert_eq!(
        menu.items[2].action,
        Action::ShowSubject("social-sciences".into())
    );
    assert_eq!(menu.items[2].href(), "#social-sciences");
}

#[test]
fn each_item_carries_its_own_action() {
    let menu = Menu::letters(['a', 'b', 'c'], None, ResetFragment::Marker);
    let actions: Vec<_> = menu.items.iter().map(|i| i.action.clone()).collect();
    assert_eq!(
        actions,
        vec![
            Action::ShowLetter('a'),
            Action::ShowLetter('b'),
            Action::ShowLetter('c'),
            Action::Reset
        ]
    );
}

#[test]
fn fragments_route_to_actions() {
    assert_eq!(route("#b"), Action::ShowLetter('b'));
    assert_eq!(route("#/B"), Action::ShowLetter('b'));
    assert_eq!(route("databases/#/history"), Action::ShowSubject("history".into()));
    assert_eq!(route("#social-sciences"), Action::ShowSubject("social-sciences".into()));
    assert_eq!(route("#all"), Action::Reset);
    assert_eq!(route("#"), Action::Reset);
    assert_eq!(route(""), Action::Reset);
}

#[test]
fn only_one_leading_hash_is_stripped() {
    assert_eq!(route("##"), Action::ShowLetter('#'));
    let menu = Menu::letters(['#'], None, ResetFragment::Marker);
    assert_eq!(route(&menu.items[0].href()), menu.items[0].action);
}
