use liszt::menu::{Action, ResetFragment};
use liszt::{
    CaptionTarget, CatalogFilter, Field, FilterError, FilterOptions, FragmentHistory, Navigator,
    RenderTarget, SourceRow,
};

#[derive(Debug, Default)]
struct FakeContainer {
    rows: Vec<&'static str>,
}

impl RenderTarget for FakeContainer {
    type Node = &'static str;

    fn clear(&mut self) {
        self.rows.clear();
    }

    fn append(&mut self, node: &&'static str) {
        self.rows.push(*node);
    }
}

#[derive(Debug, Default)]
struct FakeCaption {
    html: String,
}

impl CaptionTarget for FakeCaption {
    fn replace_markup(&mut self, html: &str) {
        self.html = html.to_string();
    }
}

fn rows() -> Vec<SourceRow<&'static str>> {
    vec![
        SourceRow::new("alpha", "Alpha Index", Some("history, social sciences")),
        SourceRow::new("beta", "Beta Source", Some("history")),
        SourceRow::new("annals", "Annals of Art", Some("Art")),
        SourceRow::new("census", "Census Tables", None),
    ]
}

fn filter() -> CatalogFilter<FakeContainer, FakeCaption> {
    CatalogFilter::new(
        rows(),
        Some(FakeContainer::default()),
        Some(FakeCaption::default()),
        FilterOptions::default(),
    )
    .unwrap()
}

fn visible(f: &CatalogFilter<FakeContainer, FakeCaption>) -> Vec<&'static str> {
    f.container().rows.clone()
}

fn caption(f: &CatalogFilter<FakeContainer, FakeCaption>) -> &str {
    &f.caption().unwrap().html
}

#[test]
fn construction_indexes_rows_in_document_order() {
    let f = filter();
    assert_eq!(f.records().len(), 4);
    assert_eq!(f.letters(), vec!['a', 'b', 'c']);
    assert_eq!(f.subjects(), &["art", "history", "social-sciences"]);
    assert_eq!(f.records()[3].subjects, Vec::<String>::new());
    // nothing is attached until the first filter call
    assert!(visible(&f).is_empty());
}

#[test]
fn missing_container_is_a_configuration_error() {
    let res: Result<CatalogFilter<FakeContainer>, _> =
        CatalogFilter::new(rows(), None, None, FilterOptions::default());
    match res {
        Err(FilterError::Configuration { selector, .. }) => assert_eq!(selector, "tbody"),
        other => panic!("expected configuration error, got {:?}", other.err()),
    }
}

#[test]
fn zero_rows_yield_an_empty_but_usable_filter() {
    let mut f: CatalogFilter<FakeContainer> = CatalogFilter::new(
        Vec::new(),
        Some(FakeContainer::default()),
        None,
        FilterOptions::default(),
    )
    .unwrap();
    assert!(f.index().is_empty());
    assert!(f.letters().is_empty());
    f.reset();
    assert!(f.container().rows.is_empty());
    f.show_letter("a");
    assert!(f.container().rows.is_empty());
}

#[test]
fn reset_restores_all_rows_in_order_and_is_idempotent() {
    let mut f = filter();
    f.show_letter("b");
    f.reset();
    assert_eq!(visible(&f), vec!["alpha", "beta", "annals", "census"]);
    assert_eq!(caption(&f), "Showing all databases");
    f.reset();
    assert_eq!(visible(&f), vec!["alpha", "beta", "annals", "census"]);
}

#[test]
fn show_letter_keeps_relative_order_and_sets_caption() {
    let mut f = filter();
    f.show_letter("a");
    assert_eq!(visible(&f), vec!["alpha", "annals"]);
    assert_eq!(caption(&f), "Showing databases that begin with <strong>A</strong>");

    f.show_letter("b");
    assert_eq!(visible(&f), vec!["beta"]);
}

#[test]
fn show_letter_accepts_uppercase_input() {
    let mut f = filter();
    f.show_letter("C");
    assert_eq!(visible(&f), vec!["census"]);
}

#[test]
fn show_subject_matches_membership() {
    let mut f = filter();
    f.show(Field::Subject, "history");
    assert_eq!(visible(&f), vec!["alpha", "beta"]);

    f.show_subject("social-sciences");
    assert_eq!(visible(&f), vec!["alpha"]);
    assert_eq!(
        caption(&f),
        "Showing databases that cover <strong>Social Sciences</strong>"
    );
}

#[test]
fn show_with_all_is_reset() {
    let mut f = filter();
    f.show_letter("b");
    f.show(Field::Letter, "all");
    assert_eq!(visible(&f), vec!["alpha", "beta", "annals", "census"]);
    assert_eq!(caption(&f), "Showing all databases");

    f.show_letter("b");
    f.show_named("subject", "all");
    assert_eq!(visible(&f).len(), 4);
}

#[test]
fn unknown_field_matches_nothing() {
    let mut f = filter();
    f.reset();
    f.show_named("publisher", "a");
    assert!(visible(&f).is_empty());

    f.show_named("letter", "a");
    assert_eq!(visible(&f), vec!["alpha", "annals"]);
}

#[test]
fn unknown_value_matches_nothing() {
    let mut f = filter();
    f.reset();
    f.show(Field::Subject, "chemistry");
    assert!(visible(&f).is_empty());
    f.show(Field::Letter, "z");
    assert!(visible(&f).is_empty());
}

#[test]
fn multi_word_subject_only_hyphenates_first_space() {
    let mut f: CatalogFilter<FakeContainer, FakeCaption> = CatalogFilter::new(
        vec![SourceRow::new("edu", "Education Full Text", Some("Social Sciences Education"))],
        Some(FakeContainer::default()),
        Some(FakeCaption::default()),
        FilterOptions::default(),
    )
    .unwrap();
    assert_eq!(f.subjects(), &["social-sciences education"]);

    // the menu label splits on hyphens only, so the last word stays lowercase
    let menu = f.subject_menu(None);
    assert_eq!(menu.items[1].label, "Social Sciences education");

    // the caption title-cases every word of the restored phrase
    f.show_subject("social-sciences education");
    assert_eq!(visible(&f), vec!["edu"]);
    assert_eq!(
        caption(&f),
        "Showing databases that cover <strong>Social Sciences Education</strong>"
    );
}

#[test]
fn caption_is_optional() {
    let mut f: CatalogFilter<FakeContainer> = CatalogFilter::new(
        rows(),
        Some(FakeContainer::default()),
        None,
        FilterOptions::default(),
    )
    .unwrap();
    f.add_caption("ignored");
    f.show_letter("b");
    assert_eq!(f.container().rows, vec!["beta"]);
    assert!(f.caption().is_none());
}

#[test]
fn caption_escapes_filter_values() {
    let mut f = filter();
    f.show_letter("<");
    assert_eq!(
        caption(&f),
        "Showing databases that begin with <strong>&lt;</strong>"
    );
}

#[test]
fn activating_menu_items_updates_fragment_then_filters() {
    let mut f = filter();
    let mut nav = FragmentHistory::new();

    let letters = f.letter_menu(None);
    let b = letters
        .items
        .iter()
        .find(|i| i.action == Action::ShowLetter('b'))
        .unwrap()
        .clone();
    f.activate(&b, &mut nav);
    assert_eq!(nav.fragment(), Some("b"));
    assert_eq!(visible(&f), vec!["beta"]);

    let subjects = f.subject_menu(None);
    let history = subjects.items[2].clone();
    assert_eq!(history.action, Action::ShowSubject("history".into()));
    f.activate(&history, &mut nav);
    assert_eq!(nav.fragment(), Some("history"));
    assert_eq!(visible(&f), vec!["alpha", "beta"]);

    let all = subjects.items[0].clone();
    f.activate(&all, &mut nav);
    assert_eq!(nav.fragment(), Some("all"));
    assert_eq!(visible(&f).len(), 4);
}

#[test]
fn reset_item_can_clear_the_fragment() {
    let options = FilterOptions {
        reset_fragment: ResetFragment::Clear,
        ..FilterOptions::default()
    };
    let mut f: CatalogFilter<FakeContainer> =
        CatalogFilter::new(rows(), Some(FakeContainer::default()), None, options).unwrap();
    let mut nav = FragmentHistory::new();
    let menu = f.letter_menu(None);
    let all = menu.items.last().unwrap().clone();
    assert_eq!(all.href(), "#");

    f.activate(&all, &mut nav);
    assert_eq!(nav.entries(), &[None]);
    assert_eq!(nav.fragment(), None);
    assert_eq!(f.container().rows.len(), 4);
}

#[test]
fn navigate_routes_fragments() {
    let mut f = filter();
    f.navigate("#/b");
    assert_eq!(visible(&f), vec!["beta"]);
    f.navigate("#social-sciences");
    assert_eq!(visible(&f), vec!["alpha"]);
    f.navigate("#all");
    assert_eq!(visible(&f).len(), 4);
}
