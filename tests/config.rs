use camino::Utf8PathBuf;
use liszt::menu::ResetFragment;
use liszt::{FilterError, FilterOptions};
use std::fs;
use tempfile::tempdir;

#[test]
fn defaults_match_the_catalog_page_conventions() {
    let o = FilterOptions::default();
    assert_eq!(o.row_selector, ".dbaz");
    assert_eq!(o.container_selector, "tbody");
    assert_eq!(o.caption_selector, "table caption");
    assert_eq!(o.subject_attribute, "data-subject");
    assert_eq!(o.menu_selector, ".dbaz-menu");
    assert_eq!(o.reset_fragment, ResetFragment::Marker);
}

#[test]
fn partial_json_keeps_other_defaults() {
    let o = FilterOptions::from_json_str(
        r#"{"row_selector": "tr.entry", "reset_fragment": "clear", "letter_menu_class": "az"}"#,
    )
    .unwrap();
    assert_eq!(o.row_selector, "tr.entry");
    assert_eq!(o.reset_fragment, ResetFragment::Clear);
    assert_eq!(o.letter_menu_class.as_deref(), Some("az"));
    assert_eq!(o.container_selector, "tbody");
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(FilterOptions::from_json_str(r#"{"rows": ".dbaz"}"#).is_err());
}

#[test]
fn options_load_from_file() {
    let tmp = tempdir().unwrap();
    let path = Utf8PathBuf::from_path_buf(tmp.path().join("liszt.json")).unwrap();
    fs::write(&path, r#"{"subject_attribute": "data-topics"}"#).unwrap();
    let o = FilterOptions::from_json_file(&path).unwrap();
    assert_eq!(o.subject_attribute, "data-topics");

    let missing = path.with_file_name("missing.json");
    assert!(matches!(
        FilterOptions::from_json_file(&missing),
        Err(FilterError::Config { .. })
    ));

    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        FilterOptions::from_json_file(&path),
        Err(FilterError::Config { .. })
    ));
}
