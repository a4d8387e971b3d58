//! # Browse Flow Tests
//!
//! Loads the bundled catalog and config, then walks the screens the way the
//! application does: list, search, regroup, open a detail card, draw it.

use codex::core::{
    Catalog, ChampionRecord, ChampionSource, CodexConfig, CodexError, SortMode, ViewModel,
};
use codex::ui::{svg, Theme};
use codex::{BrowseSession, Screen};

const CATALOG: &str = include_str!("../data/champions.json");
const CONFIG: &str = include_str!("../data/codex.toml");

fn session() -> BrowseSession {
    let catalog = Catalog::from_json_str(CATALOG).expect("bundled catalog parses");
    let config = CodexConfig::from_toml_str(CONFIG).expect("bundled config parses");
    BrowseSession::from_source(&catalog, &config).expect("in-memory source never fails")
}

fn display_names(view: &ViewModel<'_>) -> Vec<String> {
    view.records().map(|r| r.display_name().to_owned()).collect()
}

#[test]
fn test_catalog_keeps_invalid_records_but_list_drops_them() {
    let catalog = Catalog::from_json_str(CATALOG).unwrap();
    assert_eq!(catalog.list_all().unwrap().len(), 7);

    let mut session = session();
    let view = session.view();
    assert_eq!(view.len(), 6);
    assert!(view.records().all(ChampionRecord::is_valid));
}

#[test]
fn test_default_list_is_collated() {
    let mut session = session();
    assert_eq!(
        display_names(&session.view()),
        ["가렌", "방랑자", "아리", "애니", "애쉬", "제드"]
    );
}

#[test]
fn test_search_then_group() {
    let mut session = session();
    session.set_search_term("A");
    // "A" is never in a Hangul display name; English names fold case.
    assert_eq!(
        display_names(&session.view()),
        ["가렌", "방랑자", "아리", "애니", "애쉬"]
    );

    session.set_search_term("");
    session.set_sort_mode(SortMode::ByPrimaryTag);
    let ViewModel::Grouped(groups) = session.view() else {
        panic!("expected grouped view");
    };
    let keys: Vec<&str> = groups.keys().map(String::as_str).collect();
    assert_eq!(keys, ["Assassin", "Fighter", "Mage", "Marksman", "기타"]);
    let mages: Vec<&str> = groups["Mage"].iter().map(|r| r.display_name()).collect();
    assert_eq!(mages, ["아리", "애니"]);
    let untagged: Vec<&str> = groups["기타"].iter().map(|r| r.display_name()).collect();
    assert_eq!(untagged, ["방랑자"]);
}

#[test]
fn test_detail_screen_and_svg() {
    let mut session = session();
    let Ok(Screen::Detail(detail)) = session.open("/Garen") else {
        panic!("expected Garen's detail card");
    };
    assert_eq!(detail.difficulty.filled_count(), 5);
    assert!(detail.to_string().contains("가렌 (Garen)"));
    let portrait = detail.portrait.as_ref().expect("Garen has a portrait");
    assert!(portrait.primary.ends_with("loading/Garen_0.jpg"));
    assert!(portrait
        .after_failure(&portrait.primary)
        .is_some_and(|url| url.ends_with("splash/Garen_0.jpg")));

    let document = svg::write_document(detail.render(&Theme::default()).commands());
    assert!(document.contains("<polygon"));
    assert!(document.contains("공격 (7)"));
    assert_eq!(document.matches("★").count(), 10);
}

#[test]
fn test_sparse_record_detail_defaults() {
    let session = session();
    let detail = session.detail("Wanderer").unwrap();
    assert_eq!(detail.difficulty.filled_count(), 0);
    assert_eq!(detail.portrait, None);
    assert!(detail.stats.iter().all(|line| line.value.is_none()));
}

#[test]
fn test_unknown_and_invalid_keys() {
    let session = session();
    assert_eq!(
        session.detail("garen").unwrap_err(),
        CodexError::NotFound("garen".to_owned())
    );
    assert!(session.detail("").is_err());
}
