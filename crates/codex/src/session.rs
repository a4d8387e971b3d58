//! # Browse Session
//!
//! Holds the list screen's state (records, search term, sort mode) and
//! recomputes the view only when one of them changed. Memoizing is sound
//! because the pipeline is pure: equal inputs give equal layouts.

use codex_core::{
    find_by_key, ChampionRecord, ChampionSource, CodexConfig, CodexError, CodexResult,
    QueryPipeline, Route, SortMode, ViewLayout, ViewModel,
};
use codex_ui::{ChampionDetail, ImageResolver};

/// What the memoized layout was computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ViewKey {
    generation: u64,
    search_term: String,
    sort_mode: SortMode,
}

#[derive(Debug, Clone)]
struct CachedLayout {
    key: ViewKey,
    layout: ViewLayout,
}

/// A screen resolved from a path.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen<'a> {
    /// The list view.
    List(ViewModel<'a>),
    /// One record's detail card.
    Detail(ChampionDetail<'a>),
}

/// Reactive browse state.
#[derive(Debug)]
pub struct BrowseSession {
    records: Vec<ChampionRecord>,
    /// Bumped whenever `records` is replaced.
    generation: u64,
    search_term: String,
    sort_mode: SortMode,
    pipeline: QueryPipeline,
    images: ImageResolver,
    cache: Option<CachedLayout>,
    recomputes: u64,
}

impl BrowseSession {
    /// Creates a session over `records`.
    #[must_use]
    pub fn new(records: Vec<ChampionRecord>, config: &CodexConfig) -> Self {
        Self {
            records,
            generation: 0,
            search_term: String::new(),
            sort_mode: config.view.default_sort,
            pipeline: config.pipeline(),
            images: ImageResolver::from_config(&config.assets),
            cache: None,
            recomputes: 0,
        }
    }

    /// Creates a session from a data source.
    ///
    /// # Errors
    ///
    /// Propagates the source's error.
    pub fn from_source(source: &impl ChampionSource, config: &CodexConfig) -> CodexResult<Self> {
        Ok(Self::new(source.list_all()?, config))
    }

    /// All records, invalid ones included.
    #[must_use]
    pub fn records(&self) -> &[ChampionRecord] {
        &self.records
    }

    /// Current search term.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Current sort mode.
    #[must_use]
    pub const fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    /// Number of times the pipeline actually ran.
    #[must_use]
    pub const fn recompute_count(&self) -> u64 {
        self.recomputes
    }

    /// Updates the search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Updates the sort mode.
    pub fn set_sort_mode(&mut self, mode: SortMode) {
        self.sort_mode = mode;
    }

    /// Replaces the record set, invalidating the memoized view.
    pub fn replace_records(&mut self, records: Vec<ChampionRecord>) {
        self.records = records;
        self.generation += 1;
    }

    /// The current list view.
    pub fn view(&mut self) -> ViewModel<'_> {
        let key = ViewKey {
            generation: self.generation,
            search_term: self.search_term.clone(),
            sort_mode: self.sort_mode,
        };
        let cached = match self.cache.take() {
            Some(cached) if cached.key == key => cached,
            _ => {
                self.recomputes += 1;
                let layout = self
                    .pipeline
                    .layout(&self.records, &key.search_term, key.sort_mode);
                CachedLayout { key, layout }
            }
        };
        let cached = self.cache.insert(cached);
        cached.layout.materialize(&self.records)
    }

    /// Detail card for `english_name`.
    ///
    /// # Errors
    ///
    /// Returns [`CodexError::NotFound`] if no valid record has that key.
    pub fn detail(&self, english_name: &str) -> CodexResult<ChampionDetail<'_>> {
        find_by_key(&self.records, english_name)
            .map(|record| ChampionDetail::build(record, &self.images))
            .ok_or_else(|| CodexError::NotFound(english_name.to_owned()))
    }

    /// Resolves a path to a screen.
    ///
    /// # Errors
    ///
    /// Returns [`CodexError::InvalidRoute`] for unknown paths and
    /// [`CodexError::NotFound`] for unknown champions.
    pub fn open(&mut self, path: &str) -> CodexResult<Screen<'_>> {
        match Route::parse(path)? {
            Route::List => Ok(Screen::List(self.view())),
            Route::Detail(key) => self.detail(&key).map(Screen::Detail),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> BrowseSession {
        BrowseSession::new(
            vec![
                ChampionRecord::new("Garen", "가렌").with_tags(["Fighter"]),
                ChampionRecord::new("Ashe", "애쉬").with_tags(["Marksman"]),
            ],
            &CodexConfig::default(),
        )
    }

    #[test]
    fn test_view_is_memoized() {
        let mut session = session();
        assert_eq!(session.view().len(), 2);
        assert_eq!(session.view().len(), 2);
        assert_eq!(session.recompute_count(), 1);
    }

    #[test]
    fn test_state_change_recomputes() {
        let mut session = session();
        let _ = session.view();
        session.set_search_term("ash");
        assert_eq!(session.view().len(), 1);
        session.set_sort_mode(SortMode::ByPrimaryTag);
        assert!(matches!(session.view(), ViewModel::Grouped(_)));
        assert_eq!(session.recompute_count(), 3);
    }

    #[test]
    fn test_setting_same_value_keeps_cache() {
        let mut session = session();
        let _ = session.view();
        session.set_search_term("");
        session.set_sort_mode(SortMode::ByName);
        let _ = session.view();
        assert_eq!(session.recompute_count(), 1);
    }

    #[test]
    fn test_replace_records_invalidates() {
        let mut session = session();
        let _ = session.view();
        session.replace_records(vec![ChampionRecord::new("Zed", "제드")]);
        let names: Vec<&str> = session.view().records().map(ChampionRecord::display_name).collect();
        assert_eq!(names, ["제드"]);
        assert_eq!(session.recompute_count(), 2);
    }

    #[test]
    fn test_open_routes() {
        let mut session = session();
        assert!(matches!(session.open("/"), Ok(Screen::List(_))));
        let Ok(Screen::Detail(detail)) = session.open("/Ashe") else {
            panic!("expected detail screen");
        };
        assert_eq!(detail.record.display_name(), "애쉬");
        assert_eq!(
            session.open("/Teemo").unwrap_err(),
            CodexError::NotFound("Teemo".to_owned())
        );
        assert!(matches!(
            session.open("/Ashe/skins"),
            Err(CodexError::InvalidRoute(_))
        ));
    }
}
