//! Per-session UI state: the active query, its results, and presentation
//! preferences. Lives for a single browser session; nothing is persisted.

use serde::{Deserialize, Serialize};

use crate::movie::{Genre, MovieSummary};
use crate::query::{CatalogQuery, Category};

/// Color theme preference toggled from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Snapshot of everything the presentation layer renders.
///
/// Mutated only by the fetch orchestrator (results, hero, loading flag) and
/// by direct intent setters (query, star filter, theme). `category` and
/// `genre` retain the section intent so it can be restored when a search is
/// cleared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub active_query: CatalogQuery,
    /// Retained section category, also the target of `active_query` whenever
    /// no search or genre supersedes it.
    pub category: Category,
    /// Selected genre id, routed to discovery instead of the category fetch.
    pub genre: Option<u64>,
    /// Whole-star rating bucket the projected view is narrowed to.
    pub star_filter: Option<u8>,
    pub results: Vec<MovieSummary>,
    /// Spotlight pick for the hero banner, absent until its fetch resolves.
    pub hero_pick: Option<MovieSummary>,
    /// Whether the section lane has a fetch outstanding. Hero and search
    /// loading are not surfaced.
    pub is_loading: bool,
    pub genres: Vec<Genre>,
    pub theme: Theme,
}

impl SessionState {
    /// Initial state at session start: default section active, loading.
    pub fn new(default_category: Category) -> Self {
        Self {
            active_query: CatalogQuery::Category(default_category),
            category: default_category,
            genre: None,
            star_filter: None,
            results: Vec::new(),
            hero_pick: None,
            is_loading: true,
            genres: Vec::new(),
            theme: Theme::Dark,
        }
    }

    /// The query the section lane would issue right now, ignoring any active
    /// search.
    pub fn section_query(&self) -> CatalogQuery {
        match self.genre {
            Some(id) => CatalogQuery::GenreFilter(id),
            None => CatalogQuery::Category(self.category),
        }
    }

    /// Active search text, if a free-text search currently supersedes the
    /// section intent.
    pub fn search_text(&self) -> Option<&str> {
        match &self.active_query {
            CatalogQuery::FreeTextSearch(text) => Some(text),
            _ => None,
        }
    }
}
