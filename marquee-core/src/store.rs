//! SessionStore - single source of truth for the session's UI state.
//!
//! The store owns one [`SessionState`] behind an `RwLock` and notifies
//! subscribers of every mutation through a watch channel carrying a version
//! counter. Presentation code reads snapshots; mutations come only from the
//! fetch orchestrator and from direct intent setters.

use std::sync::RwLock;

use marquee_model::{CatalogQuery, Category, Genre, MovieSummary, SessionState};
use tokio::sync::watch;

use crate::config::CatalogConfig;

#[derive(Debug)]
pub struct SessionStore {
    state: RwLock<SessionState>,
    changes: watch::Sender<u64>,
}

impl SessionStore {
    /// Create a store holding the initial session state (default section
    /// active, loading).
    pub fn new(config: &CatalogConfig) -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            state: RwLock::new(SessionState::new(config.default_category)),
            changes,
        }
    }

    /// Clone of the current state for rendering.
    pub fn snapshot(&self) -> SessionState {
        self.state.read().unwrap().clone()
    }

    /// Subscribe to change notifications. The receiver yields a version
    /// counter; read a fresh [`snapshot`](Self::snapshot) on each change.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    fn mutate<F: FnOnce(&mut SessionState)>(&self, apply: F) {
        {
            let mut state = self.state.write().unwrap();
            apply(&mut state);
        }
        self.changes.send_modify(|version| *version += 1);
    }

    pub(crate) fn set_loading(&self, is_loading: bool) {
        self.mutate(|state| state.is_loading = is_loading);
    }

    /// Apply a section intent: retained category/genre, search cleared.
    pub(crate) fn apply_section_intent(&self, category: Category, genre: Option<u64>) {
        self.mutate(|state| {
            state.category = category;
            state.genre = genre;
            state.active_query = state.section_query();
        });
    }

    /// Promote a free-text search to the active query. The section lane is
    /// suppressed while a search is active, so its loading flag clears.
    pub(crate) fn begin_search(&self, text: String) {
        self.mutate(|state| {
            state.active_query = CatalogQuery::FreeTextSearch(text);
            state.is_loading = false;
        });
    }

    /// Drop an active search, restoring the retained section intent.
    pub(crate) fn end_search(&self) {
        self.mutate(|state| {
            if state.active_query.is_search() {
                state.active_query = state.section_query();
            }
        });
    }

    pub(crate) fn complete_section(&self, results: Vec<MovieSummary>) {
        tracing::debug!(count = results.len(), "section fetch resolved");
        self.mutate(|state| {
            state.results = results;
            state.is_loading = false;
        });
    }

    pub(crate) fn fail_section(&self) {
        self.mutate(|state| {
            state.results = Vec::new();
            state.is_loading = false;
        });
    }

    pub(crate) fn complete_search(&self, results: Vec<MovieSummary>) {
        tracing::debug!(count = results.len(), "search fetch resolved");
        self.mutate(|state| state.results = results);
    }

    pub(crate) fn fail_search(&self) {
        self.mutate(|state| state.results = Vec::new());
    }

    pub(crate) fn set_hero(&self, hero: MovieSummary) {
        tracing::debug!(movie_id = hero.id, title = %hero.title, "hero pick");
        self.mutate(|state| state.hero_pick = Some(hero));
    }

    pub(crate) fn set_genres(&self, genres: Vec<Genre>) {
        self.mutate(|state| state.genres = genres);
    }

    pub(crate) fn set_star_filter(&self, star: Option<u8>) {
        self.mutate(|state| state.star_filter = star);
    }

    pub(crate) fn toggle_theme(&self) {
        self.mutate(|state| state.theme = state.theme.toggled());
    }
}
