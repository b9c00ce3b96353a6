//! FetchOrchestrator - reacts to intent changes, decides which fetches to
//! issue, and writes results back into the session store race-free.
//!
//! Three independent lanes: hero, section, search. Every activation cancels
//! the lane's outstanding request; every resolution re-checks that it is
//! still current before touching shared state, so "last activating input
//! wins" regardless of network completion order. Failures degrade (empty
//! grid, absent hero, absent trailer) and are never surfaced as errors to
//! the presentation layer.

mod slot;

use std::sync::Arc;

use marquee_model::{Category, MovieSummary};
use rand::seq::IndexedRandom;
use tokio_util::sync::CancellationToken;

use crate::config::CatalogConfig;
use crate::provider::CatalogProvider;
use crate::store::SessionStore;

use self::slot::{FetchTicket, Slot};

/// Coordinates catalog fetches for one session.
///
/// Must be created inside a tokio runtime; fetches run as spawned tasks.
/// Intent setters are synchronous and return nothing; all feedback flows
/// through the [`SessionStore`].
#[derive(Debug)]
pub struct FetchOrchestrator {
    provider: Arc<dyn CatalogProvider>,
    store: Arc<SessionStore>,
    config: CatalogConfig,
    shutdown: CancellationToken,
    hero: Arc<Slot>,
    section: Arc<Slot>,
    search: Arc<Slot>,
}

impl FetchOrchestrator {
    pub fn new(
        provider: Arc<dyn CatalogProvider>,
        store: Arc<SessionStore>,
        config: CatalogConfig,
    ) -> Self {
        Self {
            provider,
            store,
            config,
            shutdown: CancellationToken::new(),
            hero: Arc::new(Slot::new("hero")),
            section: Arc::new(Slot::new("section")),
            search: Arc::new(Slot::new("search")),
        }
    }

    /// Kick off the session's initial fetches: the hero spotlight, the
    /// default section, and the genre index.
    pub fn start(&self) {
        self.refresh_hero();
        self.refresh_section();
        self.load_genres();
    }

    /// Cancel every outstanding fetch. No state mutation can occur after
    /// this returns.
    pub fn shutdown(&self) {
        tracing::debug!("orchestrator shutdown");
        self.shutdown.cancel();
        self.hero.deactivate();
        self.section.deactivate();
        self.search.deactivate();
    }

    /// Switch the section lane to a curated category. Clears any genre
    /// selection and active search.
    pub fn set_category(&self, category: Category) {
        tracing::debug!(%category, "intent: category");
        self.search.deactivate();
        self.store.apply_section_intent(category, None);
        self.refresh_section();
    }

    /// Select or clear a genre. Selecting clears the free-text query and
    /// resets the category to the default section; the section lane then
    /// fetches by genre discovery instead of by category.
    pub fn set_genre(&self, genre: Option<u64>) {
        tracing::debug!(?genre, "intent: genre");
        self.search.deactivate();
        let category = match genre {
            Some(_) => self.config.default_category,
            None => self.store.snapshot().category,
        };
        self.store.apply_section_intent(category, genre);
        self.refresh_section();
    }

    /// Update the free-text query. At or above the configured minimum
    /// length the search lane activates and supersedes the section lane;
    /// below it the lane goes idle without clearing previously shown
    /// results.
    pub fn set_search_text(&self, text: &str) {
        if text.chars().count() >= self.config.search_min_chars.max(1) {
            tracing::debug!(query = %text, "intent: search");
            // Suppress the section lane while the search is active.
            self.section.deactivate();
            self.store.begin_search(text.to_string());

            let ticket = self.search.activate(&self.shutdown);
            let provider = Arc::clone(&self.provider);
            let store = Arc::clone(&self.store);
            let slot = Arc::clone(&self.search);
            let text = text.to_string();
            tokio::spawn(async move {
                let result = provider.search_by_text(&text, ticket.token.clone()).await;
                match result {
                    Ok(movies) => commit(&slot, &ticket, || store.complete_search(movies)),
                    Err(err) if err.is_cancelled() => {}
                    Err(err) => {
                        tracing::warn!(query = %text, error = %err, "search fetch failed");
                        commit(&slot, &ticket, || store.fail_search());
                    }
                }
            });
        } else {
            self.search.deactivate();
            self.store.end_search();
        }
    }

    /// Narrow the projected view to one whole-star rating bucket, or clear
    /// the narrowing. Issues no fetch.
    pub fn set_star_filter(&self, star: Option<u8>) {
        self.store.set_star_filter(star);
    }

    /// Flip the session theme.
    pub fn toggle_theme(&self) {
        self.store.toggle_theme();
    }

    /// YouTube trailer key for a movie, or `None` when the movie has no
    /// trailer or the lookup fails. Used for on-hover playback; failures
    /// degrade to showing the poster alone.
    pub async fn trailer_key(&self, movie_id: u64) -> Option<String> {
        let token = self.shutdown.child_token();
        match self.provider.fetch_trailer_key(movie_id, token).await {
            Ok(key) => key,
            Err(err) if err.is_cancelled() => None,
            Err(err) => {
                tracing::debug!(movie_id, error = %err, "trailer lookup failed");
                None
            }
        }
    }

    /// Re-issue the section fetch for the currently retained intent.
    /// Suppressed while a search is active.
    fn refresh_section(&self) {
        let state = self.store.snapshot();
        if state.active_query.is_search() {
            return;
        }

        let ticket = self.section.activate(&self.shutdown);
        self.store.set_loading(true);

        let provider = Arc::clone(&self.provider);
        let store = Arc::clone(&self.store);
        let slot = Arc::clone(&self.section);
        let genre = state.genre;
        let category = state.category;
        tokio::spawn(async move {
            let result = match genre {
                Some(id) => provider.fetch_by_genre(id, ticket.token.clone()).await,
                None => {
                    provider
                        .fetch_by_category(category, ticket.token.clone())
                        .await
                }
            };
            match result {
                Ok(movies) => commit(&slot, &ticket, || store.complete_section(movies)),
                Err(err) if err.is_cancelled() => {}
                Err(err) => {
                    tracing::warn!(%category, ?genre, error = %err, "section fetch failed");
                    commit(&slot, &ticket, || store.fail_section());
                }
            }
        });
    }

    /// Fetch the top-rated list and pick one entry uniformly at random for
    /// the hero banner. Failure leaves the current pick in place.
    fn refresh_hero(&self) {
        let ticket = self.hero.activate(&self.shutdown);
        let provider = Arc::clone(&self.provider);
        let store = Arc::clone(&self.store);
        let slot = Arc::clone(&self.hero);
        tokio::spawn(async move {
            let result = provider
                .fetch_by_category(Category::TopRated, ticket.token.clone())
                .await;
            match result {
                Ok(movies) => {
                    if let Some(pick) = pick_hero(&movies) {
                        commit(&slot, &ticket, || store.set_hero(pick));
                    }
                }
                Err(err) if err.is_cancelled() => {}
                Err(err) => {
                    tracing::warn!(error = %err, "hero fetch failed");
                }
            }
        });
    }

    /// Populate the genre selector from the upstream index. Failure leaves
    /// the list empty; the selector simply does not render.
    fn load_genres(&self) {
        let provider = Arc::clone(&self.provider);
        let store = Arc::clone(&self.store);
        let token = self.shutdown.child_token();
        tokio::spawn(async move {
            match provider.fetch_genre_list(token).await {
                Ok(genres) => store.set_genres(genres),
                Err(err) if err.is_cancelled() => {}
                Err(err) => {
                    tracing::warn!(error = %err, "genre index fetch failed");
                }
            }
        });
    }
}

/// Apply a resolution only while its ticket is still current. The check and
/// the write run back to back with no await between them.
fn commit<F: FnOnce()>(slot: &Slot, ticket: &FetchTicket, write: F) {
    if slot.is_current(ticket) {
        write();
    } else {
        tracing::trace!(slot = slot.name(), "stale resolution discarded");
    }
}

fn pick_hero(movies: &[MovieSummary]) -> Option<MovieSummary> {
    movies.choose(&mut rand::rng()).cloned()
}
