//! Remote catalog access: the provider seam and its TMDB-backed
//! implementation.

pub mod api_types;
pub mod tmdb;

use async_trait::async_trait;
use marquee_model::{Genre, MovieSummary};
use tokio_util::sync::CancellationToken;

use crate::error::Result;

pub use tmdb::{BackdropSize, PosterSize, TmdbCatalogClient};

/// Read-only access to the upstream movie catalog.
///
/// Every call takes a cancellation token; a call observed as cancelled
/// resolves to [`CatalogError::Cancelled`](crate::CatalogError::Cancelled)
/// rather than an empty result. One outbound request per invocation, no
/// retries, no caching.
#[async_trait]
pub trait CatalogProvider: std::fmt::Debug + Send + Sync {
    /// Movies for a curated section (popular, top rated, upcoming).
    async fn fetch_by_category(
        &self,
        category: marquee_model::Category,
        token: CancellationToken,
    ) -> Result<Vec<MovieSummary>>;

    /// Free-text title search.
    async fn search_by_text(
        &self,
        text: &str,
        token: CancellationToken,
    ) -> Result<Vec<MovieSummary>>;

    /// Discovery scoped to a single genre.
    async fn fetch_by_genre(
        &self,
        genre_id: u64,
        token: CancellationToken,
    ) -> Result<Vec<MovieSummary>>;

    /// The upstream genre index used to populate the genre selector.
    async fn fetch_genre_list(&self, token: CancellationToken) -> Result<Vec<Genre>>;

    /// YouTube key of the first trailer for a movie, if one exists.
    async fn fetch_trailer_key(
        &self,
        movie_id: u64,
        token: CancellationToken,
    ) -> Result<Option<String>>;
}
