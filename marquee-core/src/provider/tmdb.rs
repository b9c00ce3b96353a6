//! TMDB-backed implementation of [`CatalogProvider`].

use async_trait::async_trait;
use marquee_model::{Category, Genre, MovieSummary};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::provider::CatalogProvider;
use crate::provider::api_types::{GenreListResponse, MovieListResponse, VideoListResponse};

#[derive(Debug, Clone, Copy)]
pub enum PosterSize {
    W92,
    W154,
    W185,
    W342,
    W500,
    W780,
    Original,
}

impl PosterSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            PosterSize::W92 => "w92",
            PosterSize::W154 => "w154",
            PosterSize::W185 => "w185",
            PosterSize::W342 => "w342",
            PosterSize::W500 => "w500",
            PosterSize::W780 => "w780",
            PosterSize::Original => "original",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum BackdropSize {
    W300,
    W780,
    W1280,
    Original,
}

impl BackdropSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackdropSize::W300 => "w300",
            BackdropSize::W780 => "w780",
            BackdropSize::W1280 => "w1280",
            BackdropSize::Original => "original",
        }
    }
}

/// Catalog client speaking the TMDB v3 wire format.
#[derive(Debug, Clone)]
pub struct TmdbCatalogClient {
    client: Client,
    base_url: String,
    image_base_url: String,
    api_key: String,
    language: Option<String>,
}

impl TmdbCatalogClient {
    /// Create a new catalog client from injected configuration.
    pub fn new(config: &CatalogConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        tracing::info!(base_url = %config.base_url, "creating catalog client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            image_base_url: config.image_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            language: config.language.clone(),
        }
    }

    /// Execute a GET against `path`, racing it against the cancellation
    /// token. The credential and language parameters are appended to every
    /// request.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        token: &CancellationToken,
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));

        let mut request = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(query);
        if let Some(language) = &self.language {
            request = request.query(&[("language", language.as_str())]);
        }

        tracing::debug!(%url, "catalog request");

        let fetch = async {
            let response = request.send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(CatalogError::Status {
                    status: status.as_u16(),
                });
            }

            let body = response.bytes().await?;
            serde_json::from_slice(&body)
                .map_err(|err| CatalogError::Decode(err.to_string()))
        };

        tokio::select! {
            _ = token.cancelled() => Err(CatalogError::Cancelled),
            result = fetch => result,
        }
    }

    async fn fetch_movie_list(
        &self,
        path: &str,
        query: &[(&str, &str)],
        token: &CancellationToken,
    ) -> Result<Vec<MovieSummary>> {
        let response: MovieListResponse = self.get_json(path, query, token).await?;
        Ok(response.results.into_iter().map(Into::into).collect())
    }

    /// Build a poster URL from a poster path.
    pub fn poster_url(&self, path: &str, size: PosterSize) -> String {
        format!("{}/{}{}", self.image_base_url, size.as_str(), path)
    }

    /// Build a backdrop URL from a backdrop path.
    pub fn backdrop_url(&self, path: &str, size: BackdropSize) -> String {
        format!("{}/{}{}", self.image_base_url, size.as_str(), path)
    }
}

#[async_trait]
impl CatalogProvider for TmdbCatalogClient {
    async fn fetch_by_category(
        &self,
        category: Category,
        token: CancellationToken,
    ) -> Result<Vec<MovieSummary>> {
        let path = format!("movie/{}", category.api_path());
        self.fetch_movie_list(&path, &[], &token).await
    }

    async fn search_by_text(
        &self,
        text: &str,
        token: CancellationToken,
    ) -> Result<Vec<MovieSummary>> {
        self.fetch_movie_list("search/movie", &[("query", text)], &token)
            .await
    }

    async fn fetch_by_genre(
        &self,
        genre_id: u64,
        token: CancellationToken,
    ) -> Result<Vec<MovieSummary>> {
        let genre = genre_id.to_string();
        self.fetch_movie_list("discover/movie", &[("with_genres", genre.as_str())], &token)
            .await
    }

    async fn fetch_genre_list(&self, token: CancellationToken) -> Result<Vec<Genre>> {
        let response: GenreListResponse =
            self.get_json("genre/movie/list", &[], &token).await?;
        Ok(response.genres.into_iter().map(Into::into).collect())
    }

    async fn fetch_trailer_key(
        &self,
        movie_id: u64,
        token: CancellationToken,
    ) -> Result<Option<String>> {
        let path = format!("movie/{movie_id}/videos");
        let response: VideoListResponse = self.get_json(&path, &[], &token).await?;
        Ok(response
            .results
            .into_iter()
            .find(|video| video.is_trailer())
            .map(|video| video.key))
    }
}
