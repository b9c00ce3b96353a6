//! Catalog configuration loaded via environment variables.
//!
//! The API credential and the navigation/star-filter option lists are
//! injected here rather than living as module-level globals, and are passed
//! into the client and orchestrator at construction.

use std::env;

use marquee_model::Category;
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Configuration for the catalog client and fetch orchestrator.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Upstream API credential, sent as the `api_key` query parameter.
    pub api_key: String,

    /// Base URL of the metadata service.
    pub base_url: String,

    /// Base URL images are served from.
    pub image_base_url: String,

    /// Optional `language` parameter forwarded to list endpoints.
    pub language: Option<String>,

    /// Section shown at session start and restored when a genre clears.
    pub default_category: Category,

    /// Sections offered in the primary navigation.
    pub sections: Vec<Category>,

    /// Whole-star buckets offered by the rating filter bar.
    pub star_filters: Vec<u8>,

    /// Minimum search-text length before the search lane activates.
    /// Defaults to 1, i.e. any non-empty text.
    pub search_min_chars: usize,

    /// Per-request timeout for upstream calls, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            language: None,
            default_category: Category::Popular,
            sections: Category::all().to_vec(),
            star_filters: vec![6, 7, 8],
            search_min_chars: 1,
            request_timeout_secs: 30,
        }
    }
}

impl CatalogConfig {
    /// Load configuration from the environment, falling back to defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            api_key: env::var("TMDB_API_KEY").unwrap_or_default(),
            base_url: env::var("TMDB_BASE_URL").unwrap_or(defaults.base_url),
            image_base_url: env::var("TMDB_IMAGE_BASE_URL")
                .unwrap_or(defaults.image_base_url),
            language: env::var("MARQUEE_LANGUAGE").ok(),
            search_min_chars: env::var("MARQUEE_SEARCH_MIN_CHARS")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(defaults.search_min_chars),
            request_timeout_secs: env::var("MARQUEE_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
            default_category: defaults.default_category,
            sections: defaults.sections,
            star_filters: defaults.star_filters,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::CatalogConfig;
    use marquee_model::Category;

    #[test]
    fn defaults_cover_the_documented_option_lists() {
        let config = CatalogConfig::default();
        assert_eq!(config.default_category, Category::Popular);
        assert_eq!(config.sections, Category::all().to_vec());
        assert_eq!(config.star_filters, vec![6, 7, 8]);
        assert_eq!(config.search_min_chars, 1);
    }
}
