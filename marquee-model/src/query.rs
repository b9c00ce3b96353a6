//! User intent routed into the catalog: curated sections, free-text search,
//! and genre discovery.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Curated catalog sections offered in the primary navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Popular,
    TopRated,
    Upcoming,
}

impl Category {
    pub fn all() -> &'static [Category] {
        use Category::*;
        &[Popular, TopRated, Upcoming]
    }

    /// Path segment used by the upstream movie-list endpoint.
    pub fn api_path(&self) -> &'static str {
        match self {
            Category::Popular => "popular",
            Category::TopRated => "top_rated",
            Category::Upcoming => "upcoming",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Popular => "Popular",
            Category::TopRated => "Top Rated",
            Category::Upcoming => "Upcoming",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The single active intent driving what the result grid shows.
///
/// Free-text search supersedes the section intents while its text meets the
/// configured minimum length; category and genre are mutually exclusive
/// inputs into the section lane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CatalogQuery {
    Category(Category),
    FreeTextSearch(String),
    GenreFilter(u64),
}

impl CatalogQuery {
    pub fn is_search(&self) -> bool {
        matches!(self, CatalogQuery::FreeTextSearch(_))
    }
}
