//! Movie and genre summaries as surfaced by the upstream catalog.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One catalog entry as displayed in a grid, hero banner, or search result.
///
/// Summaries are immutable once received; the session store owns them for as
/// long as they are displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// Upstream catalog identifier, unique and stable per entry.
    pub id: u64,
    pub title: String,
    pub overview: String,
    /// Relative poster path, joined against the configured image base URL.
    pub poster_path: Option<String>,
    /// Relative backdrop path for the hero banner background.
    pub backdrop_path: Option<String>,
    /// Average user rating on the upstream 0..=10 scale.
    pub vote_average: f32,
    pub release_date: Option<NaiveDate>,
}

impl MovieSummary {
    /// Whole-star bucket of the average rating (`7.8` buckets as `7`).
    pub fn star_bucket(&self) -> u8 {
        self.vote_average.clamp(0.0, 10.0).floor() as u8
    }
}

/// A genre as listed by the upstream genre index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}
