//! Wire schemas for the upstream endpoints.
//!
//! Each response is validated against an explicit schema: `id`, `title`,
//! and `vote_average` are required and their absence is an upstream decode
//! error, never a panic. Fields the upstream omits or empties (poster,
//! backdrop, release date) decode to `None`.

use chrono::NaiveDate;
use marquee_model::{Genre, MovieSummary};
use serde::Deserialize;

/// Envelope of every movie-list endpoint (`results` array).
#[derive(Debug, Deserialize)]
pub struct MovieListResponse {
    pub results: Vec<MovieRecord>,
}

/// One movie object as returned by list, search, and discover endpoints.
#[derive(Debug, Deserialize)]
pub struct MovieRecord {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    pub vote_average: f32,
    #[serde(default)]
    pub release_date: Option<String>,
}

impl From<MovieRecord> for MovieSummary {
    fn from(record: MovieRecord) -> Self {
        // The upstream encodes "no date" as an empty string on some entries.
        let release_date = record
            .release_date
            .as_deref()
            .filter(|raw| !raw.is_empty())
            .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok());

        MovieSummary {
            id: record.id,
            title: record.title,
            overview: record.overview,
            poster_path: record.poster_path,
            backdrop_path: record.backdrop_path,
            vote_average: record.vote_average,
            release_date,
        }
    }
}

/// Envelope of the genre index endpoint (`genres` array).
#[derive(Debug, Deserialize)]
pub struct GenreListResponse {
    pub genres: Vec<GenreRecord>,
}

#[derive(Debug, Deserialize)]
pub struct GenreRecord {
    pub id: u64,
    pub name: String,
}

impl From<GenreRecord> for Genre {
    fn from(record: GenreRecord) -> Self {
        Genre {
            id: record.id,
            name: record.name,
        }
    }
}

/// Envelope of the per-movie videos endpoint.
#[derive(Debug, Deserialize)]
pub struct VideoListResponse {
    pub results: Vec<VideoRecord>,
}

#[derive(Debug, Deserialize)]
pub struct VideoRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub site: String,
    pub key: String,
}

impl VideoRecord {
    /// Whether this entry is playable as an embedded trailer.
    pub fn is_trailer(&self) -> bool {
        self.kind == "Trailer" && self.site == "YouTube"
    }
}

#[cfg(test)]
mod tests {
    use super::{MovieListResponse, MovieRecord, VideoListResponse};
    use chrono::NaiveDate;
    use marquee_model::MovieSummary;

    #[test]
    fn empty_release_date_decodes_to_none() {
        let record: MovieRecord = serde_json::from_value(serde_json::json!({
            "id": 27205,
            "title": "Inception",
            "vote_average": 8.4,
            "release_date": ""
        }))
        .unwrap();

        let summary = MovieSummary::from(record);
        assert_eq!(summary.release_date, None);
        assert_eq!(summary.overview, "");
    }

    #[test]
    fn well_formed_dates_parse() {
        let record: MovieRecord = serde_json::from_value(serde_json::json!({
            "id": 157336,
            "title": "Interstellar",
            "vote_average": 8.4,
            "release_date": "2014-11-05"
        }))
        .unwrap();

        let summary = MovieSummary::from(record);
        assert_eq!(
            summary.release_date,
            NaiveDate::from_ymd_opt(2014, 11, 5)
        );
    }

    #[test]
    fn missing_title_is_a_decode_error() {
        let result: Result<MovieListResponse, _> =
            serde_json::from_value(serde_json::json!({
                "results": [{ "id": 1, "vote_average": 7.0 }]
            }));
        assert!(result.is_err());
    }

    #[test]
    fn trailer_selection_requires_youtube_trailer() {
        let response: VideoListResponse = serde_json::from_value(serde_json::json!({
            "results": [
                { "type": "Teaser", "site": "YouTube", "key": "teaser" },
                { "type": "Trailer", "site": "Vimeo", "key": "vimeo" },
                { "type": "Trailer", "site": "YouTube", "key": "the-one" }
            ]
        }))
        .unwrap();

        let key = response
            .results
            .iter()
            .find(|video| video.is_trailer())
            .map(|video| video.key.clone());
        assert_eq!(key.as_deref(), Some("the-one"));
    }
}
