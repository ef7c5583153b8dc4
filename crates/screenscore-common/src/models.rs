//! Records handed to the presentation layer.
//!
//! Field names on the wire are the ones the page templates consume
//! (`tmdb_id`, `poster_image`, `imdb_rating`, ...), so most fields carry a
//! serde rename. Optional enrichment fields always serialize as an explicit
//! `null` instead of being skipped or emptied.

use serde::{Deserialize, Serialize};

use crate::types::{AudienceState, CriticState, MediaKind};

/// Placeholder shown when the metadata API has no poster for a title.
pub const NO_POSTER_PLACEHOLDER: &str = "/static/img/no_poster.webp";

/// A lightweight search hit shown before the user picks a title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCandidate {
    /// Metadata API identifier. Unique within one result list.
    #[serde(rename = "tmdb_id")]
    pub id: u64,
    pub title: String,
    /// Four-digit release year, or empty when the API has no date.
    pub year: String,
    #[serde(rename = "media_type")]
    pub media_kind: MediaKind,
    /// Absolute image URL or [`NO_POSTER_PLACEHOLDER`].
    #[serde(rename = "poster_image")]
    pub poster_url: String,
}

/// Critic and audience scores scraped from the review aggregator.
///
/// Every field is independently optional; the widget may omit any of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingScores {
    #[serde(rename = "tomatometer")]
    pub critic_score: Option<u8>,
    #[serde(rename = "tomatometer_state")]
    pub critic_state: Option<CriticState>,
    pub audience_score: Option<u8>,
    pub audience_state: Option<AudienceState>,
}

impl RatingScores {
    /// Build scores from the raw attribute values of the score widget.
    ///
    /// Values that are empty, non-numeric, out of the 0-100 range or an
    /// unknown state are dropped to `None`.
    pub fn from_raw(
        critic_score: Option<&str>,
        critic_state: Option<&str>,
        audience_score: Option<&str>,
        audience_state: Option<&str>,
    ) -> Self {
        Self {
            critic_score: critic_score.and_then(parse_percentage),
            critic_state: critic_state.and_then(|s| s.parse().ok()),
            audience_score: audience_score.and_then(parse_percentage),
            audience_state: audience_state.and_then(|s| s.parse().ok()),
        }
    }

    /// True when the widget was found but carried nothing usable.
    pub fn is_empty(&self) -> bool {
        self.critic_score.is_none()
            && self.critic_state.is_none()
            && self.audience_score.is_none()
            && self.audience_state.is_none()
    }
}

fn parse_percentage(raw: &str) -> Option<u8> {
    raw.trim()
        .trim_end_matches('%')
        .parse::<u8>()
        .ok()
        .filter(|score| *score <= 100)
}

/// Fully aggregated record for a title's detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaDetail {
    #[serde(rename = "tmdb_id")]
    pub id: u64,
    #[serde(rename = "poster_image")]
    pub poster_url: String,
    /// IMDb-style identifier used to look up the numeric rating.
    #[serde(rename = "imdb_id")]
    pub external_rating_id: Option<String>,
    pub title: String,
    pub year: String,
    /// Genre names in API order; `None` when the API lists none.
    #[serde(rename = "genre")]
    pub genres: Option<Vec<String>>,
    pub overview: String,
    /// Vote average rounded to one decimal.
    ///
    /// A zero average is reported as `None`, the same as no votes at all.
    #[serde(rename = "tmdb_rating")]
    pub aggregate_score: Option<f64>,
    #[serde(rename = "imdb_rating")]
    pub external_numeric_rating: Option<String>,
    #[serde(rename = "rt_url")]
    pub review_aggregator_url: Option<String>,
    #[serde(rename = "rt_scores")]
    pub review_scores: Option<RatingScores>,
    pub trailer_id: Option<String>,
    #[serde(flatten)]
    pub specifics: MediaSpecifics,
}

impl MediaDetail {
    /// Kind of title this record describes.
    pub fn media_kind(&self) -> MediaKind {
        match self.specifics {
            MediaSpecifics::Movie { .. } => MediaKind::Movie,
            MediaSpecifics::Tv { .. } => MediaKind::Tv,
        }
    }
}

/// Fields that only exist for one media kind.
///
/// Serialized flattened into [`MediaDetail`] with the `media_type` key as
/// the tag, so a movie record never carries series keys and vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "media_type")]
pub enum MediaSpecifics {
    #[serde(rename = "Movie")]
    Movie {
        /// Formatted as `"<H>h <M>m"`.
        runtime: Option<String>,
        #[serde(rename = "director")]
        directors: Option<Vec<String>>,
    },
    #[serde(rename = "TV")]
    Tv {
        #[serde(rename = "creator")]
        creators: Option<Vec<String>>,
        #[serde(rename = "number_of_seasons")]
        season_count: Option<u32>,
        #[serde(rename = "number_of_episodes")]
        episode_count: Option<u32>,
    },
}
