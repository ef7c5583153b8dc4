//! Core enums shared by the search and detail pipelines.
//!
//! Labels follow what the presentation layer renders: media kinds serialize
//! as `"Movie"` / `"TV"`, review states as the lowercase strings the review
//! aggregator embeds in its markup.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of title a user can look up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaKind {
    /// A feature film.
    #[serde(rename = "Movie")]
    Movie,
    /// A television series.
    #[serde(rename = "TV")]
    Tv,
}

impl MediaKind {
    /// Path segment the metadata API uses for this kind (`movie` / `tv`).
    pub fn api_segment(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
        }
    }

    /// Map a raw `media_type` value from a multi-type search response.
    ///
    /// Anything other than `movie` or `tv` (people, collections) yields `None`.
    pub fn from_api_media_type(value: &str) -> Option<Self> {
        match value {
            "movie" => Some(Self::Movie),
            "tv" => Some(Self::Tv),
            _ => None,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Movie => write!(f, "Movie"),
            Self::Tv => write!(f, "TV"),
        }
    }
}

impl std::str::FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("movie") {
            Ok(Self::Movie)
        } else if s.eq_ignore_ascii_case("tv") {
            Ok(Self::Tv)
        } else {
            Err(format!("Invalid media type: {}", s))
        }
    }
}

/// Critic consensus badge shown next to the tomatometer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CriticState {
    #[serde(rename = "fresh")]
    Fresh,
    #[serde(rename = "rotten")]
    Rotten,
    #[serde(rename = "certified-fresh", alias = "certified")]
    Certified,
}

impl fmt::Display for CriticState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fresh => write!(f, "fresh"),
            Self::Rotten => write!(f, "rotten"),
            Self::Certified => write!(f, "certified-fresh"),
        }
    }
}

impl std::str::FromStr for CriticState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fresh" => Ok(Self::Fresh),
            "rotten" => Ok(Self::Rotten),
            "certified-fresh" | "certified_fresh" | "certified" => Ok(Self::Certified),
            other => Err(format!("Invalid critic state: {}", other)),
        }
    }
}

/// Audience badge (popcorn bucket) state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudienceState {
    Upright,
    Spilled,
}

impl fmt::Display for AudienceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upright => write!(f, "upright"),
            Self::Spilled => write!(f, "spilled"),
        }
    }
}

impl std::str::FromStr for AudienceState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upright" => Ok(Self::Upright),
            "spilled" => Ok(Self::Spilled),
            other => Err(format!("Invalid audience state: {}", other)),
        }
    }
}
