//! TMDB (The Movie Database) API client.
//!
//! Two endpoints are used: multi-type search and per-title details with
//! sub-resources appended. Unlike the scrape targets, TMDB failures are not
//! swallowed: a non-2xx answer becomes [`Error::Upstream`] and aborts the
//! request.

use std::time::Duration;

use reqwest::Client;
use screenscore_common::{Error, MediaKind, Result, NO_POSTER_PLACEHOLDER};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::config::TmdbConfig;

/// Sub-resources fetched together with a title's details.
const DETAIL_APPENDS: &str = "release_dates,watch/providers,external_ids,credits,videos";

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Thin TMDB v3 client keyed by a process-wide API key.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    http: Client,
    base_url: String,
    api_key: String,
    language: String,
}

impl TmdbClient {
    pub fn new(config: &TmdbConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::internal(format!("Failed to build TMDB client: {e}")))?;
        Ok(Self::with_client(http, config))
    }

    pub fn with_client(http: Client, config: &TmdbConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            language: config.language.clone(),
        }
    }

    /// Whether an API key is configured.
    pub fn is_available(&self) -> bool {
        !self.api_key.is_empty()
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, extra_params: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, "TMDB request");

        let mut params: Vec<(&str, &str)> = vec![
            ("api_key", self.api_key.as_str()),
            ("language", self.language.as_str()),
        ];
        params.extend_from_slice(extra_params);

        let resp = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| Error::Request(format!("TMDB request failed: {}", e.without_url())))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::error!(status = %status, path, "TMDB returned error status");
            return Err(Error::upstream(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
            ));
        }

        resp.json::<T>()
            .await
            .map_err(|e| Error::Decode(format!("TMDB parse error: {}", e.without_url())))
    }

    /// Search movies, series and people in one call (first page, no adult titles).
    pub async fn search_multi(&self, query: &str) -> Result<Vec<MultiSearchResult>> {
        let resp: MultiSearchResponse = self
            .get(
                "/search/multi",
                &[("query", query), ("include_adult", "false"), ("page", "1")],
            )
            .await?;
        Ok(resp.results)
    }

    /// Full record for one title, with credits, videos and external ids appended.
    pub async fn title_details(&self, id: u64, kind: MediaKind) -> Result<TitleDetails> {
        self.get(
            &format!("/{}/{id}", kind.api_segment()),
            &[("append_to_response", DETAIL_APPENDS)],
        )
        .await
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Absolute poster URL for `poster_path`, or the local placeholder.
pub fn poster_url(base: &str, poster_path: Option<&str>) -> String {
    match poster_path.filter(|p| !p.is_empty()) {
        Some(path) => format!("{base}{path}"),
        None => NO_POSTER_PLACEHOLDER.to_string(),
    }
}

/// First four characters of a `YYYY-MM-DD` date, or empty.
pub fn year_of(date: Option<&str>) -> String {
    date.map(|d| d.chars().take(4).collect())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct MultiSearchResponse {
    #[serde(default)]
    results: Vec<MultiSearchResult>,
}

/// One raw entry of a multi-type search.
///
/// Every field is optional: person entries share the list and carry a
/// different shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MultiSearchResult {
    pub id: Option<u64>,
    pub media_type: Option<String>,
    /// Movie title.
    pub title: Option<String>,
    /// Series name.
    pub name: Option<String>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    pub poster_path: Option<String>,
}

/// Detail record for a movie or series, sub-resources included.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TitleDetails {
    /// Movies only; series expose it through `external_ids`.
    pub imdb_id: Option<String>,
    pub title: Option<String>,
    pub name: Option<String>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    /// Minutes.
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub overview: Option<String>,
    pub vote_average: Option<f64>,
    pub poster_path: Option<String>,
    #[serde(default)]
    pub credits: Credits,
    #[serde(default)]
    pub created_by: Vec<Person>,
    pub number_of_seasons: Option<u32>,
    pub number_of_episodes: Option<u32>,
    #[serde(default)]
    pub external_ids: ExternalIds,
    #[serde(default)]
    pub videos: Videos,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Genre {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CrewMember {
    pub name: Option<String>,
    pub job: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Person {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalIds {
    pub imdb_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Videos {
    #[serde(default)]
    pub results: Vec<Video>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Video {
    pub key: Option<String>,
    pub site: Option<String>,
    #[serde(rename = "type")]
    pub video_type: Option<String>,
}
