//! Title search: raw multi-type results to display-ready candidates.

use std::collections::HashSet;
use std::sync::Arc;

use screenscore_common::{Error, MediaKind, Result, SearchCandidate};
use tracing::{debug, info};

use super::tmdb::{poster_url, year_of, MultiSearchResult, TmdbClient};

/// Message shown when a query is blank.
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a search term.";

/// Runs searches against TMDB and normalizes the answer.
#[derive(Debug, Clone)]
pub struct SearchService {
    tmdb: Arc<TmdbClient>,
    poster_base: String,
}

impl SearchService {
    pub fn new(tmdb: Arc<TmdbClient>, poster_base: impl Into<String>) -> Self {
        Self {
            tmdb,
            poster_base: poster_base.into(),
        }
    }

    /// Search for movies and series matching `query`.
    ///
    /// Returns `Ok(None)` when nothing usable came back, so callers can show
    /// a "no results" message instead of an empty page. A blank query is
    /// rejected before any request is made.
    pub async fn search(&self, query: &str) -> Result<Option<Vec<SearchCandidate>>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::invalid_input(EMPTY_QUERY_MESSAGE));
        }

        let raw = self.tmdb.search_multi(query).await?;
        let candidates = normalize_results(&raw, &self.poster_base);
        info!(
            query,
            raw = raw.len(),
            candidates = candidates.len(),
            "Search completed"
        );

        if candidates.is_empty() {
            Ok(None)
        } else {
            Ok(Some(candidates))
        }
    }
}

/// Turn raw search entries into candidates, keeping API order.
///
/// Entries that are neither movies nor series are dropped, as are entries
/// without an id. An id is emitted at most once; the first occurrence wins.
pub fn normalize_results(results: &[MultiSearchResult], poster_base: &str) -> Vec<SearchCandidate> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::with_capacity(results.len());

    for result in results {
        let Some(kind) = result
            .media_type
            .as_deref()
            .and_then(MediaKind::from_api_media_type)
        else {
            continue;
        };
        let Some(id) = result.id else {
            continue;
        };
        if !seen.insert(id) {
            debug!(id, "Dropping duplicate search result");
            continue;
        }

        candidates.push(to_candidate(result, id, kind, poster_base));
    }

    candidates
}

fn to_candidate(result: &MultiSearchResult, id: u64, kind: MediaKind, poster_base: &str) -> SearchCandidate {
    let (title, date) = match kind {
        MediaKind::Movie => (&result.title, &result.release_date),
        MediaKind::Tv => (&result.name, &result.first_air_date),
    };

    SearchCandidate {
        id,
        title: title.clone().unwrap_or_default(),
        year: year_of(date.as_deref()),
        media_kind: kind,
        poster_url: poster_url(poster_base, result.poster_path.as_deref()),
    }
}
