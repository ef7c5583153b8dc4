//! Detail aggregation: one TMDB record plus two scraped enrichments.
//!
//! The TMDB fetch is mandatory and any failure there aborts the request.
//! The IMDb rating and the Rotten Tomatoes lookup run concurrently once the
//! record is in hand; each degrades to absent fields on its own.

use std::sync::Arc;

use screenscore_common::{MediaDetail, MediaKind, MediaSpecifics, RatingScores, Result};
use tracing::{debug, info};

use super::tmdb::{poster_url, year_of, Credits, TitleDetails, TmdbClient, Videos};
use crate::scrape::{RatingSource, ReviewSource};

/// Message shown for any failure on the detail page.
pub const DETAILS_ERROR_MESSAGE: &str = "Error getting details. Try again.";

/// Builds [`MediaDetail`] records from TMDB and the scrape sources.
#[derive(Clone)]
pub struct DetailAggregator {
    tmdb: Arc<TmdbClient>,
    ratings: Arc<dyn RatingSource>,
    reviews: Arc<dyn ReviewSource>,
    poster_base: String,
}

impl std::fmt::Debug for DetailAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetailAggregator")
            .field("ratings", &self.ratings.name())
            .field("reviews", &self.reviews.name())
            .field("poster_base", &self.poster_base)
            .finish()
    }
}

impl DetailAggregator {
    pub fn new(
        tmdb: Arc<TmdbClient>,
        ratings: Arc<dyn RatingSource>,
        reviews: Arc<dyn ReviewSource>,
        poster_base: impl Into<String>,
    ) -> Self {
        Self {
            tmdb,
            ratings,
            reviews,
            poster_base: poster_base.into(),
        }
    }

    /// Fetch and merge everything known about one title.
    pub async fn details(&self, id: u64, kind: MediaKind) -> Result<MediaDetail> {
        let raw = self.tmdb.title_details(id, kind).await?;

        let (external_id, title, date) = match kind {
            MediaKind::Movie => (&raw.imdb_id, &raw.title, &raw.release_date),
            MediaKind::Tv => (&raw.external_ids.imdb_id, &raw.name, &raw.first_air_date),
        };
        let external_id = non_empty(external_id.clone());
        let title = title.clone().unwrap_or_default();
        let year = year_of(date.as_deref());

        let (numeric_rating, (review_url, review_scores)) = tokio::join!(
            self.ratings.rating(external_id.as_deref()),
            self.review_lookup(&title, &year, kind),
        );

        info!(
            id,
            kind = %kind,
            imdb = numeric_rating.is_some(),
            rt = review_scores.is_some(),
            "Details aggregated"
        );

        Ok(MediaDetail {
            id,
            poster_url: poster_url(&self.poster_base, raw.poster_path.as_deref()),
            external_rating_id: external_id,
            title,
            year,
            genres: non_empty_list(raw.genres.iter().filter_map(|g| non_empty(g.name.clone())).collect()),
            overview: raw.overview.clone().unwrap_or_default(),
            aggregate_score: round_score(raw.vote_average),
            external_numeric_rating: numeric_rating,
            review_aggregator_url: review_url,
            review_scores,
            trailer_id: trailer_id(&raw.videos),
            specifics: specifics(&raw, kind),
        })
    }

    /// Locate the review page, then read its scores.
    async fn review_lookup(
        &self,
        title: &str,
        year: &str,
        kind: MediaKind,
    ) -> (Option<String>, Option<RatingScores>) {
        if title.is_empty() {
            debug!("Skipping review lookup for untitled record");
            return (None, None);
        }

        let url = self.reviews.locate(title, year, kind).await;
        let scores = self.reviews.scores(url.as_deref()).await;
        (url, scores)
    }
}

fn specifics(raw: &TitleDetails, kind: MediaKind) -> MediaSpecifics {
    match kind {
        MediaKind::Movie => MediaSpecifics::Movie {
            runtime: format_runtime(raw.runtime),
            directors: non_empty_list(directors(&raw.credits)),
        },
        MediaKind::Tv => MediaSpecifics::Tv {
            creators: non_empty_list(raw.created_by.iter().filter_map(|p| p.name.clone()).collect()),
            season_count: raw.number_of_seasons.filter(|n| *n > 0),
            episode_count: raw.number_of_episodes.filter(|n| *n > 0),
        },
    }
}

/// `125` minutes becomes `"2h 5m"`; zero or missing runtimes are absent.
pub fn format_runtime(minutes: Option<u32>) -> Option<String> {
    let minutes = minutes.filter(|m| *m > 0)?;
    Some(format!("{}h {}m", minutes / 60, minutes % 60))
}

/// Round a vote average to one decimal.
///
/// Zero is treated as "no rating", so a title genuinely averaging 0.0 is
/// indistinguishable from one without votes.
pub fn round_score(average: Option<f64>) -> Option<f64> {
    let rounded = (average? * 10.0).round() / 10.0;
    if rounded.is_finite() && rounded != 0.0 {
        Some(rounded)
    } else {
        None
    }
}

fn directors(credits: &Credits) -> Vec<String> {
    credits
        .crew
        .iter()
        .filter(|member| member.job.as_deref() == Some("Director"))
        .filter_map(|member| member.name.clone())
        .collect()
}

/// Key of the first YouTube trailer, if any.
pub fn trailer_id(videos: &Videos) -> Option<String> {
    videos
        .results
        .iter()
        .find(|video| {
            video.site.as_deref() == Some("YouTube")
                && video
                    .video_type
                    .as_deref()
                    .is_some_and(|t| t.contains("Trailer"))
        })
        .and_then(|video| non_empty(video.key.clone()))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn non_empty_list(items: Vec<String>) -> Option<Vec<String>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}
