//! Best-effort enrichment scraped from third-party HTML pages.
//!
//! Each site sits behind a narrow trait so the detail aggregator never
//! touches markup. Implementations must swallow every failure (network,
//! status, missing widget) and answer `None`; markup drift on one site then
//! only blanks the fields that site provides.
//!
//! # Module layout
//!
//! - [`imdb`] -- numeric community rating keyed by an IMDb id.
//! - [`rotten_tomatoes`] -- review page lookup and critic/audience scores.

use async_trait::async_trait;
use screenscore_common::{MediaKind, RatingScores};

pub mod imdb;
pub mod rotten_tomatoes;

pub use imdb::ImdbScraper;
pub use rotten_tomatoes::RottenTomatoesScraper;

/// Source of a single numeric rating per title.
#[async_trait]
pub trait RatingSource: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Look up the rating for `external_id`.
    ///
    /// `None` ids resolve to `None` without touching the network.
    async fn rating(&self, external_id: Option<&str>) -> Option<String>;
}

/// Source of critic/audience score pairs.
#[async_trait]
pub trait ReviewSource: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Find the review page for a title released in `year`.
    async fn locate(&self, title: &str, year: &str, kind: MediaKind) -> Option<String>;

    /// Read the score widget from a review page.
    ///
    /// `None` urls resolve to `None` without touching the network.
    async fn scores(&self, url: Option<&str>) -> Option<RatingScores>;
}
