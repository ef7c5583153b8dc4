//! Rotten Tomatoes review page lookup and score extraction.
//!
//! The site has no API. Lookup goes through the public search page, whose
//! result rows are custom elements carrying the release year as an
//! attribute; the title page exposes both scores as attributes of its
//! score board element.

use async_trait::async_trait;
use reqwest::Url;
use scraper::{Html, Selector};
use screenscore_common::{MediaKind, RatingScores};
use tracing::debug;

use super::ReviewSource;
use crate::fetch::Fetcher;

const SEARCH_ROW_SELECTOR: &str = "search-page-media-row";
const ROW_LINK_SELECTOR: &str = r#"a[data-qa="info-name"]"#;
const SCORE_BOARD_SELECTOR: &str = "score-board-deprecated";

/// Scrapes review URLs and score pairs from Rotten Tomatoes.
#[derive(Debug, Clone)]
pub struct RottenTomatoesScraper {
    fetcher: Fetcher,
    base_url: String,
}

impl RottenTomatoesScraper {
    pub fn new(fetcher: Fetcher, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Search page URL for a title.
    pub fn search_url(&self, title: &str) -> String {
        format!("{}/search?search={}", self.base_url, urlencoding::encode(title))
    }

    /// Resolve a result link against the site root; absolute links pass through.
    fn resolve(&self, href: &str) -> Option<String> {
        let base = Url::parse(&format!("{}/", self.base_url)).ok()?;
        base.join(href).ok().map(String::from)
    }
}

#[async_trait]
impl ReviewSource for RottenTomatoesScraper {
    fn name(&self) -> &'static str {
        "rotten_tomatoes"
    }

    async fn locate(&self, title: &str, year: &str, kind: MediaKind) -> Option<String> {
        let url = self.search_url(title);
        let body = self.fetcher.fetch_page(&url).await?;

        let Some(href) = parse_review_url(&body, year, kind) else {
            debug!(title, year, kind = %kind, "No Rotten Tomatoes result matched the year");
            return None;
        };
        self.resolve(&href)
    }

    async fn scores(&self, url: Option<&str>) -> Option<RatingScores> {
        let url = url?;
        let body = self.fetcher.fetch_page(url).await?;

        let scores = parse_scores(&body);
        match &scores {
            None => debug!(url, "Rotten Tomatoes score board not found"),
            Some(found) if found.is_empty() => {
                debug!(url, "Rotten Tomatoes score board carried no usable values")
            }
            Some(_) => {}
        }
        scores
    }
}

/// Name of the search row attribute holding the year for a media kind.
fn year_attribute(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Movie => "releaseyear",
        MediaKind::Tv => "startyear",
    }
}

/// Find the link of the first search row whose year attribute equals `year`.
pub fn parse_review_url(body: &str, year: &str, kind: MediaKind) -> Option<String> {
    let document = Html::parse_document(body);
    let row_selector = Selector::parse(SEARCH_ROW_SELECTOR).ok()?;
    let link_selector = Selector::parse(ROW_LINK_SELECTOR).ok()?;
    let attribute = year_attribute(kind);

    let row = document
        .select(&row_selector)
        .find(|row| row.value().attr(attribute) == Some(year))?;

    row.select(&link_selector)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .map(|href| href.to_string())
}

/// Read critic and audience scores from a title page's score board.
pub fn parse_scores(body: &str) -> Option<RatingScores> {
    let document = Html::parse_document(body);
    let selector = Selector::parse(SCORE_BOARD_SELECTOR).ok()?;
    let board = document.select(&selector).next()?;
    let attrs = board.value();

    Some(RatingScores::from_raw(
        attrs.attr("tomatometerscore"),
        attrs.attr("tomatometerstate"),
        attrs.attr("audiencescore"),
        attrs.attr("audiencestate"),
    ))
}
