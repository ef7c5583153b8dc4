//! IMDb community rating scraper.

use async_trait::async_trait;
use scraper::{Html, Selector};
use tracing::debug;

use super::RatingSource;
use crate::fetch::Fetcher;

const RATING_SELECTOR: &str = r#"div[data-testid="hero-rating-bar__aggregate-rating__score"]"#;

/// Number of trailing characters making up the unit suffix (`/10`).
const UNIT_SUFFIX_LEN: usize = 3;

/// Reads the aggregate rating widget off IMDb title pages.
#[derive(Debug, Clone)]
pub struct ImdbScraper {
    fetcher: Fetcher,
    base_url: String,
}

impl ImdbScraper {
    pub fn new(fetcher: Fetcher, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Canonical title page URL for an IMDb id.
    pub fn title_url(&self, imdb_id: &str) -> String {
        format!("{}/title/{}/", self.base_url, urlencoding::encode(imdb_id))
    }
}

#[async_trait]
impl RatingSource for ImdbScraper {
    fn name(&self) -> &'static str {
        "imdb"
    }

    async fn rating(&self, external_id: Option<&str>) -> Option<String> {
        let imdb_id = external_id.filter(|id| !id.is_empty())?;
        let url = self.title_url(imdb_id);
        let body = self.fetcher.fetch_page(&url).await?;

        let rating = parse_rating(&body);
        if rating.is_none() {
            debug!(url = %url, "IMDb rating widget not found");
        }
        rating
    }
}

/// Extract the rating text from an IMDb title page.
pub fn parse_rating(body: &str) -> Option<String> {
    let document = Html::parse_document(body);
    let selector = Selector::parse(RATING_SELECTOR).ok()?;
    let widget = document.select(&selector).next()?;

    let text: String = widget.text().collect();
    strip_unit_suffix(text.trim())
}

/// Drop the trailing unit suffix: `"7.8/10"` becomes `"7.8"`.
fn strip_unit_suffix(text: &str) -> Option<String> {
    let len = text.chars().count();
    if len <= UNIT_SUFFIX_LEN {
        return None;
    }
    Some(text.chars().take(len - UNIT_SUFFIX_LEN).collect())
}
