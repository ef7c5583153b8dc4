//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`], which starts one `wiremock` server standing in
//! for TMDB, IMDb and Rotten Tomatoes at once (their paths do not collide)
//! and points a default [`Config`] at it.

#![allow(dead_code)]

use axum::body::Body;
use axum::Router;
use http_body_util::BodyExt;
use screenscore::config::Config;
use screenscore::server::{create_router, AppContext};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const DETAIL_APPENDS: &str = "release_dates,watch/providers,external_ids,credits,videos";

pub struct TestHarness {
    pub upstream: MockServer,
    pub config: Config,
}

impl TestHarness {
    /// Start the mock upstream and build a config aimed at it.
    pub async fn new() -> Self {
        let upstream = MockServer::start().await;
        let config = test_config(&upstream.uri());
        Self { upstream, config }
    }

    pub fn ctx(&self) -> AppContext {
        AppContext::from_config(self.config.clone()).unwrap()
    }

    pub fn router(&self) -> Router {
        create_router(self.ctx(), None)
    }

    /// Answer `/search/multi` for `query` with the given results.
    pub async fn mount_search(&self, query: &str, results: Value) {
        Mock::given(method("GET"))
            .and(path("/search/multi"))
            .and(query_param("query", query))
            .and(query_param("api_key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "page": 1,
                "results": results,
            })))
            .mount(&self.upstream)
            .await;
    }

    /// Answer a TMDB detail request for `/{segment}/{id}`.
    pub async fn mount_detail(&self, segment: &str, id: u64, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/{segment}/{id}")))
            .and(query_param("append_to_response", DETAIL_APPENDS))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&self.upstream)
            .await;
    }

    /// Serve `html` at `page_path` and require exactly `hits` requests.
    pub async fn mount_page(&self, page_path: &str, html: &str, hits: u64) {
        Mock::given(method("GET"))
            .and(path(page_path))
            .respond_with(ResponseTemplate::new(200).set_body_string(html))
            .expect(hits)
            .mount(&self.upstream)
            .await;
    }

    /// Serve the Rotten Tomatoes search page for `title`.
    pub async fn mount_rt_search(&self, title: &str, html: &str) {
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("search", title))
            .respond_with(ResponseTemplate::new(200).set_body_string(html))
            .expect(1)
            .mount(&self.upstream)
            .await;
    }
}

pub fn test_config(base: &str) -> Config {
    let mut config = Config::default();
    config.tmdb.api_key = "test-key".to_string();
    config.tmdb.base_url = base.to_string();
    config.scrape.imdb_base_url = base.to_string();
    config.scrape.rt_base_url = base.to_string();
    config.scrape.timeout_secs = 5;
    config
}

/// Helper to get a response body as JSON
pub async fn body_json(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn inception_detail() -> Value {
    json!({
        "id": 27205,
        "imdb_id": "tt1375666",
        "title": "Inception",
        "release_date": "2010-07-15",
        "runtime": 148,
        "overview": "Cobb, a skilled thief who commits corporate espionage by infiltrating the subconscious of his targets...",
        "vote_average": 8.369,
        "poster_path": "/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg",
        "genres": [
            { "id": 28, "name": "Action" },
            { "id": 878, "name": "Science Fiction" },
            { "id": 12, "name": "Adventure" }
        ],
        "credits": {
            "cast": [{ "name": "Leonardo DiCaprio", "character": "Cobb" }],
            "crew": [
                { "name": "Christopher Nolan", "job": "Director", "department": "Directing" },
                { "name": "Christopher Nolan", "job": "Screenplay", "department": "Writing" },
                { "name": "Emma Thomas", "job": "Producer", "department": "Production" }
            ]
        },
        "videos": {
            "results": [
                { "site": "YouTube", "type": "Featurette", "key": "feat" },
                { "site": "YouTube", "type": "Trailer", "key": "YoHD9XEInc0" }
            ]
        },
        "release_dates": { "results": [] },
        "watch/providers": { "results": {} }
    })
}

pub fn breaking_bad_detail() -> Value {
    json!({
        "id": 1396,
        "name": "Breaking Bad",
        "first_air_date": "2008-01-20",
        "overview": "Walter White, a New Mexico chemistry teacher...",
        "vote_average": 8.9,
        "poster_path": null,
        "genres": [{ "id": 18, "name": "Drama" }],
        "created_by": [{ "id": 66633, "name": "Vince Gilligan" }],
        "number_of_seasons": 5,
        "number_of_episodes": 62,
        "external_ids": { "tvdb_id": 81189 },
        "credits": { "crew": [] },
        "videos": { "results": [] }
    })
}

pub const IMDB_PAGE: &str = r#"
<html><body>
  <div data-testid="hero-rating-bar__aggregate-rating__score"><span>8.8</span><span>/10</span></div>
</body></html>
"#;

pub const RT_MOVIE_SEARCH: &str = r#"
<html><body>
  <search-page-media-row releaseyear="2010">
    <a data-qa="info-name" href="/m/inception">Inception</a>
  </search-page-media-row>
</body></html>
"#;

pub const RT_TV_SEARCH: &str = r#"
<html><body>
  <search-page-media-row startyear="2008" endyear="2013">
    <a data-qa="info-name" href="/tv/breaking_bad">Breaking Bad</a>
  </search-page-media-row>
</body></html>
"#;

pub const RT_MOVIE_PAGE: &str = r#"
<html><body>
  <score-board-deprecated tomatometerscore="87" tomatometerstate="certified-fresh"
      audiencescore="91" audiencestate="upright"></score-board-deprecated>
</body></html>
"#;

pub const RT_TV_PAGE: &str = r#"
<html><body>
  <score-board-deprecated tomatometerscore="96" tomatometerstate="certified-fresh"
      audiencescore="97" audiencestate="upright"></score-board-deprecated>
</body></html>
"#;
