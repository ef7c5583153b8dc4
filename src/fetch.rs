//! Page fetching for the scrape targets.
//!
//! [`Fetcher`] owns one long-lived `reqwest::Client` configured with
//! browser-like headers and a fixed timeout. Fetches never fail loudly: a
//! transport error, timeout or non-2xx status is logged and reported as
//! `None`, which the extractors turn into an absent field.

use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::Client;
use screenscore_common::{Error, Result};
use tracing::{debug, warn};

use crate::config::ScrapeConfig;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Desktop browser identities rotated through in stealth mode.
const USER_AGENT_POOL: &[&str] = &[
    DEFAULT_USER_AGENT,
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.2 Safari/605.1.15",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
];

/// Bounds of the random pause inserted before stealth fetches.
const STEALTH_DELAY_MS: std::ops::RangeInclusive<u64> = 1000..=2000;

/// HTTP client for scrape targets.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    stealth: bool,
}

impl Fetcher {
    /// Build a fetcher from scrape settings.
    pub fn new(config: &ScrapeConfig) -> Result<Self> {
        let client = Client::builder()
            .default_headers(browser_headers())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::internal(format!("Failed to build scrape client: {e}")))?;

        Ok(Self {
            client,
            stealth: config.stealth,
        })
    }

    /// GET `url` and return the body, or `None` on any failure.
    pub async fn fetch_page(&self, url: &str) -> Option<String> {
        let mut request = self.client.get(url);

        if self.stealth {
            let (user_agent, delay) = stealth_params();
            debug!(url, delay_ms = delay.as_millis() as u64, "Delaying scrape fetch");
            tokio::time::sleep(delay).await;
            request = request.header(USER_AGENT, user_agent);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(url, error = %e, "Scrape request failed");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = %status, "Scrape target returned error status");
            return None;
        }

        match response.text().await {
            Ok(body) => {
                debug!(url, bytes = body.len(), "Fetched page");
                Some(body)
            }
            Err(e) => {
                warn!(url, error = %e, "Failed to read scrape response body");
                None
            }
        }
    }
}

fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
    headers.insert(ACCEPT, HeaderValue::from_static("text/html"));
    headers
}

/// Pick a User-Agent and a delay for one stealth fetch.
fn stealth_params() -> (&'static str, Duration) {
    let mut rng = rand::thread_rng();
    let user_agent = USER_AGENT_POOL
        .choose(&mut rng)
        .copied()
        .unwrap_or(DEFAULT_USER_AGENT);
    let delay = Duration::from_millis(rng.gen_range(STEALTH_DELAY_MS));
    (user_agent, delay)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, header_regex, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn stealth_params_stay_in_bounds() {
        for _ in 0..50 {
            let (user_agent, delay) = stealth_params();
            assert!(USER_AGENT_POOL.contains(&user_agent));
            assert!(delay >= Duration::from_secs(1));
            assert!(delay <= Duration::from_secs(2));
        }
    }

    #[test]
    fn browser_headers_present() {
        let headers = browser_headers();
        assert_eq!(headers[ACCEPT], "text/html");
        assert_eq!(headers[ACCEPT_LANGUAGE], "en-US,en;q=0.5");
        assert!(headers[USER_AGENT].to_str().unwrap().starts_with("Mozilla/5.0"));
    }

    #[tokio::test]
    async fn unreachable_host_yields_none() {
        let fetcher = Fetcher::new(&ScrapeConfig {
            timeout_secs: 1,
            ..ScrapeConfig::default()
        })
        .unwrap();
        // Port 9 (discard) on localhost is closed in test environments.
        assert!(fetcher.fetch_page("http://127.0.0.1:9/").await.is_none());
    }

    #[tokio::test]
    async fn requests_carry_browser_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .and(header("accept", "text/html"))
            .and(header_regex("user-agent", "^Mozilla/5.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher = Fetcher::new(&ScrapeConfig::default()).unwrap();
        let body = fetcher.fetch_page(&format!("{}/page", server.uri())).await;
        assert_eq!(body.as_deref(), Some("<html></html>"));
    }

    #[tokio::test]
    async fn slow_page_hits_configured_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/slow"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("late")
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let fetcher = Fetcher::new(&ScrapeConfig {
            timeout_secs: 1,
            ..ScrapeConfig::default()
        })
        .unwrap();
        let started = std::time::Instant::now();
        assert!(fetcher.fetch_page(&format!("{}/slow", server.uri())).await.is_none());
        assert!(started.elapsed() < Duration::from_secs(4));
    }
}
