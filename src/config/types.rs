use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub tmdb: TmdbConfig,

    #[serde(default)]
    pub scrape: ScrapeConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory served under `/static` (poster placeholder, stylesheets)
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TmdbConfig {
    /// API key (overridden by the `TMDB_API_KEY` environment variable)
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_tmdb_base_url")]
    pub base_url: String,

    #[serde(default = "default_language")]
    pub language: String,

    /// Poster prefix for search candidates (185px wide)
    #[serde(default = "default_search_poster_base")]
    pub search_poster_base: String,

    /// Poster prefix for detail pages (500px wide)
    #[serde(default = "default_detail_poster_base")]
    pub detail_poster_base: String,

    /// Per-request timeout for API calls in seconds (default: 15)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_tmdb_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}
fn default_language() -> String {
    "en-US".to_string()
}
fn default_search_poster_base() -> String {
    "https://www.themoviedb.org/t/p/w185".to_string()
}
fn default_detail_poster_base() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_tmdb_base_url(),
            language: default_language(),
            search_poster_base: default_search_poster_base(),
            detail_poster_base: default_detail_poster_base(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScrapeConfig {
    #[serde(default = "default_imdb_base_url")]
    pub imdb_base_url: String,

    #[serde(default = "default_rt_base_url")]
    pub rt_base_url: String,

    /// Per-request timeout for scrape fetches in seconds (default: 15)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Rotate the User-Agent and wait 1-2s before every scrape fetch
    #[serde(default)]
    pub stealth: bool,
}

fn default_imdb_base_url() -> String {
    "https://www.imdb.com".to_string()
}
fn default_rt_base_url() -> String {
    "https://www.rottentomatoes.com".to_string()
}
fn default_timeout_secs() -> u64 {
    15
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            imdb_base_url: default_imdb_base_url(),
            rt_base_url: default_rt_base_url(),
            timeout_secs: default_timeout_secs(),
            stealth: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert!(config.tmdb.api_key.is_empty());
        assert_eq!(config.tmdb.language, "en-US");
        assert!(config.tmdb.search_poster_base.ends_with("/w185"));
        assert!(config.tmdb.detail_poster_base.ends_with("/w500"));
        assert_eq!(config.tmdb.timeout_secs, 15);
        assert_eq!(config.scrape.timeout_secs, 15);
        assert!(!config.scrape.stealth);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [tmdb]
            api_key = "abc"

            [scrape]
            stealth = true
            "#,
        )
        .unwrap();

        assert_eq!(config.tmdb.api_key, "abc");
        assert_eq!(config.tmdb.base_url, "https://api.themoviedb.org/3");
        assert!(config.scrape.stealth);
        assert_eq!(config.scrape.rt_base_url, "https://www.rottentomatoes.com");
        assert_eq!(config.server.port, 8080);
    }
}
