mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Environment variable that overrides `tmdb.api_key`
pub const API_KEY_ENV: &str = "TMDB_API_KEY";

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    apply_env_overrides(&mut config);
    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./config.toml",
        "./screenscore.toml",
        "~/.config/screenscore/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    // Return default config if no file found
    let mut config = Config::default();
    apply_env_overrides(&mut config);
    validate_config(&config)?;
    Ok(config)
}

/// Load variables from a `.env` file into the process environment.
///
/// With no explicit path the working directory and its parents are searched.
/// Variables already set in the environment are left alone. Returns whether
/// a file was loaded; a missing file is not an error.
pub fn load_dotenv(path: Option<&Path>) -> Result<bool> {
    let loaded = match path {
        Some(path) => dotenvy::from_path(path).map(|_| path.to_path_buf()),
        None => dotenvy::dotenv(),
    };

    match loaded {
        Ok(found) => {
            tracing::debug!("Loaded environment from {:?}", found);
            Ok(true)
        }
        Err(dotenvy::Error::Io(_)) => {
            tracing::debug!("No .env file found");
            Ok(false)
        }
        Err(e) => Err(e).context("Failed to parse .env file"),
    }
}

/// Read the API key from the environment, if set
pub fn apply_env_overrides(config: &mut Config) {
    if let Ok(key) = std::env::var(API_KEY_ENV) {
        if !key.trim().is_empty() {
            config.tmdb.api_key = key.trim().to_string();
        }
    }
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.server.port == 0 {
        anyhow::bail!("Server port cannot be 0");
    }

    if config.tmdb.timeout_secs == 0 {
        anyhow::bail!("TMDB timeout cannot be 0");
    }

    if config.scrape.timeout_secs == 0 {
        anyhow::bail!("Scrape timeout cannot be 0");
    }

    for (name, url) in [
        ("tmdb.base_url", &config.tmdb.base_url),
        ("scrape.imdb_base_url", &config.scrape.imdb_base_url),
        ("scrape.rt_base_url", &config.scrape.rt_base_url),
    ] {
        reqwest::Url::parse(url).with_context(|| format!("Invalid {}: {}", name, url))?;
    }

    if config.tmdb.api_key.is_empty() {
        tracing::warn!(
            "No TMDB API key configured; set {} or tmdb.api_key",
            API_KEY_ENV
        );
    }

    if let Some(dir) = &config.server.static_dir {
        if !dir.exists() {
            tracing::warn!("Static directory does not exist: {:?}", dir);
        }
    }

    Ok(())
}
