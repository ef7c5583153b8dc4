mod cli;

use screenscore::{config, server};
use screenscore_common::{format_title, MediaDetail, MediaKind, MediaSpecifics};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

async fn start_server(host: String, port: u16, config_path: Option<&std::path::Path>) -> Result<()> {
    // Load config
    let mut config = config::load_config_or_default(config_path)?;

    // Override host/port from CLI if specified
    config.server.host = host;
    config.server.port = port;

    tracing::info!("Starting Screenscore server");
    tracing::info!(
        "Server will listen on {}:{}",
        config.server.host,
        config.server.port
    );

    server::start_server(config).await
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "screenscore=trace,screenscore_common=debug,tower_http=debug".to_string()
        } else {
            "screenscore=debug,tower_http=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    config::load_dotenv(None)?;

    match cli.command {
        Commands::Start { host, port } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(start_server(host, port, cli.config.as_deref()))
        }
        Commands::Search { query, json } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(search(&query, cli.config.as_deref(), json))
        }
        Commands::Details {
            id,
            media_type,
            json,
        } => {
            let kind: MediaKind = media_type.parse().map_err(anyhow::Error::msg)?;
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(details(id, kind, cli.config.as_deref(), json))
        }
        Commands::Slug { title } => {
            println!("{}", format_title(&title));
            Ok(())
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("screenscore {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

async fn search(query: &str, config_path: Option<&std::path::Path>, json: bool) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let ctx = server::AppContext::from_config(config)?;

    let Some(results) = ctx.search.search(query).await? else {
        println!("No results were found for your search. Try again.");
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for candidate in &results {
        let year = if candidate.year.is_empty() {
            "----"
        } else {
            candidate.year.as_str()
        };
        println!(
            "{:>8}  {:<5}  {}  {}",
            candidate.id,
            candidate.media_kind.to_string(),
            year,
            candidate.title
        );
    }

    Ok(())
}

async fn details(
    id: u64,
    kind: MediaKind,
    config_path: Option<&std::path::Path>,
    json: bool,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let ctx = server::AppContext::from_config(config)?;

    let detail = ctx.details.details(id, kind).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
    } else {
        print_detail(&detail);
    }

    Ok(())
}

fn print_detail(detail: &MediaDetail) {
    fn or_dash(value: Option<&str>) -> &str {
        value.unwrap_or("-")
    }

    println!("{} ({}) [{}]", detail.title, detail.year, detail.media_kind());
    println!("TMDB id: {}", detail.id);
    println!("IMDb id: {}", or_dash(detail.external_rating_id.as_deref()));
    if let Some(genres) = &detail.genres {
        println!("Genres: {}", genres.join(", "));
    }

    match &detail.specifics {
        MediaSpecifics::Movie { runtime, directors } => {
            println!("Runtime: {}", or_dash(runtime.as_deref()));
            if let Some(directors) = directors {
                println!("Director: {}", directors.join(", "));
            }
        }
        MediaSpecifics::Tv {
            creators,
            season_count,
            episode_count,
        } => {
            if let Some(creators) = creators {
                println!("Creator: {}", creators.join(", "));
            }
            if let Some(seasons) = season_count {
                println!("Seasons: {}", seasons);
            }
            if let Some(episodes) = episode_count {
                println!("Episodes: {}", episodes);
            }
        }
    }

    println!();
    match detail.aggregate_score {
        Some(score) => println!("TMDB: {:.1}", score),
        None => println!("TMDB: -"),
    }
    println!("IMDb: {}", or_dash(detail.external_numeric_rating.as_deref()));
    match &detail.review_scores {
        Some(scores) => {
            let pct = |v: Option<u8>| v.map(|v| format!("{}%", v)).unwrap_or_else(|| "-".into());
            println!(
                "Tomatometer: {}  Audience: {}",
                pct(scores.critic_score),
                pct(scores.audience_score)
            );
        }
        None => println!("Rotten Tomatoes: -"),
    }
    if let Some(url) = &detail.review_aggregator_url {
        println!("  {}", url);
    }
    if let Some(trailer) = &detail.trailer_id {
        println!("Trailer: https://www.youtube.com/watch?v={}", trailer);
    }

    if !detail.overview.is_empty() {
        println!("\n{}", detail.overview);
    }
}

fn validate_config(path: Option<&std::path::Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Server: {}:{}", config.server.host, config.server.port);
            println!("  TMDB: {}", config.tmdb.base_url);
            println!("  API key set: {}", !config.tmdb.api_key.is_empty());
            println!("  Stealth scraping: {}", config.scrape.stealth);
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Server: {}:{}", config.server.host, config.server.port);
        }
    }

    Ok(())
}
