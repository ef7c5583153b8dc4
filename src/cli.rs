use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "screenscore")]
#[command(author, version, about = "Search titles and aggregate TMDB, IMDb and Rotten Tomatoes ratings")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Start {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Search for movies and TV shows by title
    Search {
        /// Free-text title query
        #[arg(required = true)]
        query: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fetch aggregated details for one title
    Details {
        /// TMDB id of the title
        id: u64,

        /// Media type: movie or tv
        media_type: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the URL slug for a title
    Slug {
        /// Title to normalize
        title: String,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
