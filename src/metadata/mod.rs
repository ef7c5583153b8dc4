//! Title metadata: search and detail aggregation.
//!
//! # Module layout
//!
//! - [`tmdb`] -- TMDB client and raw response types.
//! - [`search`] -- Multi-type search normalized into candidates.
//! - [`details`] -- Per-title aggregation with scraped enrichment.

pub mod details;
pub mod search;
pub mod tmdb;

pub use details::{DetailAggregator, DETAILS_ERROR_MESSAGE};
pub use search::{normalize_results, SearchService, EMPTY_QUERY_MESSAGE};
pub use tmdb::TmdbClient;
