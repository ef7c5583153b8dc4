//! Screenscore-Common: Shared types, errors, and utilities.
//!
//! This crate provides the records exchanged between the aggregation
//! pipeline and the web layer:
//!
//! - **Core Types**: media kinds and review badge states
//! - **Models**: search candidates, rating scores, and detail records
//! - **Slugs**: title normalization for display and linking
//! - **Error Handling**: common error type and result alias
//!
//! # Examples
//!
//! ```
//! use screenscore_common::{MediaKind, SearchCandidate, NO_POSTER_PLACEHOLDER};
//!
//! let candidate = SearchCandidate {
//!     id: 27205,
//!     title: "Inception".to_string(),
//!     year: "2010".to_string(),
//!     media_kind: MediaKind::Movie,
//!     poster_url: NO_POSTER_PLACEHOLDER.to_string(),
//! };
//! assert_eq!(candidate.media_kind.to_string(), "Movie");
//! ```

pub mod error;
pub mod models;
pub mod slug;
pub mod types;

pub use error::{Error, Result};
pub use models::*;
pub use slug::format_title;
pub use types::*;
