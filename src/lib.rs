//! Screenscore - movie and TV rating aggregator
//!
//! This library crate exposes the search and detail pipelines for the
//! binary and for integration testing.

pub mod config;
pub mod fetch;
pub mod metadata;
pub mod scrape;
pub mod server;
