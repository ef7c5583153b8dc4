use crate::metadata::DETAILS_ERROR_MESSAGE;
use crate::server::error::AppError;
use crate::server::AppContext;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::get,
    Form, Json, Router,
};
use screenscore_common::{format_title, Error, MediaDetail, MediaKind, SearchCandidate};
use serde::{Deserialize, Serialize};

/// Message shown when a search produced no usable candidates.
pub const NO_RESULTS_MESSAGE: &str = "No results were found for your search. Try again.";

pub fn api_routes() -> Router<AppContext> {
    Router::new()
        .route("/health", get(health))
        .route("/search", get(search_query).post(search_form))
        .route("/details/:tmdb_id/:media_type", get(details))
        .route("/slug", get(slug))
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

#[derive(Deserialize)]
struct SearchForm {
    #[serde(default)]
    user_input: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchCandidate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

async fn search_query(
    State(ctx): State<AppContext>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    run_search(&ctx, &params.q).await
}

async fn search_form(
    State(ctx): State<AppContext>,
    Form(form): Form<SearchForm>,
) -> Result<Json<SearchResponse>, AppError> {
    run_search(&ctx, &form.user_input).await
}

async fn run_search(ctx: &AppContext, query: &str) -> Result<Json<SearchResponse>, AppError> {
    match ctx.search.search(query).await? {
        Some(results) => Ok(Json(SearchResponse {
            results,
            message: None,
        })),
        None => Ok(Json(SearchResponse {
            results: Vec::new(),
            message: Some(NO_RESULTS_MESSAGE),
        })),
    }
}

async fn details(
    State(ctx): State<AppContext>,
    Path((tmdb_id, media_type)): Path<(String, String)>,
) -> Result<Json<MediaDetail>, AppError> {
    let generic = |e: Error| {
        tracing::error!("Error getting details: {}", e);
        AppError::new(e).with_message(DETAILS_ERROR_MESSAGE)
    };

    let id: u64 = tmdb_id
        .parse()
        .map_err(|_| generic(Error::invalid_input(format!("Invalid TMDB id: {}", tmdb_id))))?;
    let kind: MediaKind = media_type.parse().map_err(|e: String| generic(Error::invalid_input(e)))?;

    ctx.details
        .details(id, kind)
        .await
        .map(Json)
        .map_err(generic)
}

#[derive(Deserialize)]
struct SlugQuery {
    #[serde(default)]
    title: String,
}

async fn slug(Query(params): Query<SlugQuery>) -> impl IntoResponse {
    Json(serde_json::json!({ "slug": format_title(&params.title) }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_results_response_shape() {
        let response = SearchResponse {
            results: Vec::new(),
            message: Some(NO_RESULTS_MESSAGE),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["results"].as_array().unwrap().len(), 0);
        assert_eq!(json["message"], NO_RESULTS_MESSAGE);
    }
}
