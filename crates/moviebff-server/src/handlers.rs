//! Request handlers.
//!
//! Each operation is a linear pipeline: validate, fetch the TMDB
//! configuration and the primary resource concurrently, then normalize. The
//! pipelines are plain async functions generic over [`TmdbApi`]; the axum
//! handlers below only extract inputs and attach freshness headers.

use std::collections::HashMap;

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, Uri, header};
use axum::response::IntoResponse;
use moviebff_api::tmdb::{SearchMovieParams, TmdbApi, TmdbConfiguration, TmdbError};
use tracing::instrument;

use crate::contract::{
    ConfigResponse, ErrorResponse, HealthResponse, ImageConfiguration, MovieDetails,
    SearchMoviesResponse,
};
use crate::error::{ApiError, Operation};
use crate::normalize::{
    normalize_configuration, normalize_movie_details, normalize_search_results,
};
use crate::state::AppState;
use crate::validate::{ValidationError, validate_movie_id, validate_search_query};

/// `Cache-Control` for `/config`. The image configuration rarely changes.
pub const CONFIG_CACHE_CONTROL: &str = "public, max-age=86400";

/// `Cache-Control` for search and details.
pub const MOVIE_CACHE_CONTROL: &str = "public, max-age=60";

/// Fetches and normalizes the image configuration.
///
/// # Errors
///
/// Returns an [`ApiError`] if the upstream call or normalization fails.
#[instrument(skip_all)]
pub async fn get_configuration<A>(api: &A) -> Result<ConfigResponse, ApiError>
where
    A: TmdbApi + Sync,
{
    let images = image_base(api.configuration().await, Operation::Configuration)?;
    Ok(ConfigResponse { images })
}

/// Validates the query, then searches TMDB.
///
/// # Errors
///
/// Returns an [`ApiError`] on invalid input, or if either upstream call or
/// normalization fails. A configuration failure takes precedence.
#[instrument(skip_all)]
pub async fn search_movies<A>(
    api: &A,
    params: &HashMap<String, String>,
) -> Result<SearchMoviesResponse, ApiError>
where
    A: TmdbApi + Sync,
{
    let query = validate_search_query(params)?;
    tracing::debug!(query = %query.query, page = query.page, "searching movies");
    let search = SearchMovieParams::new(query.query).page(query.page);

    let (config, results) = tokio::join!(api.configuration(), api.search_movie(&search));
    let images = image_base(config, Operation::SearchMovies)?;
    let results = results.map_err(|e| ApiError::upstream(Operation::SearchMovies, e))?;

    Ok(normalize_search_results(&results, &images.base_url))
}

/// Validates the movie ID, then fetches details with videos and credits.
///
/// # Errors
///
/// Returns an [`ApiError`] on invalid input, [`ApiError::MovieNotFound`] when
/// TMDB has no such movie, or another error if an upstream call or
/// normalization fails. A configuration failure takes precedence.
#[instrument(skip_all)]
pub async fn get_movie_details<A>(api: &A, raw_id: &str) -> Result<MovieDetails, ApiError>
where
    A: TmdbApi + Sync,
{
    let movie_id = validate_movie_id(raw_id)?;
    tracing::debug!(movie_id, "fetching movie details");

    let (config, details) = tokio::join!(api.configuration(), api.movie_details(movie_id));
    let images = image_base(config, Operation::MovieDetails)?;
    let details = details.map_err(|e| {
        if e.is_not_found() {
            ApiError::MovieNotFound(movie_id)
        } else {
            ApiError::upstream(Operation::MovieDetails, e)
        }
    })?;

    Ok(normalize_movie_details(&details, &images.base_url))
}

/// Collapses repeated query keys, keeping the first value of each.
#[must_use]
pub fn first_values(pairs: Vec<(String, String)>) -> HashMap<String, String> {
    let mut params = HashMap::with_capacity(pairs.len());
    for (key, value) in pairs {
        params.entry(key).or_insert(value);
    }
    params
}

fn image_base(
    config: Result<TmdbConfiguration, TmdbError>,
    operation: Operation,
) -> Result<ImageConfiguration, ApiError> {
    let config = config.map_err(|e| ApiError::upstream(operation, e))?;
    normalize_configuration(&config).map_err(|e| ApiError::normalize(operation, e))
}

// --- axum handlers ---

/// `GET /config`
///
/// # Errors
///
/// See [`get_configuration`].
pub async fn config_handler<A>(
    State(state): State<AppState<A>>,
) -> Result<impl IntoResponse, ApiError>
where
    A: TmdbApi + Sync + 'static,
{
    let body = get_configuration(state.api.as_ref()).await?;
    Ok(([(header::CACHE_CONTROL, CONFIG_CACHE_CONTROL)], Json(body)))
}

/// `GET /movies/search?q=<query>&page=<n>`
///
/// # Errors
///
/// See [`search_movies`].
pub async fn search_handler<A>(
    State(state): State<AppState<A>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, ApiError>
where
    A: TmdbApi + Sync + 'static,
{
    let params = first_values(pairs);
    let body = search_movies(state.api.as_ref(), &params).await?;
    Ok(([(header::CACHE_CONTROL, MOVIE_CACHE_CONTROL)], Json(body)))
}

/// `GET /movies/{id}`
///
/// # Errors
///
/// See [`get_movie_details`].
pub async fn details_handler<A>(
    State(state): State<AppState<A>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    A: TmdbApi + Sync + 'static,
{
    // Undecodable segments (e.g. invalid UTF-8) are rejected before validation.
    let Path(id) = id.map_err(|rejection| {
        tracing::debug!(%rejection, "movie ID path rejected");
        ValidationError::InvalidMovieId
    })?;
    let body = get_movie_details(state.api.as_ref(), &id).await?;
    Ok(([(header::CACHE_CONTROL, MOVIE_CACHE_CONTROL)], Json(body)))
}

/// `GET /health`
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Fallback for unknown routes.
pub async fn fallback_handler(uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: String::from("Not found"),
            message: format!("No route for {}", uri.path()),
        }),
    )
}
