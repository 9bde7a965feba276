//! `TmdbApi` trait definition.
#![allow(clippy::future_not_send)]

use super::error::TmdbError;
use super::types::{
    SearchMovieParams, TmdbConfiguration, TmdbMovieDetails, TmdbSearchMovieResponse,
};

/// TMDB API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(TmdbApi: Send)]
pub trait LocalTmdbApi {
    /// Fetches the API configuration (image base URL and sizes).
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`] if the HTTP request or JSON parsing fails.
    async fn configuration(&self) -> Result<TmdbConfiguration, TmdbError>;

    /// Searches for movies.
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`] if the HTTP request or JSON parsing fails.
    async fn search_movie(
        &self,
        params: &SearchMovieParams,
    ) -> Result<TmdbSearchMovieResponse, TmdbError>;

    /// Fetches movie details with `videos` and `credits` appended.
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`] if the HTTP request or JSON parsing fails.
    async fn movie_details(&self, movie_id: u64) -> Result<TmdbMovieDetails, TmdbError>;
}
