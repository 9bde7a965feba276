//! TMDB API client module.
//!
//! Handles HTTP requests to the TMDB API v3 endpoints
//! and retrieves configuration, movie search and movie details data.

mod api;
mod client;
mod error;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalTmdbApi, TmdbApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{TmdbClient, TmdbClientBuilder};
#[allow(clippy::module_name_repetitions)]
pub use error::TmdbError;
#[allow(clippy::module_name_repetitions)]
pub use types::{
    SearchMovieParams, TmdbCastMember, TmdbConfiguration, TmdbCredits, TmdbGenre,
    TmdbImagesConfiguration, TmdbMovieDetails, TmdbMovieSearchResult, TmdbSearchMovieResponse,
    TmdbVideo, TmdbVideos,
};
