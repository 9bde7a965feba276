//! API client library for moviebff.
//!
//! Provides the upstream client for the TMDB v3 API.

/// TMDB API client.
pub mod tmdb;
