//! Client-facing JSON contract.
//!
//! These shapes are the stable surface the web client consumes. They are
//! built fresh for every request by the normalizers and never deserialized.

use serde::Serialize;

/// Response body of `GET /config`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigResponse {
    /// Image URL configuration.
    pub images: ImageConfiguration,
}

/// Image URL configuration derived from the TMDB configuration endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageConfiguration {
    /// Absolute HTTPS image base URL, always ending in `/`.
    pub base_url: String,
    /// Poster sizes in upstream order.
    pub poster_sizes: Vec<String>,
    /// Backdrop sizes in upstream order.
    pub backdrop_sizes: Vec<String>,
    /// Profile sizes in upstream order.
    pub profile_sizes: Vec<String>,
}

/// Response body of `GET /movies/search`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchMoviesResponse {
    /// Current page number.
    pub page: u32,
    /// Total number of pages.
    pub total_pages: u32,
    /// Total number of results.
    pub total_results: u32,
    /// Results of this page.
    pub results: Vec<SearchResult>,
}

/// A single normalized search hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    pub title: String,
    /// Release date (YYYY-MM-DD) or empty.
    pub release_date: String,
    /// Overview text or empty.
    pub overview: String,
    /// Absolute poster URL or empty.
    pub poster_url: String,
    /// Vote average.
    pub vote_average: f64,
}

/// Response body of `GET /movies/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieDetails {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    pub title: String,
    /// Original title.
    pub original_title: String,
    /// Release date (YYYY-MM-DD) or empty.
    pub release_date: String,
    /// Overview text or empty.
    pub overview: String,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    /// Vote average.
    pub vote_average: f64,
    /// Vote count.
    pub vote_count: u32,
    /// Absolute poster URL or empty.
    pub poster_url: String,
    /// Absolute backdrop URL or empty.
    pub backdrop_url: String,
    /// Genres in upstream order.
    pub genres: Vec<Genre>,
    /// Top-billed cast (at most five).
    pub cast: Vec<CastMember>,
    /// YouTube trailers in upstream order.
    pub trailers: Vec<Trailer>,
    /// Tagline.
    pub tagline: Option<String>,
    /// Release status.
    pub status: String,
}

/// Genre entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Genre {
    /// Genre ID.
    pub id: u32,
    /// Genre name.
    pub name: String,
}

/// Cast member entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CastMember {
    /// TMDB person ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Character played.
    pub character: String,
    /// Absolute profile image URL or empty.
    pub profile_url: String,
    /// Billing order.
    pub order: u32,
}

/// Trailer entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trailer {
    /// TMDB video ID.
    pub id: String,
    /// YouTube video key.
    pub key: String,
    /// Video name.
    pub name: String,
    /// Hosting site (always "YouTube").
    pub site: String,
    /// Video type (always "Trailer").
    #[serde(rename = "type")]
    pub video_type: String,
}

/// Error body shared by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    /// Short error category.
    pub error: String,
    /// Human-readable detail.
    pub message: String,
}

/// Response body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    /// Always "ok".
    pub status: &'static str,
}
