//! TMDB API response types and search parameters.
//!
//! Fields that TMDB may omit or return as `null` are `Option` or
//! `#[serde(default)]`, so a sparse upstream payload still decodes.

use serde::{Deserialize, Deserializer};

/// Decodes `null` as the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// --- Configuration ---

/// Response from `configuration` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbConfiguration {
    /// Image configuration.
    pub images: TmdbImagesConfiguration,
    /// Keys whose change invalidates cached data.
    #[serde(default, deserialize_with = "null_as_default")]
    pub change_keys: Vec<String>,
}

/// Image section of the configuration response.
#[derive(Debug, Clone, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbImagesConfiguration {
    /// Plain HTTP image base URL.
    #[serde(default)]
    pub base_url: Option<String>,
    /// HTTPS image base URL.
    pub secure_base_url: String,
    /// Available backdrop sizes.
    #[serde(default, deserialize_with = "null_as_default")]
    pub backdrop_sizes: Vec<String>,
    /// Available logo sizes.
    #[serde(default, deserialize_with = "null_as_default")]
    pub logo_sizes: Vec<String>,
    /// Available poster sizes.
    #[serde(default, deserialize_with = "null_as_default")]
    pub poster_sizes: Vec<String>,
    /// Available profile sizes.
    #[serde(default, deserialize_with = "null_as_default")]
    pub profile_sizes: Vec<String>,
    /// Available still sizes.
    #[serde(default, deserialize_with = "null_as_default")]
    pub still_sizes: Vec<String>,
}

// --- Search Movie ---

/// Response from `search/movie` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbSearchMovieResponse {
    /// Current page number.
    pub page: u32,
    /// Search results.
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<TmdbMovieSearchResult>,
    /// Total number of pages.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_pages: u32,
    /// Total number of results.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_results: u32,
}

/// A single movie search result.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieSearchResult {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Original title.
    #[serde(default)]
    pub original_title: Option<String>,
    /// Original language (ISO 639-1).
    #[serde(default)]
    pub original_language: Option<String>,
    /// Release date (YYYY-MM-DD, empty or null).
    #[serde(default)]
    pub release_date: Option<String>,
    /// Overview text.
    #[serde(default)]
    pub overview: Option<String>,
    /// Popularity score.
    #[serde(default, deserialize_with = "null_as_default")]
    pub popularity: f64,
    /// Vote average.
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_count: u32,
    /// Genre IDs.
    #[serde(default, deserialize_with = "null_as_default")]
    pub genre_ids: Vec<u32>,
    /// Adult flag.
    #[serde(default, deserialize_with = "null_as_default")]
    pub adult: bool,
    /// Video flag.
    #[serde(default, deserialize_with = "null_as_default")]
    pub video: bool,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop image path.
    #[serde(default)]
    pub backdrop_path: Option<String>,
}

// --- Movie Details ---

/// Response from `movie/{movie_id}?append_to_response=videos,credits`.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieDetails {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Original title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub original_title: String,
    /// Overview text.
    #[serde(default)]
    pub overview: Option<String>,
    /// Release date (YYYY-MM-DD, empty or null).
    #[serde(default)]
    pub release_date: Option<String>,
    /// Runtime in minutes.
    #[serde(default)]
    pub runtime: Option<u32>,
    /// Vote average.
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_count: u32,
    /// Popularity score.
    #[serde(default, deserialize_with = "null_as_default")]
    pub popularity: f64,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop image path.
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// Adult flag.
    #[serde(default, deserialize_with = "null_as_default")]
    pub adult: bool,
    /// Budget in USD.
    #[serde(default, deserialize_with = "null_as_default")]
    pub budget: u64,
    /// Revenue in USD.
    #[serde(default, deserialize_with = "null_as_default")]
    pub revenue: u64,
    /// Release status (e.g., "Released", "In Production").
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    /// Tagline.
    #[serde(default)]
    pub tagline: Option<String>,
    /// Genres.
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<TmdbGenre>,
    /// Appended videos (absent unless requested).
    #[serde(default)]
    pub videos: Option<TmdbVideos>,
    /// Appended credits (absent unless requested).
    #[serde(default)]
    pub credits: Option<TmdbCredits>,
}

/// Genre entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbGenre {
    /// Genre ID.
    pub id: u32,
    /// Genre name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// Appended `videos` block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbVideos {
    /// Videos in upstream order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<TmdbVideo>,
}

/// A single video entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbVideo {
    /// TMDB video ID.
    pub id: String,
    /// Site-specific key (YouTube video ID).
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
    /// Video name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Hosting site (e.g., "YouTube", "Vimeo").
    #[serde(default, deserialize_with = "null_as_default")]
    pub site: String,
    /// Video type (e.g., "Trailer", "Teaser", "Featurette").
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub video_type: String,
    /// Language (ISO 639-1).
    #[serde(default)]
    pub iso_639_1: Option<String>,
    /// Country (ISO 3166-1).
    #[serde(default)]
    pub iso_3166_1: Option<String>,
    /// Official flag.
    #[serde(default, deserialize_with = "null_as_default")]
    pub official: bool,
    /// Publication timestamp.
    #[serde(default)]
    pub published_at: Option<String>,
}

/// Appended `credits` block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbCredits {
    /// Cast members in upstream (billing) order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub cast: Vec<TmdbCastMember>,
}

/// A single cast member.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCastMember {
    /// TMDB person ID.
    pub id: u64,
    /// Person name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Character played.
    #[serde(default, deserialize_with = "null_as_default")]
    pub character: String,
    /// Billing order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub order: u32,
    /// Profile image path.
    #[serde(default)]
    pub profile_path: Option<String>,
    /// Credit ID.
    #[serde(default)]
    pub credit_id: Option<String>,
    /// Known-for department (e.g., "Acting").
    #[serde(default)]
    pub known_for_department: Option<String>,
}

// --- Search Parameters ---

/// Parameters for `search/movie` endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMovieParams {
    /// Search query (required).
    pub query: String,
    /// Result page (1-based, default: 1).
    pub page: u32,
}

impl SearchMovieParams {
    /// Creates new search params with the given query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: 1,
        }
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}
