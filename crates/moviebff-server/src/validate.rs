//! Validation of untrusted request parameters.

use std::collections::HashMap;

use thiserror::Error;

/// Minimum search query length after trimming, in UTF-16 code units.
///
/// Counted the way browsers measure string length, so a single astral
/// character such as an emoji already satisfies the minimum.
const MIN_QUERY_UNITS: usize = 2;

/// Default page when `page` is omitted or empty.
const DEFAULT_PAGE: &str = "1";

/// Client input rejected before any upstream call.
///
/// The `Display` text is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum ValidationError {
    /// `q` is absent or blank.
    #[error("Query parameter 'q' is required")]
    MissingQuery,
    /// `q` is shorter than two characters.
    #[error("Query must be at least 2 characters long")]
    QueryTooShort,
    /// `page` is not a positive integer.
    #[error("Page must be a positive integer")]
    InvalidPage,
    /// The movie ID path segment is not a positive integer.
    #[error("Invalid movie ID. Must be a positive integer.")]
    InvalidMovieId,
}

/// Validated search parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Trimmed search text.
    pub query: String,
    /// 1-based page number.
    pub page: u32,
}

/// Validates the raw query parameters of a movie search.
///
/// # Errors
///
/// Returns a [`ValidationError`] if `q` is missing, blank or shorter than
/// two UTF-16 code units after trimming, or if `page` is present but not a
/// positive integer.
pub fn validate_search_query(
    params: &HashMap<String, String>,
) -> Result<SearchQuery, ValidationError> {
    let query = params.get("q").map_or("", |q| q.trim());
    if query.is_empty() {
        return Err(ValidationError::MissingQuery);
    }
    if query.encode_utf16().count() < MIN_QUERY_UNITS {
        return Err(ValidationError::QueryTooShort);
    }

    let raw_page = params
        .get("page")
        .map(String::as_str)
        .filter(|p| !p.is_empty())
        .unwrap_or(DEFAULT_PAGE);
    let page = parse_positive::<u32>(raw_page).ok_or(ValidationError::InvalidPage)?;

    Ok(SearchQuery {
        query: String::from(query),
        page,
    })
}

/// Validates the movie ID path segment.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidMovieId`] if `raw` is not a positive
/// integer.
pub fn validate_movie_id(raw: &str) -> Result<u64, ValidationError> {
    parse_positive::<u64>(raw).ok_or(ValidationError::InvalidMovieId)
}

/// Parses a strictly positive decimal integer, ignoring surrounding whitespace.
fn parse_positive<T>(raw: &str) -> Option<T>
where
    T: std::str::FromStr + Default + PartialOrd,
{
    raw.trim().parse::<T>().ok().filter(|n| *n > T::default())
}
