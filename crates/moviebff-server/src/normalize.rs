//! Normalization of TMDB responses into the client contract.
//!
//! Every function here is pure: it borrows an upstream shape plus the image
//! base URL and builds a fresh contract value. Fields the contract does not
//! name (popularity, adult, genre IDs, crew, production companies, ...) are
//! dropped.

use moviebff_api::tmdb::{
    TmdbCastMember, TmdbConfiguration, TmdbCredits, TmdbMovieDetails, TmdbMovieSearchResult,
    TmdbSearchMovieResponse, TmdbVideo, TmdbVideos,
};
use thiserror::Error;
use url::Url;

use crate::contract::{
    CastMember, Genre, ImageConfiguration, MovieDetails, SearchMoviesResponse, SearchResult,
    Trailer,
};

/// Poster size used in search results and details.
pub const POSTER_SIZE: &str = "w500";

/// Backdrop size used in details.
pub const BACKDROP_SIZE: &str = "w1280";

/// Profile image size used for cast members.
pub const PROFILE_SIZE: &str = "w185";

/// Number of cast members kept in details.
pub const CAST_LIMIT: usize = 5;

/// Upstream data that cannot be turned into the contract.
#[derive(Debug, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum NormalizeError {
    /// `secure_base_url` is not an absolute URL.
    #[error("invalid image base URL {url:?}: {source}")]
    InvalidImageBaseUrl {
        /// Value reported by TMDB.
        url: String,
        /// Underlying parse error.
        #[source]
        source: url::ParseError,
    },
}

/// Builds an absolute image URL, or `""` when the image is absent.
#[must_use]
pub fn build_image_url(path: Option<&str>, base_url: &str, size: &str) -> String {
    match path {
        Some(path) if !path.is_empty() => format!("{base_url}{size}{path}"),
        _ => String::new(),
    }
}

/// Extracts the image configuration from the TMDB configuration response.
///
/// Keeps the HTTPS base URL and the poster, backdrop and profile sizes. A
/// missing trailing `/` on the base URL is appended.
///
/// # Errors
///
/// Returns [`NormalizeError::InvalidImageBaseUrl`] if `secure_base_url` is
/// not an absolute URL.
pub fn normalize_configuration(
    raw: &TmdbConfiguration,
) -> Result<ImageConfiguration, NormalizeError> {
    let secure = raw.images.secure_base_url.trim();
    Url::parse(secure).map_err(|source| NormalizeError::InvalidImageBaseUrl {
        url: String::from(secure),
        source,
    })?;

    let base_url = if secure.ends_with('/') {
        String::from(secure)
    } else {
        format!("{secure}/")
    };

    Ok(ImageConfiguration {
        base_url,
        poster_sizes: raw.images.poster_sizes.clone(),
        backdrop_sizes: raw.images.backdrop_sizes.clone(),
        profile_sizes: raw.images.profile_sizes.clone(),
    })
}

/// Maps a search response onto the contract.
#[must_use]
pub fn normalize_search_results(
    raw: &TmdbSearchMovieResponse,
    image_base_url: &str,
) -> SearchMoviesResponse {
    SearchMoviesResponse {
        page: raw.page,
        total_pages: raw.total_pages,
        total_results: raw.total_results,
        results: raw
            .results
            .iter()
            .map(|movie| normalize_search_result(movie, image_base_url))
            .collect(),
    }
}

fn normalize_search_result(movie: &TmdbMovieSearchResult, image_base_url: &str) -> SearchResult {
    SearchResult {
        id: movie.id,
        title: movie.title.clone(),
        release_date: movie.release_date.clone().unwrap_or_default(),
        overview: movie.overview.clone().unwrap_or_default(),
        poster_url: build_image_url(movie.poster_path.as_deref(), image_base_url, POSTER_SIZE),
        vote_average: movie.vote_average,
    }
}

/// Maps a movie details response (with appended videos and credits) onto
/// the contract.
#[must_use]
pub fn normalize_movie_details(raw: &TmdbMovieDetails, image_base_url: &str) -> MovieDetails {
    MovieDetails {
        id: raw.id,
        title: raw.title.clone(),
        original_title: raw.original_title.clone(),
        release_date: raw.release_date.clone().unwrap_or_default(),
        overview: raw.overview.clone().unwrap_or_default(),
        runtime: raw.runtime,
        vote_average: raw.vote_average,
        vote_count: raw.vote_count,
        poster_url: build_image_url(raw.poster_path.as_deref(), image_base_url, POSTER_SIZE),
        backdrop_url: build_image_url(raw.backdrop_path.as_deref(), image_base_url, BACKDROP_SIZE),
        genres: raw
            .genres
            .iter()
            .map(|genre| Genre {
                id: genre.id,
                name: genre.name.clone(),
            })
            .collect(),
        cast: format_cast(raw.credits.as_ref(), image_base_url),
        trailers: format_trailers(raw.videos.as_ref()),
        tagline: raw.tagline.clone(),
        status: raw.status.clone(),
    }
}

/// Takes the first [`CAST_LIMIT`] cast members in upstream order.
///
/// TMDB returns cast already ordered by billing, so no re-sort by `order`.
fn format_cast(credits: Option<&TmdbCredits>, image_base_url: &str) -> Vec<CastMember> {
    credits.map_or_else(Vec::new, |credits| {
        credits
            .cast
            .iter()
            .take(CAST_LIMIT)
            .map(|member| format_cast_member(member, image_base_url))
            .collect()
    })
}

fn format_cast_member(member: &TmdbCastMember, image_base_url: &str) -> CastMember {
    CastMember {
        id: member.id,
        name: member.name.clone(),
        character: member.character.clone(),
        profile_url: build_image_url(member.profile_path.as_deref(), image_base_url, PROFILE_SIZE),
        order: member.order,
    }
}

/// Keeps YouTube trailers only, in upstream order.
fn format_trailers(videos: Option<&TmdbVideos>) -> Vec<Trailer> {
    videos.map_or_else(Vec::new, |videos| {
        videos
            .results
            .iter()
            .filter(|video| is_youtube_trailer(video))
            .map(|video| Trailer {
                id: video.id.clone(),
                key: video.key.clone(),
                name: video.name.clone(),
                site: video.site.clone(),
                video_type: video.video_type.clone(),
            })
            .collect()
    })
}

fn is_youtube_trailer(video: &TmdbVideo) -> bool {
    video.site == "YouTube" && video.video_type == "Trailer"
}
