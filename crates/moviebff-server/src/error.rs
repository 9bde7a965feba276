//! Error classification for HTTP handlers.
//!
//! Every handler returns `Result<_, ApiError>`. The [`IntoResponse`] impl is
//! the only place where a failure becomes a status code and an
//! [`ErrorResponse`] body.

use std::fmt;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use moviebff_api::tmdb::TmdbError;
use thiserror::Error;

use crate::contract::ErrorResponse;
use crate::normalize::NormalizeError;
use crate::validate::ValidationError;

/// The request-level operation that failed.
///
/// Selects the generic message returned for unexpected failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `GET /config`.
    Configuration,
    /// `GET /movies/search`.
    SearchMovies,
    /// `GET /movies/{id}`.
    MovieDetails,
}

impl Operation {
    /// Client-facing message for an unexpected failure of this operation.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::Configuration => "Failed to fetch configuration",
            Self::SearchMovies => "Failed to search movies",
            Self::MovieDetails => "Failed to fetch movie details",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Configuration => "configuration",
            Self::SearchMovies => "search_movies",
            Self::MovieDetails => "movie_details",
        };
        f.write_str(name)
    }
}

/// A classified request failure.
#[derive(Debug, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum ApiError {
    /// Client input failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// TMDB answered 404 for a movie lookup.
    #[error("Movie with ID {0} not found.")]
    MovieNotFound(u64),

    /// Any other upstream failure.
    #[error("{operation} failed: {source}")]
    Upstream {
        /// Operation being served.
        operation: Operation,
        /// Underlying client error.
        #[source]
        source: TmdbError,
    },

    /// Upstream data could not be normalized.
    #[error("{operation} failed: {source}")]
    Normalize {
        /// Operation being served.
        operation: Operation,
        /// Underlying normalization error.
        #[source]
        source: NormalizeError,
    },
}

impl ApiError {
    /// Wraps an upstream error for `operation`.
    #[must_use]
    pub const fn upstream(operation: Operation, source: TmdbError) -> Self {
        Self::Upstream { operation, source }
    }

    /// Wraps a normalization error for `operation`.
    #[must_use]
    pub const fn normalize(operation: Operation, source: NormalizeError) -> Self {
        Self::Normalize { operation, source }
    }

    /// Status code this error maps to.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::MovieNotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream { source, .. } => match source {
                TmdbError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
                TmdbError::Status { status, .. } => {
                    StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
                }
                TmdbError::Transport(_) | TmdbError::Decode { .. } | TmdbError::Url { .. } => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Normalize { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the client-facing body, logging unexpected failures.
    fn body(&self) -> ErrorResponse {
        match self {
            Self::Validation(err) => error_body("Validation error", err.to_string()),
            Self::MovieNotFound(_) => error_body("Not found", self.to_string()),
            Self::Upstream { source, .. } if source.is_rate_limited() => {
                error_body("Rate limit exceeded", source.to_string())
            }
            Self::Upstream { source, .. } if source.status_code().is_some() => {
                tracing::warn!(error = %self, "upstream returned an error status");
                error_body("TMDB API error", source.to_string())
            }
            Self::Upstream { operation, .. } | Self::Normalize { operation, .. } => {
                tracing::error!(operation = %operation, error = ?self, "unexpected failure");
                error_body("Internal server error", operation.failure_message())
            }
        }
    }
}

fn error_body(error: &str, message: impl Into<String>) -> ErrorResponse {
    ErrorResponse {
        error: String::from(error),
        message: message.into(),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = self.body();
        (status, Json(body)).into_response()
    }
}
