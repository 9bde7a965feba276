//! `TmdbError` - classified failures of a TMDB API call.

use thiserror::Error;

/// Failure of a single TMDB API call.
///
/// Every variant maps onto the upstream error model: a human-readable
/// message (`Display`), an optional upstream status code and a rate-limit
/// flag. The client never retries; callers decide what to do.
#[derive(Debug, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum TmdbError {
    /// TMDB returned HTTP 429.
    #[error("TMDB API rate limit exceeded. Please try again later.")]
    RateLimited,

    /// TMDB returned any other non-2xx status.
    #[error("TMDB API error: {status_text} - {body}")]
    Status {
        /// HTTP status code returned by TMDB.
        status: u16,
        /// Canonical reason phrase for `status`.
        status_text: String,
        /// Response body, or a placeholder if it could not be read.
        body: String,
    },

    /// No response was received (connection failure, timeout, ...).
    #[error("Failed to fetch from TMDB: {0}")]
    Transport(#[source] reqwest::Error),

    /// A 2xx response whose body is not the expected JSON shape.
    #[error("Failed to fetch from TMDB: invalid JSON response from {path}: {source}")]
    Decode {
        /// Request path relative to the API base URL.
        path: String,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The request URL could not be built from the base URL and path.
    #[error("Failed to fetch from TMDB: invalid request path {path}: {source}")]
    Url {
        /// Request path relative to the API base URL.
        path: String,
        /// Underlying URL error.
        #[source]
        source: url::ParseError,
    },
}

impl TmdbError {
    /// Upstream HTTP status, if TMDB answered at all.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::RateLimited => Some(429),
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode { .. } | Self::Url { .. } => None,
        }
    }

    /// Whether TMDB rejected the call because of rate limiting.
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited)
    }

    /// Whether TMDB reported the requested resource as missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}
