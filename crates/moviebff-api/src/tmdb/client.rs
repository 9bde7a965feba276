//! `TmdbClient` - TMDB API client implementation.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use tracing::instrument;
use url::Url;

use super::api::TmdbApi;
use super::error::TmdbError;
use super::types::{
    SearchMovieParams, TmdbConfiguration, TmdbMovieDetails, TmdbSearchMovieResponse,
};

/// Default base URL for TMDB API v3.
const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3/";

/// Fields appended to the movie details response.
const MOVIE_DETAILS_APPEND: &str = "videos,credits";

/// Placeholder used when an error response body cannot be read.
const UNREADABLE_BODY: &str = "Unknown error";

/// TMDB API client.
///
/// Holds no mutable state; one instance is shared by all requests.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests (always ends with `/`).
    base_url: Url,
    /// Bearer API token (TMDB read access token).
    api_token: String,
}

/// Builder for `TmdbClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClientBuilder {
    base_url: Option<Url>,
    api_token: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl TmdbClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            api_token: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API bearer token (required).
    #[must_use]
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the per-call timeout (default: none).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `api_token` is not set or empty.
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<TmdbClient> {
        let api_token = self
            .api_token
            .filter(|token| !token.is_empty())
            .context("api_token is required")?;
        let user_agent = self.user_agent.context("user_agent is required")?;

        let mut base_url = if let Some(url) = self.base_url {
            url
        } else {
            let result = Url::parse(DEFAULT_BASE_URL);
            result.context("invalid default base URL")?
        };
        // `Url::join` replaces the last segment unless the path ends with '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = Client::builder().user_agent(&user_agent).gzip(true);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().context("failed to build HTTP client")?;

        Ok(TmdbClient {
            http_client,
            base_url,
            api_token,
        })
    }
}

impl TmdbClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> TmdbClientBuilder {
        TmdbClientBuilder::new()
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends a GET request with Bearer auth and query params, and decodes
    /// the JSON body.
    ///
    /// Never retries: HTTP 429 and every other failure are returned to the
    /// caller as a classified [`TmdbError`].
    #[instrument(skip_all, fields(path = path))]
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, TmdbError> {
        let url = self.base_url.join(path).map_err(|source| TmdbError::Url {
            path: String::from(path),
            source,
        })?;

        let request = self
            .http_client
            .get(url)
            .bearer_auth(&self.api_token)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .query(query)
            .build()
            .map_err(TmdbError::Transport)?;

        tracing::debug!(url = %request.url(), "TMDB API request");

        let response = match self.http_client.execute(request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(error = %err, "TMDB API request failed");
                return Err(TmdbError::Transport(err));
            }
        };

        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            tracing::warn!("TMDB API rate limited (429)");
            return Err(TmdbError::RateLimited);
        }

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from(UNREADABLE_BODY));
            tracing::warn!(status = status.as_u16(), "TMDB API error response");
            return Err(TmdbError::Status {
                status: status.as_u16(),
                status_text: String::from(status.canonical_reason().unwrap_or_default()),
                body,
            });
        }

        let body = response.text().await.map_err(TmdbError::Transport)?;
        serde_json::from_str(&body).map_err(|source| TmdbError::Decode {
            path: String::from(path),
            source,
        })
    }
}

impl TmdbApi for TmdbClient {
    #[instrument(skip_all)]
    async fn configuration(&self) -> Result<TmdbConfiguration, TmdbError> {
        self.get_json("configuration", &[]).await
    }

    #[instrument(skip_all, fields(page = params.page))]
    async fn search_movie(
        &self,
        params: &SearchMovieParams,
    ) -> Result<TmdbSearchMovieResponse, TmdbError> {
        let query: [(&str, String); 2] = [
            ("query", params.query.clone()),
            ("page", params.page.to_string()),
        ];

        self.get_json("search/movie", &query).await
    }

    #[instrument(skip_all, fields(movie_id = movie_id))]
    async fn movie_details(&self, movie_id: u64) -> Result<TmdbMovieDetails, TmdbError> {
        let path = format!("movie/{movie_id}");
        let query = [("append_to_response", String::from(MOVIE_DETAILS_APPEND))];
        self.get_json(&path, &query).await
    }
}
