//! Shared application state.

use std::sync::Arc;

/// State handed to every handler.
///
/// Holds the upstream client behind an `Arc`; the client is immutable, so no
/// locking is involved.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct AppState<A> {
    /// Upstream TMDB client.
    pub api: Arc<A>,
}

impl<A> AppState<A> {
    /// Wraps an upstream client.
    pub fn new(api: A) -> Self {
        Self { api: Arc::new(api) }
    }
}

// Manual impl: `A` itself need not be `Clone`.
impl<A> Clone for AppState<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}
