//! HTTP routing.

use axum::Router;
use axum::routing::get;
use moviebff_api::tmdb::TmdbApi;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    config_handler, details_handler, fallback_handler, health_handler, search_handler,
};
use crate::state::AppState;

/// Builds the application router over any [`TmdbApi`] implementation.
pub fn build_router<A>(state: AppState<A>) -> Router
where
    A: TmdbApi + Sync + 'static,
{
    Router::new()
        .route("/config", get(config_handler::<A>))
        .route("/movies/search", get(search_handler::<A>))
        .route("/movies/{id}", get(details_handler::<A>))
        .route("/health", get(health_handler))
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
