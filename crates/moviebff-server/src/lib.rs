//! Backend-for-frontend for the TMDB movie API.
//!
//! Exposes three read-only JSON endpoints (`/config`, `/movies/search`,
//! `/movies/{id}`) that call TMDB with a server-held credential and reshape
//! the responses into a small, stable contract.

pub mod config;
pub mod contract;
pub mod error;
pub mod handlers;
pub mod normalize;
pub mod router;
pub mod state;
pub mod validate;
