//! Application configuration module.
//!
//! Reads the TOML config file (listen address, upstream settings) and the
//! TMDB credential from the environment.

#[allow(clippy::module_inception)]
mod config;
mod paths;

#[allow(clippy::module_name_repetitions)]
pub use config::{AppConfig, ServerConfig, TOKEN_ENV, TmdbConfig, api_token_from, read_api_token};
pub use paths::resolve_config_path;
