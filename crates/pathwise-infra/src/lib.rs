//! Infrastructure implementations for Pathwise.
//!
//! - [`http::HttpBackend`]: the `Backend` port over reqwest
//! - [`config`]: data directory resolution and `config.toml` loading

pub mod config;
pub mod http;
