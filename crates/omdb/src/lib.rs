//! Client for the OMDb movie-metadata API and its [`MovieProvider`] adapter.
//!
//! [`MovieProvider`]: cinedex_core::provider::MovieProvider

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod provider;

pub use client::OmdbClient;
pub use config::OmdbConfig;
pub use error::OmdbError;
pub use provider::OmdbProvider;
