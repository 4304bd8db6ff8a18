//! # Somm Common Library
//!
//! Shared code for the Somm wine-pairing services including:
//! - API request/response types (recommendation results, pairing candidates)
//! - Wine domain types (color classification)
//! - Configuration loading
//! - Common error types

pub mod api;
pub mod config;
pub mod error;

pub use error::{Error, Result};
