//! Shared API types for Somm services

pub mod types;

pub use types::*;
