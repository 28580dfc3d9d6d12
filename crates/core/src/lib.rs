//! Shared domain types and rules for the movie catalog.
//!
//! This crate has no internal dependencies so the store, the API server and
//! the web UI can all use it.

pub mod catalog;
pub mod error;
pub mod types;
