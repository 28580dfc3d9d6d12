//! Cineteca browser UI.
//!
//! Server-rendered pages that talk to the movie API over HTTP, the same way
//! a single-page app would: each page fetches or posts JSON through
//! [`api::MovieApi`] and renders from its own local state.

pub mod api;
pub mod config;
pub mod handlers;
pub mod html;
pub mod pages;
pub mod router;
pub mod state;
