//! Page state and rendering.
//!
//! Each page owns its local state, loads it through the API client and
//! renders HTML from it.

pub mod catalog;
pub mod detail;
pub mod form;
