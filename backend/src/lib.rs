//! Product Scout Backend Library
//!
//! This library exposes modules for testing and for the desktop front-end.
//! The HTTP server binary is in `src/main.rs`.

pub mod api;
pub mod config;
pub mod error;
pub mod research;
/// Shared router state
pub mod state;
