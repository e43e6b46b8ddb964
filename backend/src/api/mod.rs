//! API module
//!
//! Contains HTTP request handlers for the research endpoints

pub mod research;
