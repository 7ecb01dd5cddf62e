//! API module
//!
//! Contains HTTP request handlers for the repertoire endpoints

pub mod songs;
