//! Networking layer: the HTTP helper used by API-backed snippets.

pub mod api;
