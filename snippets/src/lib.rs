//! Prompt-to-component snippet engine.
//!
//! This crate owns the logic shared by the studio UI: the prompt classifier,
//! the URL/header extraction utilities, the snippet generators, the dynamic
//! component schema, and the response-shape heuristic for fetched JSON.
//! Everything here is pure and deterministic; networking and rendering live
//! in the `client` crate.

pub mod classify;
pub mod extract;
pub mod generate;
pub mod sample;
pub mod schema;
pub mod shape;

pub use generate::{GeneratedComponent, Preview, generate_component};
