//! Prompt classifier: ordered keyword rules selecting a generator.
//!
//! DESIGN
//! ======
//! The rules are evaluated top to bottom and the first match wins, so the
//! more specific API intents always shadow the plain table/form keywords.
//! Matching is case-insensitive substring containment — no tokenization and
//! no negation handling.

#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;

use crate::extract::{DEFAULT_API_URL, extract_api_url};

/// Generator family selected for a prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Search box over a live endpoint, result shape inferred per response.
    ApiSearch,
    /// Table fed by one fetch of a named (or default) endpoint.
    ApiTable,
    /// Fixed sample layout rendered through the dynamic schema.
    Dashboard,
    /// Static table with synthesized sample rows.
    Table,
    /// Canned contact form.
    Form,
    /// Canned product card; also the total fallback.
    Card,
}

/// Classify a prompt into exactly one generator intent.
///
/// Classification is total: every input reaches some intent, with the card
/// generator as the final fallback.
#[must_use]
pub fn classify(prompt: &str) -> Intent {
    let lower = prompt.to_ascii_lowercase();
    let has = |keyword: &str| lower.contains(keyword);

    if has("search") && (has("api") || has("json") || has("http")) {
        return Intent::ApiSearch;
    }

    // A bare "api" mention is not enough for a live table; the prompt must
    // name an endpoint of its own or call out the default host explicitly.
    if (has("api") || has("http"))
        && (extract_api_url(prompt) != DEFAULT_API_URL || has("jsonplaceholder"))
    {
        return Intent::ApiTable;
    }

    if has("components") && (has("chart") || has("table") || has("card") || has("text")) {
        return Intent::Dashboard;
    }

    if has("table") || has("grid") || has("data") || has("header") {
        return Intent::Table;
    }

    if has("form") || has("input") || has("submit") {
        return Intent::Form;
    }

    Intent::Card
}
