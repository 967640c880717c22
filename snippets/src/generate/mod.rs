//! Snippet generators: one per intent, each returning a preview description
//! plus an equivalent self-contained Leptos source string.
//!
//! ARCHITECTURE
//! ============
//! [`generate_component`] dispatches through the classifier; every generator
//! is a pure function of the prompt (several ignore it). The preview side is
//! a data description the UI interprets, the code side is display text — the
//! two are built from the same extracted inputs so they always agree.

#[cfg(test)]
#[path = "generate_test.rs"]
mod generate_test;

pub mod api_search;
pub mod api_table;
pub mod card;
pub mod dashboard;
pub mod form;
pub mod table;

use crate::classify::{Intent, classify};
use crate::schema::ComponentItem;

/// A generated snippet: what to render plus the code string shown beside it.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedComponent {
    pub preview: Preview,
    pub code: String,
}

impl GeneratedComponent {
    /// Initial workspace contents before any prompt has been sent.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            preview: Preview::Placeholder,
            code: "// Your component code will appear here\n\
                   // Try a prompt like \"Create a table with headers name, email\""
                .to_owned(),
        }
    }
}

/// Renderable description of a generated snippet.
///
/// Variants mirror the generator families; `Placeholder` is the empty
/// workspace before the first prompt.
#[derive(Clone, Debug, PartialEq)]
pub enum Preview {
    Placeholder,
    /// Static table: extracted headers plus synthesized sample rows.
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// Canned contact form.
    Form,
    /// Canned product card.
    Card,
    /// Fixed sample layout interpreted by the dynamic renderer.
    Dashboard(Vec<ComponentItem>),
    /// Live table: one fetch of `url`, rendered under `headers`.
    ApiTable {
        url: String,
        headers: Vec<String>,
    },
    /// Search box over `url` with shape-classified results.
    ApiSearch {
        url: String,
    },
}

/// Generate the snippet for a prompt.
///
/// Classification is total, so every prompt produces some snippet; there is
/// no error path out of this function.
#[must_use]
pub fn generate_component(prompt: &str) -> GeneratedComponent {
    match classify(prompt) {
        Intent::ApiSearch => api_search::generate(prompt),
        Intent::ApiTable => api_table::generate(prompt),
        Intent::Dashboard => dashboard::generate(prompt),
        Intent::Table => table::generate(prompt),
        Intent::Form => form::generate(),
        Intent::Card => card::generate(),
    }
}
