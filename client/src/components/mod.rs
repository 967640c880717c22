//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the studio chrome and snippet previews while reading
//! and writing shared state from Leptos context providers.

pub mod api_search;
pub mod api_table;
pub mod bar_chart;
pub mod canned_card;
pub mod canned_form;
pub mod chat_message;
pub mod chat_panel;
pub mod code_view;
pub mod dynamic_renderer;
pub mod preview_panel;
pub mod sample_table;
