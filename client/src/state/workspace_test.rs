use snippets::{Preview, generate_component};

use super::*;

#[test]
fn default_workspace_shows_the_placeholder_on_the_preview_tab() {
    let state = WorkspaceState::default();
    assert_eq!(state.tab, PreviewTab::Preview);
    assert_eq!(state.component.preview, Preview::Placeholder);
}

#[test]
fn generated_snippets_replace_the_component_wholesale() {
    let mut state = WorkspaceState::default();
    state.component = generate_component("a form with one input");
    assert_eq!(state.component.preview, Preview::Form);

    state.component = generate_component("hello");
    assert_eq!(state.component.preview, Preview::Card);
}
