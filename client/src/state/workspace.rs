//! Workspace state: the active generated snippet and preview tab.

#[cfg(test)]
#[path = "workspace_test.rs"]
mod workspace_test;

use snippets::GeneratedComponent;

/// Tabs in the preview pane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PreviewTab {
    #[default]
    Preview,
    Code,
}

/// State for the preview pane: the current snippet plus the active tab.
///
/// The snippet is replaced wholesale on every prompt; nothing is cached
/// across prompts.
#[derive(Clone, Debug)]
pub struct WorkspaceState {
    pub component: GeneratedComponent,
    pub tab: PreviewTab,
}

impl Default for WorkspaceState {
    fn default() -> Self {
        Self {
            component: GeneratedComponent::placeholder(),
            tab: PreviewTab::Preview,
        }
    }
}
