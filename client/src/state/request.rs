//! Per-request lifecycle state for API-backed components.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

/// Lifecycle of one component instance's request.
///
/// Each API-backed component owns exactly one of these; there is no shared
/// request state across instances and no ad-hoc boolean flag pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RequestPhase {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// One request is in flight; controls that would start another are
    /// disabled while here.
    Loading,
    /// The response arrived and was decoded.
    Success,
    /// The request failed; carries the user-visible message.
    Error(String),
}

impl RequestPhase {
    /// True while a request is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
