//! HTTP request helper for API-backed snippets.
//!
//! Browser builds (csr) perform real fetches via `gloo-net`; native builds
//! return a typed unavailable error so the components and their tests
//! compile and run without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-success statuses and transport/decode failures surface as
//! [`RequestError`] values the owning component renders inline. There is no
//! retry, timeout, or cancellation: a hung request leaves its component in
//! the loading state.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;
use thiserror::Error;

/// Error surfaced by [`fetch_json`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    /// The server answered with a non-success HTTP status.
    #[error("HTTP error! Status: {0}")]
    Status(u16),
    /// Transport or JSON decode failure.
    #[error("{0}")]
    Transport(String),
    /// Requests only work in the browser.
    #[error("requests are not available outside the browser")]
    Unavailable,
}

/// HTTP verbs the helper supports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

/// One outbound API request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApiRequest {
    pub url: String,
    /// Appended as a `q=` query parameter when present.
    pub search_term: Option<String>,
    pub method: Method,
    /// Extra request headers, applied after the JSON content type.
    pub headers: Vec<(String, String)>,
    /// JSON body, sent for non-GET verbs only.
    pub body: Option<Value>,
}

impl ApiRequest {
    /// GET request with no search term.
    #[must_use]
    pub fn get(url: &str) -> Self {
        Self {
            url: url.to_owned(),
            ..Self::default()
        }
    }

    /// GET request carrying a search term; blank terms are dropped.
    #[must_use]
    pub fn search(url: &str, term: &str) -> Self {
        let term = term.trim();
        Self {
            url: url.to_owned(),
            search_term: (!term.is_empty()).then(|| term.to_owned()),
            ..Self::default()
        }
    }

    /// Resolve the final URL, appending the encoded search term.
    #[must_use]
    pub fn request_url(&self) -> String {
        match &self.search_term {
            Some(term) => {
                let separator = if self.url.contains('?') { '&' } else { '?' };
                format!("{}{separator}q={}", self.url, urlencoding::encode(term))
            }
            None => self.url.clone(),
        }
    }
}

/// Perform the request and decode the JSON body.
///
/// # Errors
///
/// [`RequestError::Status`] for non-success responses,
/// [`RequestError::Transport`] for connection or decode failures, and
/// [`RequestError::Unavailable`] off-browser.
pub async fn fetch_json(request: &ApiRequest) -> Result<Value, RequestError> {
    #[cfg(feature = "csr")]
    {
        use gloo_net::http::{Method as HttpMethod, RequestBuilder};

        let url = request.request_url();
        let method = match request.method {
            Method::Get => HttpMethod::GET,
            Method::Post => HttpMethod::POST,
            Method::Put => HttpMethod::PUT,
            Method::Delete => HttpMethod::DELETE,
        };
        let mut builder = RequestBuilder::new(&url)
            .method(method)
            .header("Content-Type", "application/json");
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let ready = match (&request.body, request.method) {
            (Some(body), verb) if verb != Method::Get => builder
                .json(body)
                .map_err(|e| RequestError::Transport(e.to_string()))?,
            _ => builder
                .build()
                .map_err(|e| RequestError::Transport(e.to_string()))?,
        };

        let response = ready
            .send()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;
        if !response.ok() {
            return Err(RequestError::Status(response.status()));
        }
        response
            .json::<Value>()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(RequestError::Unavailable)
    }
}
