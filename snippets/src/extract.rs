//! URL and header-list extraction from free-text prompts.
//!
//! Hand-rolled scanners: keyword search plus split/trim, no tokenizer.
//! Both functions are pure and deterministic.

#[cfg(test)]
#[path = "extract_test.rs"]
mod extract_test;

/// Endpoint used when a prompt never names one.
pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Default column set for static sample tables.
pub const DEFAULT_TABLE_HEADERS: &[&str] = &["Name", "Email", "Phone Number"];

/// Default column set for API-backed tables.
pub const DEFAULT_API_HEADERS: &[&str] = &["id", "name", "email"];

/// Extract the first `api <url>` phrase from a prompt.
///
/// The keyword `api` (any case) must be followed by whitespace and an
/// `http://` or `https://` token; the token runs to the next whitespace and
/// keeps the prompt's original casing. Prompts without such a phrase yield
/// [`DEFAULT_API_URL`].
#[must_use]
pub fn extract_api_url(prompt: &str) -> String {
    let lower = prompt.to_ascii_lowercase();
    let mut from = 0;
    while let Some(rel) = lower[from..].find("api") {
        from += rel + "api".len();
        let rest = &lower[from..];
        let trimmed = rest.trim_start();
        if trimmed.len() == rest.len() {
            // Keyword glued to the next word ("apis", "rapid", ...).
            continue;
        }
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            // Byte offsets line up because ASCII lowercasing is length-preserving.
            let url = &prompt[lower.len() - trimmed.len()..];
            let end = url.find(char::is_whitespace).unwrap_or(url.len());
            return url[..end].to_owned();
        }
    }
    DEFAULT_API_URL.to_owned()
}

/// Extract an explicit header list from a prompt.
///
/// Recognizes `header`/`headers`, optionally followed by a `names` or
/// `with names` qualifier, optionally `:` or `:-`, then captures up to the
/// first `.` or end of input. The capture splits on `,` or the literal
/// substring `and`; segments are trimmed and empties dropped.
///
/// Returns `None` when no header phrase is present or every segment is
/// empty — callers substitute their context-appropriate default list.
#[must_use]
pub fn extract_headers(prompt: &str) -> Option<Vec<String>> {
    let lower = prompt.to_ascii_lowercase();
    let idx = lower.find("header")?;

    let mut pos = idx + "header".len();
    if lower[pos..].starts_with('s') {
        pos += 1;
    }
    pos += leading_whitespace(&lower[pos..]);

    // Qualifiers ordered longest-first to avoid prefix conflicts; a qualifier
    // only counts when a token boundary follows, so "headers name, email"
    // keeps "name" as the first column.
    for qualifier in ["with names", "with name", "names", "name"] {
        if let Some(after) = lower[pos..].strip_prefix(qualifier) {
            if after.is_empty() || after.starts_with(char::is_whitespace) || after.starts_with(':') {
                pos += qualifier.len();
                break;
            }
        }
    }
    pos += leading_whitespace(&lower[pos..]);

    if lower[pos..].starts_with(":-") {
        pos += 2;
    } else if lower[pos..].starts_with(':') {
        pos += 1;
    }

    let capture = prompt[pos..].split('.').next().unwrap_or("");
    let headers = split_header_list(capture);
    if headers.is_empty() { None } else { Some(headers) }
}

/// Split a captured header phrase on `,` or the literal substring `and`.
///
/// The `and` separator is a literal, so it also splits inside words; the
/// comma form is the reliable one.
fn split_header_list(capture: &str) -> Vec<String> {
    capture
        .split(',')
        .flat_map(|part| part.split("and"))
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn leading_whitespace(text: &str) -> usize {
    text.len() - text.trim_start().len()
}
