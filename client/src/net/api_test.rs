use super::*;

// =============================================================
// URL building
// =============================================================

#[test]
fn plain_get_keeps_the_url_untouched() {
    let request = ApiRequest::get("https://example.com/users");
    assert_eq!(request.request_url(), "https://example.com/users");
}

#[test]
fn search_term_joins_with_a_question_mark() {
    let request = ApiRequest::search("https://example.com/users", "alice");
    assert_eq!(request.request_url(), "https://example.com/users?q=alice");
}

#[test]
fn existing_query_joins_with_an_ampersand() {
    let request = ApiRequest::search("https://example.com/users?page=2", "alice");
    assert_eq!(
        request.request_url(),
        "https://example.com/users?page=2&q=alice"
    );
}

#[test]
fn search_term_is_url_encoded() {
    let request = ApiRequest::search("https://example.com/users", "a b&c");
    assert_eq!(request.request_url(), "https://example.com/users?q=a%20b%26c");
}

#[test]
fn blank_search_terms_are_dropped() {
    let request = ApiRequest::search("https://example.com/users", "   ");
    assert_eq!(request.search_term, None);
    assert_eq!(request.request_url(), "https://example.com/users");
}

// =============================================================
// Error display
// =============================================================

#[test]
fn status_error_carries_the_code() {
    assert_eq!(
        RequestError::Status(404).to_string(),
        "HTTP error! Status: 404"
    );
}

#[test]
fn transport_error_carries_the_message() {
    assert_eq!(
        RequestError::Transport("connection reset".to_owned()).to_string(),
        "connection reset"
    );
}
