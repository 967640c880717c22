use serde_json::json;

use super::*;

#[test]
fn result_headers_cap_at_five_fields() {
    let rows = vec![json!({
        "a": 1, "b": 2, "c": 3, "d": 4, "e": 5, "f": 6, "g": 7
    })];
    assert_eq!(result_headers(&rows), ["a", "b", "c", "d", "e"]);
}

#[test]
fn result_headers_of_non_object_rows_are_empty() {
    assert!(result_headers(&[json!("bare")]).is_empty());
    assert!(result_headers(&[]).is_empty());
}

#[test]
fn card_title_prefers_name_then_title_then_fallback() {
    assert_eq!(card_title(&json!({ "name": "Ada", "title": "Dr" })), "Ada");
    assert_eq!(card_title(&json!({ "title": "Dr" })), "Dr");
    assert_eq!(card_title(&json!({ "id": 1 })), "Result Details");
}

#[test]
fn field_text_blanks_nulls_and_stringifies_structures() {
    assert_eq!(field_text(None), "");
    assert_eq!(field_text(Some(&json!(null))), "");
    assert_eq!(field_text(Some(&json!("plain"))), "plain");
    assert_eq!(field_text(Some(&json!(42))), "42");
    assert_eq!(field_text(Some(&json!({ "city": "Oslo" }))), r#"{"city":"Oslo"}"#);
}
