use super::*;

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| (*n).to_owned()).collect()
}

#[test]
fn five_rows_one_value_per_header() {
    let rows = synthesize_rows(&headers(&["Name", "Email", "Score"]));
    assert_eq!(rows.len(), SAMPLE_ROW_COUNT);
    assert!(rows.iter().all(|row| row.len() == 3));
}

#[test]
fn name_headers_count_users() {
    let rows = synthesize_rows(&headers(&["Name"]));
    let names: Vec<&str> = rows.iter().map(|row| row[0].as_str()).collect();
    assert_eq!(names, ["User 1", "User 2", "User 3", "User 4", "User 5"]);
}

#[test]
fn contact_headers_use_matching_patterns() {
    let rows = synthesize_rows(&headers(&["Email", "Phone", "Date"]));
    assert_eq!(rows[0][0], "user1@example.com");
    assert_eq!(rows[0][1], "(555) 123-1000");
    assert_eq!(rows[4][1], "(555) 123-1004");
    assert!(rows[0][2].starts_with("2025-06-"));
}

#[test]
fn unknown_headers_fall_back_to_generic_placeholders() {
    let rows = synthesize_rows(&headers(&["Score"]));
    assert_eq!(rows[0][0], "Sample Score 1");
    assert_eq!(rows[4][0], "Sample Score 5");
}

#[test]
fn header_matching_is_case_insensitive_containment() {
    let rows = synthesize_rows(&headers(&["Full NAME", "Work Email"]));
    assert_eq!(rows[0][0], "User 1");
    assert_eq!(rows[0][1], "user1@example.com");
}
