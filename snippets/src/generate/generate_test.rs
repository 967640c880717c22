use crate::extract::DEFAULT_API_URL;
use crate::schema::ComponentItem;

use super::*;

// =============================================================================
// Dispatcher end-to-end
// =============================================================================

#[test]
fn table_prompt_produces_two_columns_and_five_user_rows() {
    let generated = generate_component("Create a table with headers name, email");
    let Preview::Table { headers, rows } = &generated.preview else {
        panic!("expected Table preview");
    };
    assert_eq!(headers.as_slice(), ["name", "email"]);
    assert_eq!(rows.len(), 5);
    let names: Vec<&str> = rows.iter().map(|row| row[0].as_str()).collect();
    assert_eq!(names, ["User 1", "User 2", "User 3", "User 4", "User 5"]);
}

#[test]
fn table_prompt_without_headers_uses_defaults() {
    let generated = generate_component("show me a data grid");
    let Preview::Table { headers, .. } = &generated.preview else {
        panic!("expected Table preview");
    };
    assert_eq!(headers.as_slice(), ["Name", "Email", "Phone Number"]);
}

#[test]
fn form_prompt_produces_the_canned_form() {
    let generated = generate_component("a form with one input");
    assert_eq!(generated.preview, Preview::Form);
    assert!(generated.code.contains("ContactForm"));
}

#[test]
fn unrecognized_prompt_produces_the_canned_card() {
    let generated = generate_component("hello");
    assert_eq!(generated.preview, Preview::Card);
    assert!(generated.code.contains("ProductCard"));
}

// =============================================================================
// Code strings
// =============================================================================

#[test]
fn table_code_inlines_headers_and_sample_rows() {
    let generated = generate_component("Create a table with headers name, email");
    assert!(generated.code.contains("<th>\"name\"</th>"));
    assert!(generated.code.contains("<th>\"email\"</th>"));
    assert!(generated.code.contains("User 1"));
    assert!(generated.code.contains("user5@example.com"));
}

#[test]
fn api_table_code_hardcodes_url_and_headers() {
    let generated =
        generate_component("fetch the api https://api.example.com/people with headers: id, name");
    let Preview::ApiTable { url, headers } = &generated.preview else {
        panic!("expected ApiTable preview");
    };
    assert_eq!(url, "https://api.example.com/people");
    assert_eq!(headers.as_slice(), ["id", "name"]);
    assert!(generated.code.contains("https://api.example.com/people"));
    assert!(generated.code.contains("<th>\"id\"</th>"));
    assert!(generated.code.contains("cell(row, \"name\")"));
}

#[test]
fn api_table_prompt_without_headers_uses_api_defaults() {
    let generated = generate_component("an api https://api.example.com/people view");
    let Preview::ApiTable { headers, .. } = &generated.preview else {
        panic!("expected ApiTable preview");
    };
    assert_eq!(headers.as_slice(), ["id", "name", "email"]);
}

#[test]
fn api_search_code_hardcodes_the_resolved_url() {
    let generated = generate_component("search the api https://api.example.com/people");
    let Preview::ApiSearch { url } = &generated.preview else {
        panic!("expected ApiSearch preview");
    };
    assert_eq!(url, "https://api.example.com/people");
    assert!(generated.code.contains(r#""https://api.example.com/people".to_owned()"#));
    // The hardcoded URL has no query string, so the search join uses `?`.
    assert!(generated.code.contains("?q="));
}

#[test]
fn api_search_without_url_falls_back_to_the_default_endpoint() {
    let generated = generate_component("search the api for users");
    let Preview::ApiSearch { url } = &generated.preview else {
        panic!("expected ApiSearch preview");
    };
    assert_eq!(url, DEFAULT_API_URL);
}

// =============================================================================
// Dashboard
// =============================================================================

#[test]
fn dashboard_prompt_produces_the_sample_layout() {
    let generated = generate_component("components with a chart and a table");
    let Preview::Dashboard(items) = &generated.preview else {
        panic!("expected Dashboard preview");
    };
    assert_eq!(items.len(), 4);
    assert!(matches!(items[0], ComponentItem::Text(_)));
    assert!(matches!(items[1], ComponentItem::Chart(_)));
    assert!(matches!(items[2], ComponentItem::Table(_)));
    assert!(matches!(items[3], ComponentItem::Card(_)));
    assert!(generated.code.contains("DynamicRenderer"));
}

#[test]
fn dashboard_chart_reads_month_and_sales_fields() {
    let generated = generate_component("components with a chart");
    let Preview::Dashboard(items) = &generated.preview else {
        panic!("expected Dashboard preview");
    };
    let ComponentItem::Chart(chart) = &items[1] else {
        panic!("expected Chart item");
    };
    assert_eq!(chart.x_key, "month");
    assert_eq!(chart.y_key, "sales");
    assert_eq!(chart.data.len(), 3);
}

// =============================================================================
// Placeholder
// =============================================================================

#[test]
fn placeholder_has_hint_code_and_no_preview() {
    let placeholder = GeneratedComponent::placeholder();
    assert_eq!(placeholder.preview, Preview::Placeholder);
    assert!(placeholder.code.contains("appear here"));
}
