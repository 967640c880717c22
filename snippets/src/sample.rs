//! Synthesized sample rows for static table snippets.

#[cfg(test)]
#[path = "sample_test.rs"]
mod sample_test;

/// Rows synthesized per sample table.
pub const SAMPLE_ROW_COUNT: usize = 5;

/// Synthesize [`SAMPLE_ROW_COUNT`] rows of sample values for the headers.
///
/// Values are positional: row `n` holds one value per header, chosen by the
/// header's name so the table reads plausibly.
#[must_use]
pub fn synthesize_rows(headers: &[String]) -> Vec<Vec<String>> {
    (1..=SAMPLE_ROW_COUNT)
        .map(|n| headers.iter().map(|header| sample_value(header, n)).collect())
        .collect()
}

/// Sample value for one header in row `n` (1-based).
///
/// Lower-cased containment drives the pattern: "name" counts users, "email",
/// "phone" and "date" produce matching contact fields, anything else falls
/// back to a generic placeholder carrying the header name.
fn sample_value(header: &str, n: usize) -> String {
    let lower = header.to_ascii_lowercase();
    if lower.contains("name") {
        format!("User {n}")
    } else if lower.contains("email") {
        format!("user{n}@example.com")
    } else if lower.contains("phone") {
        format!("(555) 123-{}", 999 + n)
    } else if lower.contains("date") {
        format!("2025-06-{:02}", 9 + n)
    } else {
        format!("Sample {header} {n}")
    }
}
