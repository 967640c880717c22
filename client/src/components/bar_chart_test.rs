use serde_json::json;

use super::*;

#[test]
fn tallest_bar_spans_the_full_plot_height() {
    let data = vec![
        json!({ "month": "Jan", "sales": 100 }),
        json!({ "month": "Feb", "sales": 50 }),
    ];
    let bars = bar_geometry(&data, "month", "sales");
    assert_eq!(bars.len(), 2);
    assert!((bars[0].height - 200.0).abs() < 1e-9);
    assert!((bars[1].height - 100.0).abs() < 1e-9);
    assert_eq!(bars[0].label, "Jan");
    assert_eq!(bars[0].value_label, "100");
}

#[test]
fn missing_values_render_as_zero_height_bars() {
    let data = vec![
        json!({ "month": "Jan", "sales": 80 }),
        json!({ "month": "Feb" }),
    ];
    let bars = bar_geometry(&data, "month", "sales");
    assert!((bars[1].height - 0.0).abs() < 1e-9);
}

#[test]
fn all_zero_values_do_not_divide_by_zero() {
    let data = vec![json!({ "k": "a", "v": 0 }), json!({ "k": "b", "v": 0 })];
    let bars = bar_geometry(&data, "k", "v");
    assert!(bars.iter().all(|bar| bar.height.abs() < 1e-9));
}

#[test]
fn empty_data_yields_no_bars() {
    assert!(bar_geometry(&[], "x", "y").is_empty());
}

#[test]
fn numeric_category_labels_render_as_text() {
    let data = vec![json!({ "year": 2024, "count": 3 })];
    let bars = bar_geometry(&data, "year", "count");
    assert_eq!(bars[0].label, "2024");
}
