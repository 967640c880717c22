//! Minimal SVG bar chart.
//!
//! Every chart draws as bars regardless of any declared chart kind — the
//! schema carries the declared kind through untouched and the renderer does
//! not consult it.

#[cfg(test)]
#[path = "bar_chart_test.rs"]
mod bar_chart_test;

use leptos::prelude::*;
use serde_json::Value;

const VIEW_WIDTH: f64 = 640.0;
const VIEW_HEIGHT: f64 = 280.0;
const BASELINE_Y: f64 = 240.0;
const MAX_BAR_HEIGHT: f64 = 200.0;

/// Bar chart over `data`, reading categories from `x_key` and values from
/// `y_key`. Rows without a numeric value render as zero-height bars.
#[component]
pub fn BarChartView(
    #[prop(optional)] title: String,
    data: Vec<Value>,
    x_key: String,
    y_key: String,
) -> impl IntoView {
    let bars = bar_geometry(&data, &x_key, &y_key);

    view! {
        <div class="chart">
            {(!title.is_empty())
                .then(|| view! { <h2 class="chart__title">{title.clone()}</h2> })}
            <svg class="chart__svg" viewBox=format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}")>
                <line
                    class="chart__axis"
                    x1="0"
                    y1=BASELINE_Y.to_string()
                    x2=VIEW_WIDTH.to_string()
                    y2=BASELINE_Y.to_string()
                />
                {bars
                    .into_iter()
                    .map(|bar| {
                        view! {
                            <g>
                                <rect
                                    class="chart__bar"
                                    x=fmt(bar.x)
                                    y=fmt(bar.y)
                                    width=fmt(bar.width)
                                    height=fmt(bar.height)
                                />
                                <text class="chart__value" x=fmt(bar.center_x) y=fmt(bar.y - 6.0)>
                                    {bar.value_label}
                                </text>
                                <text
                                    class="chart__label"
                                    x=fmt(bar.center_x)
                                    y=fmt(BASELINE_Y + 18.0)
                                >
                                    {bar.label}
                                </text>
                            </g>
                        }
                    })
                    .collect::<Vec<_>>()}
            </svg>
        </div>
    }
}

fn fmt(value: f64) -> String {
    format!("{value:.1}")
}

/// Geometry for one bar.
#[derive(Clone, Debug, PartialEq)]
struct Bar {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    center_x: f64,
    label: String,
    value_label: String,
}

/// Lay the bars out across the plot width, scaled to the tallest value.
fn bar_geometry(data: &[Value], x_key: &str, y_key: &str) -> Vec<Bar> {
    if data.is_empty() {
        return Vec::new();
    }

    let values: Vec<f64> = data
        .iter()
        .map(|row| row.get(y_key).and_then(Value::as_f64).unwrap_or(0.0))
        .collect();
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let scale = if max > 0.0 { MAX_BAR_HEIGHT / max } else { 0.0 };

    let slot = VIEW_WIDTH / data.len() as f64;
    data.iter()
        .zip(values)
        .enumerate()
        .map(|(index, (row, value))| {
            let height = value * scale;
            let x = index as f64 * slot + slot * 0.2;
            Bar {
                x,
                y: BASELINE_Y - height,
                width: slot * 0.6,
                height,
                center_x: x + slot * 0.3,
                label: label_text(row.get(x_key)),
                value_label: value_text(value),
            }
        })
        .collect()
}

fn label_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

fn value_text(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
