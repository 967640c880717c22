//! Interpreter for the tagged component schema.
//!
//! Dispatches each item on its variant with an explicit fallback arm:
//! unknown items render a visible placeholder instead of failing the whole
//! layout.

use leptos::prelude::*;
use serde_json::Value;

use snippets::schema::{Align, CardProps, ComponentItem, TableProps, TextProps, TextVariant};

use crate::components::bar_chart::BarChartView;

/// Render an ordered list of schema items.
#[component]
pub fn DynamicRenderer(items: Vec<ComponentItem>) -> impl IntoView {
    view! {
        <div class="dynamic">
            {items.into_iter().map(render_item).collect::<Vec<_>>()}
        </div>
    }
}

fn render_item(item: ComponentItem) -> AnyView {
    match item {
        ComponentItem::Text(props) => text_block(props),
        ComponentItem::Chart(props) => view! {
            <BarChartView
                title=props.title
                data=props.data
                x_key=props.x_key
                y_key=props.y_key
            />
        }
        .into_any(),
        ComponentItem::Table(props) => table_block(props),
        ComponentItem::Card(props) => card_block(props),
        ComponentItem::Unknown => view! {
            <div class="dynamic__unknown">"Unknown component type"</div>
        }
        .into_any(),
    }
}

fn text_block(props: TextProps) -> AnyView {
    let align = match props.align {
        Align::Left => "dynamic__text--left",
        Align::Center => "dynamic__text--center",
        Align::Right => "dynamic__text--right",
    };
    let content = props.content;
    match props.variant {
        TextVariant::Heading => {
            view! { <h1 class=format!("dynamic__heading {align}")>{content}</h1> }.into_any()
        }
        TextVariant::Subheading => {
            view! { <h2 class=format!("dynamic__subheading {align}")>{content}</h2> }.into_any()
        }
        TextVariant::Paragraph => {
            view! { <p class=format!("dynamic__paragraph {align}")>{content}</p> }.into_any()
        }
        // Unrecognized variants keep plain paragraph styling.
        TextVariant::Other => view! { <p class=align>{content}</p> }.into_any(),
    }
}

fn table_block(props: TableProps) -> AnyView {
    let TableProps {
        headers,
        rows,
        striped,
        hoverable,
    } = props;

    view! {
        <div class="data-table">
            <table class="data-table__table">
                <thead class="data-table__head">
                    <tr>
                        {headers
                            .iter()
                            .map(|header| view! { <th>{header.clone()}</th> })
                            .collect::<Vec<_>>()}
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .iter()
                        .enumerate()
                        .map(|(index, row)| {
                            let shaded = striped && index % 2 == 1;
                            view! {
                                <tr
                                    class="data-table__row"
                                    class:data-table__row--shaded=shaded
                                    class:data-table__row--hoverable=hoverable
                                >
                                    {row
                                        .iter()
                                        .map(|cell| view! { <td>{cell_text(cell)}</td> })
                                        .collect::<Vec<_>>()}
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
    .into_any()
}

fn card_block(props: CardProps) -> AnyView {
    let CardProps {
        title,
        subtitle,
        image,
        content,
    } = props;
    let alt = title.clone();

    view! {
        <div class="dynamic-card">
            {image.map(|src| {
                view! { <img class="dynamic-card__image" src=src alt=alt.clone()/> }
            })}
            <div class="dynamic-card__header">
                <h3 class="dynamic-card__title">{title}</h3>
                {subtitle.map(|text| view! { <p class="dynamic-card__subtitle">{text}</p> })}
            </div>
            <div class="dynamic-card__content">
                <p>{content}</p>
            </div>
        </div>
    }
    .into_any()
}

/// Positional cell text: strings render bare, everything else as JSON text.
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
