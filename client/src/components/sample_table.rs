//! Static table preview with synthesized sample rows.

use leptos::prelude::*;

/// Plain data table: one header row plus the synthesized sample rows.
#[component]
pub fn SampleTableView(headers: Vec<String>, rows: Vec<Vec<String>>) -> impl IntoView {
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
                        .map(|row| {
                            view! {
                                <tr class="data-table__row data-table__row--hoverable">
                                    {row
                                        .iter()
                                        .map(|cell| view! { <td>{cell.clone()}</td> })
                                        .collect::<Vec<_>>()}
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
}
