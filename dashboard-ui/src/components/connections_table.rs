use dashboard_core::data::connections;
use dashboard_core::format::row_number;
use leptos::*;

/// Fixed list of contact rows, rendered in input order.
#[component]
pub fn ConnectionsTable() -> impl IntoView {
    let rows = connections()
        .into_iter()
        .enumerate()
        .map(|(index, connection)| {
            view! {
                <tr>
                    <td>{row_number(index)}</td>
                    <td>{connection.title}</td>
                    <td>{connection.sector}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="panel">
            <h2>"Recent Connections"</h2>
            <table>
                <thead>
                    <tr>
                        <th>"Sl. No"</th>
                        <th>"Title"</th>
                        <th>"Skilled Sector Technology"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}
