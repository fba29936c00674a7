use dashboard_core::data::{jobs, JOBS_FOOTER};
use dashboard_core::format::{completion_cell, row_number};
use leptos::*;

/// Fixed list of project-completion rows. Row numbers come from list
/// position, not from the record's id. No sorting, filtering or
/// pagination.
#[component]
pub fn JobsTable() -> impl IntoView {
    let rows = jobs()
        .into_iter()
        .enumerate()
        .map(|(index, job)| {
            view! {
                <tr>
                    <td>{row_number(index)}</td>
                    <td>{job.project_name}</td>
                    <td>{job.assigned_to}</td>
                    <td>{completion_cell(job.completed_pct)}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="panel">
            <h2>"Jobs on Hand"</h2>
            <table>
                <thead>
                    <tr>
                        <th>"Sl. No"</th>
                        <th>"Project Name"</th>
                        <th>"Project Assigned"</th>
                        <th>"Work Completed (%)"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <div class="panel-footer">{JOBS_FOOTER}</div>
        </div>
    }
}
