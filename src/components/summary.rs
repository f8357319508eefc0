//! Summary of the most recent drop.

use leptos::prelude::*;

use crate::app::{AppContext, DropReport};
use crate::utils::format::{format_date_ms, format_size, path_depth};

fn render(report: DropReport) -> AnyView {
    let file_count = report.file_count();

    if let Some(error) = report.error {
        return view! { <p style="color: #ff6b6b;">{error}</p> }.into_any();
    }

    if let Some(text) = report.text {
        return view! {
            <div>
                <p>{format!("Text dropped at ({}, {})", report.position.x, report.position.y)}</p>
                <pre style="white-space: pre-wrap;">{text}</pre>
            </div>
        }
        .into_any();
    }

    let header = format!(
        "{} files, {} directories, {} at ({}, {})",
        file_count,
        report.directories,
        format_size(report.total_bytes),
        report.position.x,
        report.position.y,
    );
    let hidden = (report.hidden_files > 0).then(|| format!("... {} more", report.hidden_files));

    view! {
        <div>
            <p>{header}</p>
            <ul style="list-style: none; padding: 0;">
                {report
                    .files
                    .into_iter()
                    .map(|row| {
                        let indent = format!("padding-left: {}rem;", path_depth(&row.path));
                        view! {
                            <li style=indent>
                                <span>{row.path}</span>
                                " "
                                <span style="color: #6c7a89;">
                                    {format!("{} {} {}", format_size(row.size), row.mime, format_date_ms(row.modified))}
                                </span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            {hidden.map(|line| view! { <p>{line}</p> })}
        </div>
    }
    .into_any()
}

/// Panel listing what was dropped last.
#[component]
pub fn DropSummary() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    move || match ctx.last_drop.get() {
        Some(report) => render(report),
        None => view! { <p>"Nothing dropped yet."</p> }.into_any(),
    }
}
