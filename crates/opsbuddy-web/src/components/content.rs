//! Message Content Views
//!
//! One view per classification produced by `opsbuddy_core::classify`.

use leptos::prelude::*;
use opsbuddy_core::{
    FormattedContent, HealthReport, IncidentDigest, IncidentTable, TextLines, Tone,
};

use crate::theme;

/// Render whichever layout the content was classified into
#[component]
pub fn FormattedContentView(content: FormattedContent) -> impl IntoView {
    match content {
        FormattedContent::Health(report) => view! { <HealthReportView report=report /> }.into_any(),
        FormattedContent::Incidents(table) => view! { <IncidentTableView table=table /> }.into_any(),
        FormattedContent::Digest(digest) => view! { <IncidentDigestView digest=digest /> }.into_any(),
        FormattedContent::Text(text) => view! { <TextLinesView text=text /> }.into_any(),
    }
}

/// Status pill
#[component]
pub fn Badge(text: String, tone: Option<Tone>) -> impl IntoView {
    view! { <span class=theme::badge_class(tone)>{text}</span> }
}

#[component]
pub fn HealthReportView(report: HealthReport) -> impl IntoView {
    let tone = report.health_tone();
    let rows = report.dependency_rows();
    let href = report.dashboard.clone();

    let dependencies = report.has_dependencies().then(|| {
        let body = rows
            .into_iter()
            .map(|row| {
                view! {
                    <tr class="hover:bg-gray-50 dark:hover:bg-gray-900">
                        <td class="text-sm p-2">{row.direction.label()}</td>
                        <td class="text-sm p-2">{row.ci}</td>
                        <td class="text-sm p-2">{row.relationship}</td>
                    </tr>
                }
            })
            .collect::<Vec<_>>();

        view! {
            <div class="mt-4">
                <span class="text-sm font-medium text-gray-700 dark:text-gray-300 block mb-2">
                    "Dependencies:"
                </span>
                <div class="border rounded-md overflow-hidden">
                    <table class=theme::TABLE>
                        <thead>
                            <tr class=theme::TABLE_ROW>
                                <th class="bg-gray-50 dark:bg-gray-900 text-gray-700 dark:text-gray-300 h-10 px-2 text-left">"Type"</th>
                                <th class="bg-gray-50 dark:bg-gray-900 text-gray-700 dark:text-gray-300 h-10 px-2 text-left">"CI"</th>
                                <th class="bg-gray-50 dark:bg-gray-900 text-gray-700 dark:text-gray-300 h-10 px-2 text-left">"Relationship"</th>
                            </tr>
                        </thead>
                        <tbody>{body}</tbody>
                    </table>
                </div>
            </div>
        }
    });

    view! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow-md p-4 border border-gray-200 dark:border-gray-700">
            <h3 class="text-lg font-semibold text-gray-900 dark:text-gray-100 mb-3">
                {format!("{}: ", report.prefix)}
                <span class="text-blue-600 dark:text-blue-400">{report.ci}</span>
            </h3>
            <div class="space-y-3">
                <div class="flex items-center gap-2">
                    <span class="text-sm font-medium text-gray-700 dark:text-gray-300">"Health Status:"</span>
                    <Badge text=report.health_status tone=tone />
                </div>

                <div>
                    <span class="text-sm font-medium text-gray-700 dark:text-gray-300 block mb-1">"Details:"</span>
                    <p class="text-sm text-gray-600 dark:text-gray-400 bg-gray-50 dark:bg-gray-900 p-2 rounded-md">
                        {report.details}
                    </p>
                </div>

                <div>
                    <span class="text-sm font-medium text-gray-700 dark:text-gray-300">"Dashboard:"</span>
                    <a
                        href=href
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-sm text-blue-600 hover:underline dark:text-blue-400 ml-2"
                    >
                        {report.dashboard}
                    </a>
                </div>

                <div>
                    <span class="text-sm font-medium text-gray-700 dark:text-gray-300 block mb-1">"Recent Updates:"</span>
                    <p class="text-sm text-gray-600 dark:text-gray-400 italic">{report.recent_updates}</p>
                </div>

                {dependencies}
            </div>
        </div>
    }
}

#[component]
pub fn IncidentTableView(table: IncidentTable) -> impl IntoView {
    let rows = table
        .incidents
        .iter()
        .map(|incident| {
            let status_tone = incident.status_tone();
            let health_tone = incident.ci_health_tone();
            view! {
                <tr class=theme::TABLE_ROW>
                    <td class=format!("{} font-medium", theme::TABLE_CELL)>{incident.incident_id.clone()}</td>
                    <td class=theme::TABLE_CELL>{incident.ci.clone()}</td>
                    <td class=theme::TABLE_CELL>
                        <Badge text=incident.status.clone() tone=status_tone />
                    </td>
                    <td class=theme::TABLE_CELL>
                        <Badge text=incident.ci_health.clone().unwrap_or_default() tone=health_tone />
                    </td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    let details = table
        .incidents
        .iter()
        .map(|incident| {
            view! {
                <div class="mb-3">
                    <h4 class="font-medium">{incident.detail_heading()}</h4>
                    <p class="text-gray-600">{incident.details.clone().unwrap_or_default()}</p>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div>
            <p class="mb-2">{table.message}</p>
            <div class="border rounded overflow-hidden">
                <table class=theme::TABLE>
                    <thead>
                        <tr class=theme::TABLE_ROW>
                            <th class=format!("{} w-[120px]", theme::TABLE_HEAD)>"Incident ID"</th>
                            <th class=theme::TABLE_HEAD>"CI Name"</th>
                            <th class=format!("{} w-[100px]", theme::TABLE_HEAD)>"Status"</th>
                            <th class=format!("{} w-[100px]", theme::TABLE_HEAD)>"CI Health"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
            <div class="mt-3">
                <details class="text-sm">
                    <summary class="cursor-pointer font-medium text-gray-700">"Show Details"</summary>
                    <div class="mt-2 pl-3 border-l-2 border-gray-200">{details}</div>
                </details>
            </div>
        </div>
    }
}

/// Plain-text incident list: no CI Health column, no details section
#[component]
pub fn IncidentDigestView(digest: IncidentDigest) -> impl IntoView {
    let rows = digest
        .incidents
        .into_iter()
        .map(|incident| {
            let tone = incident.status_tone();
            view! {
                <tr class=theme::TABLE_ROW>
                    <td class=format!("{} font-medium", theme::TABLE_CELL)>{incident.id}</td>
                    <td class=theme::TABLE_CELL>{incident.description}</td>
                    <td class=theme::TABLE_CELL>
                        <Badge text=incident.status tone=tone />
                    </td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div>
            <p class="mb-2">{digest.title}</p>
            <div class="border rounded overflow-hidden">
                <table class=theme::TABLE>
                    <thead>
                        <tr class=theme::TABLE_ROW>
                            <th class=format!("{} w-[120px]", theme::TABLE_HEAD)>"Incident ID"</th>
                            <th class=theme::TABLE_HEAD>"Description"</th>
                            <th class=format!("{} w-[120px]", theme::TABLE_HEAD)>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        </div>
    }
}

/// Verbatim text with a line break between lines, none after the last
#[component]
pub fn TextLinesView(text: TextLines) -> impl IntoView {
    let lines = text
        .iter_with_breaks()
        .map(|(line, line_break)| {
            let line = line.to_string();
            view! { <div>{line}{line_break.then(|| view! { <br /> })}</div> }
        })
        .collect::<Vec<_>>();

    view! { <div>{lines}</div> }
}
