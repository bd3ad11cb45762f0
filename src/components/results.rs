//! Results section.
//!
//! Pure projection of the upload state: safety status heading,
//! process metrics panel and the equipment distribution chart.
//! Nothing here mutates state.

use leptos::*;

use crate::components::SafetyChart;
use crate::state::expect_upload_state;
use crate::types::Summary;

#[component]
pub fn ResultsSection() -> impl IntoView {
    let state = expect_upload_state();

    view! {
        <Show
            when=move || state.summary.get().is_some()
            fallback=|| view! { }
        >
            <div class="results-section">
                <h2 class=move || heading_class(&state.summary.get())>
                    "Safety Status: " {move || heading_label(&state.summary.get())}
                </h2>

                <Show
                    when=move || state.last_updated.get().is_some()
                    fallback=|| view! { }
                >
                    <p class="last-updated">
                        "Last analysis: " {move || state.last_updated.get().unwrap_or_default()}
                    </p>
                </Show>

                {move || state.summary.get().map(|summary| view! { <MetricsPanel summary/> })}

                <SafetyChart/>
            </div>
        </Show>
    }
}

fn heading_class(summary: &Option<Summary>) -> &'static str {
    summary
        .as_ref()
        .map(|s| s.status().css_class())
        .unwrap_or("status-operational")
}

fn heading_label(summary: &Option<Summary>) -> &'static str {
    summary
        .as_ref()
        .map(|s| s.status().label())
        .unwrap_or_default()
}

/// Averaged process readings, rendered only for the columns the
/// uploaded CSV actually contained.
#[component]
fn MetricsPanel(summary: Summary) -> impl IntoView {
    let mut rows: Vec<(&'static str, String)> = Vec::new();

    if let Some(records) = summary.total_records {
        rows.push(("Records analyzed", records.to_string()));
    }
    if let Some(avg) = summary.avg_pressure {
        rows.push(("Average pressure", format!("{:.2} bar", avg)));
    }
    rows.push(("Peak pressure", format!("{:.2} bar", summary.max_pressure)));
    if let Some(avg) = summary.avg_flowrate {
        rows.push(("Average flowrate", format!("{:.2}", avg)));
    }
    if let Some(avg) = summary.avg_temperature {
        rows.push(("Average temperature", format!("{:.2} °C", avg)));
    }
    if let Some(max) = summary.max_temperature {
        rows.push(("Peak temperature", format!("{:.2} °C", max)));
    }

    view! {
        <div class="metrics-panel">
            {rows
                .into_iter()
                .map(|(label, value)| view! {
                    <div class="metric-card">
                        <div class="metric-label">{label}</div>
                        <div class="metric-value">{value}</div>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
