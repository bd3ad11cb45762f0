//! CSV upload component.
//!
//! Handles file selection, upload to the analysis backend, and
//! settlement of the upload state.

use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::config::{BACKEND_URL, UPLOAD_FAILED_MESSAGE};
use crate::services::upload_csv;
use crate::state::expect_upload_state;

#[component]
pub fn UploadSection() -> impl IntoView {
    let state = expect_upload_state();

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);

        let file = match input.files().and_then(|files| files.get(0)) {
            Some(file) => file,
            // Selection cancelled: no request, state untouched.
            None => return,
        };

        // A prior upload is still in flight: ignore the new selection
        // rather than racing two requests against one state instance.
        if state.loading.get_untracked() {
            log::warn!("upload already in flight, ignoring new selection");
            return;
        }

        state.begin_upload();

        spawn_local(async move {
            log::info!("uploading CSV file: {}", file.name());

            match upload_csv(file, BACKEND_URL).await {
                Ok(summary) => {
                    log::info!(
                        "analysis complete: {} equipment types, peak pressure {} bar",
                        summary.type_dist.len(),
                        summary.max_pressure
                    );
                    state.finish_success(summary, local_time());
                }
                Err(e) => {
                    log::error!("upload failed: {}", e);
                    state.finish_failure(UPLOAD_FAILED_MESSAGE.to_string());
                }
            }
        });
    };

    view! {
        <div class="upload-section">
            <label for="fileInput" class="upload-label">
                "Equipment readings (.csv)"
            </label>
            <input
                type="file"
                id="fileInput"
                accept=".csv"
                prop:disabled=move || state.loading.get()
                on:change=on_file_change
            />

            <Show
                when=move || state.loading.get()
                fallback=|| view! { }
            >
                <p class="loading-indicator">"Analyzing Safety Data..."</p>
            </Show>
        </div>
    }
}

/// Current wall-clock time as HH:MM:SS, from the browser clock.
fn local_time() -> String {
    js_sys::Date::new_0()
        .to_locale_time_string("en-GB")
        .as_string()
        .unwrap_or_else(|| "00:00:00".to_string())
}
