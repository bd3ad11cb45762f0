//! Hero section component

use leptos::*;

use crate::config::APP_NAME;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{APP_NAME}</h1>
            <p class="subtitle">
                "Upload an equipment readings CSV to analyze pressure peaks "
                "and the distribution of equipment types across the plant."
            </p>
        </div>
    }
}
