//! Upload-failure notification.
//!
//! Blocking modal overlay shown once per failed attempt. Previous
//! results stay visible and untouched underneath.

use leptos::*;

use crate::state::expect_upload_state;

#[component]
pub fn AlertModal() -> impl IntoView {
    let state = expect_upload_state();

    view! {
        <Show
            when=move || state.error.get().is_some()
            fallback=|| view! { }
        >
            <div class="modal-overlay">
                <div class="modal-box">
                    <div class="modal-icon">"⚠"</div>
                    <p class="modal-message">
                        {move || state.error.get().unwrap_or_default()}
                    </p>
                    <button
                        class="modal-dismiss"
                        on:click=move |_| state.dismiss_error()
                    >
                        "Dismiss"
                    </button>
                </div>
            </div>
        </Show>
    }
}
