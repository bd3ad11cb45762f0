//! PlantSafe Portal - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading chemical-plant equipment CSV
//! files to the analysis service and rendering the returned safety
//! summary.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (file picker, loading indicator)         │
//! │  ├── ResultsSection (status, metrics, bar chart)            │
//! │  └── AlertModal (upload failure notification)               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (Summary, SafetyStatus, errors)
//! - [`state`] - Upload workflow state (signals, context)
//! - [`components`] - UI components (Upload, Results, Chart, etc.)
//! - [`services`] - Backend communication (CSV upload)

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod services;
pub mod state;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;

pub use types::{AppError, AppResult, SafetyStatus, Summary, TypeDist};

pub use state::{expect_upload_state, provide_upload_state, UploadState};

pub use components::*;

pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 PlantSafe Portal - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // One upload state per session, shared through context. The
    // upload handler is the only writer; everything below renders
    // from it.
    provide_upload_state();

    view! {
        <div class="container">
            <Hero/>

            <div class="portal-card">
                <UploadSection/>
                <ResultsSection/>
            </div>
        </div>

        <AlertModal/>

        <Footer/>
    }
}
