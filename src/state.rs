//! Upload workflow state.
//!
//! Reactive state management using Leptos signals. One instance is
//! created per session and provided to all components via context;
//! the upload handler is the only writer.

use leptos::*;

use crate::types::Summary;

/// State of the upload-and-summarize workflow.
///
/// `loading` is true strictly between request dispatch and settlement.
/// `summary` is replaced wholesale on success and left untouched on
/// failure, so a failed re-upload keeps the previous result visible.
#[derive(Clone, Copy)]
pub struct UploadState {
    /// Last successfully decoded analysis summary.
    pub summary: RwSignal<Option<Summary>>,
    /// An upload request is in flight.
    pub loading: RwSignal<bool>,
    /// Pending user-facing failure notification.
    pub error: RwSignal<Option<String>>,
    /// Wall-clock time of the last successful analysis (HH:MM:SS).
    pub last_updated: RwSignal<Option<String>>,
}

impl UploadState {
    pub fn new() -> Self {
        Self {
            summary: create_rw_signal(None),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
            last_updated: create_rw_signal(None),
        }
    }

    /// Mark a request as dispatched. Clears any stale notification so
    /// a later failure surfaces exactly once.
    pub fn begin_upload(&self) {
        self.error.set(None);
        self.loading.set(true);
    }

    /// Settle a request that returned a decoded summary.
    pub fn finish_success(&self, summary: Summary, timestamp: String) {
        self.summary.set(Some(summary));
        self.last_updated.set(Some(timestamp));
        self.loading.set(false);
    }

    /// Settle a failed request. Previous results are preserved.
    pub fn finish_failure(&self, message: String) {
        self.error.set(Some(message));
        self.loading.set(false);
    }

    /// Clear the failure notification (dismiss button).
    pub fn dismiss_error(&self) {
        self.error.set(None);
    }
}

impl Default for UploadState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the session's [`UploadState`] and provide it via context.
pub fn provide_upload_state() -> UploadState {
    let state = UploadState::new();
    provide_context(state);
    state
}

/// Fetch the [`UploadState`] from context.
pub fn expect_upload_state() -> UploadState {
    use_context::<UploadState>().expect("UploadState not provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SafetyStatus, Summary};

    fn sample_summary(max_pressure: f64) -> Summary {
        serde_json::from_value(serde_json::json!({
            "max_pressure": max_pressure,
            "type_dist": {"Pump": 3, "Valve": 5}
        }))
        .unwrap()
    }

    #[test]
    fn success_path_settles_loading_and_replaces_summary() {
        let runtime = create_runtime();
        let state = UploadState::new();

        state.begin_upload();
        assert!(state.loading.get_untracked());
        assert!(state.error.get_untracked().is_none());

        state.finish_success(sample_summary(8.2), "12:00:00".to_string());
        assert!(!state.loading.get_untracked());
        let summary = state.summary.get_untracked().unwrap();
        assert_eq!(summary.status(), SafetyStatus::Critical);
        assert_eq!(state.last_updated.get_untracked().as_deref(), Some("12:00:00"));

        runtime.dispose();
    }

    #[test]
    fn failure_preserves_previous_summary() {
        let runtime = create_runtime();
        let state = UploadState::new();

        // First attempt fails with nothing uploaded yet.
        state.begin_upload();
        state.finish_failure("upload failed".to_string());
        assert!(!state.loading.get_untracked());
        assert!(state.summary.get_untracked().is_none());
        assert_eq!(state.error.get_untracked().as_deref(), Some("upload failed"));

        // A success followed by a failure keeps the earlier result.
        state.begin_upload();
        assert!(state.error.get_untracked().is_none());
        state.finish_success(sample_summary(5.0), "12:01:00".to_string());

        state.begin_upload();
        state.finish_failure("upload failed".to_string());
        let summary = state.summary.get_untracked().unwrap();
        assert_eq!(summary.max_pressure, 5.0);

        state.dismiss_error();
        assert!(state.error.get_untracked().is_none());

        runtime.dispose();
    }
}
