//! Application configuration.
//!
//! Centralized configuration for the PlantSafe portal.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Analysis service base URL.
///
/// The backend that parses uploaded CSV files and computes the
/// safety summary.
pub const BACKEND_URL: &str = "http://127.0.0.1:8000";

/// Upload endpoint path, appended to [`BACKEND_URL`].
pub const UPLOAD_PATH: &str = "/api/upload/";

/// Pressure threshold (bar) above which a dataset is classified critical.
///
/// Strict comparison: a peak of exactly 7.0 bar is still operational.
pub const CRITICAL_PRESSURE_BAR: f64 = 7.0;

/// Fixed message shown when an upload attempt fails for any reason.
pub const UPLOAD_FAILED_MESSAGE: &str =
    "Upload failed. Check that the analysis service is running.";

/// Application name, used in the page header.
pub const APP_NAME: &str = "Chemical Plant Safety Web Portal";
