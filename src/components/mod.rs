//! UI Components for the PlantSafe portal.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - CSV file upload control and loading indicator
//! - [`ResultsSection`] - Safety status, process metrics and chart
//! - [`SafetyChart`] - Canvas bar chart of the equipment distribution
//! - [`AlertModal`] - Blocking upload-failure notification

mod alert;
mod chart;
mod footer;
mod hero;
mod results;
mod upload;

pub use alert::*;
pub use chart::*;
pub use footer::*;
pub use hero::*;
pub use results::*;
pub use upload::*;
