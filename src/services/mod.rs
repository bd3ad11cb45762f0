//! Backend services.
//!
//! External communication with the analysis service:
//!
//! - [`upload`] - CSV upload and summary decoding

pub mod upload;

pub use upload::*;
