//! HTTP service for uploading CSV files to the analysis backend.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use web_sys::{File, FormData};

use crate::config::UPLOAD_PATH;
use crate::types::{AppError, AppResult, Summary};

/// Envelope returned by the upload endpoint.
///
/// The service also returns the stored dataset id; only the summary
/// is rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Server-side id of the stored dataset.
    #[serde(default)]
    pub id: Option<i64>,
    /// Computed safety summary.
    pub summary: Summary,
}

/// Upload a CSV file and return the decoded safety summary.
///
/// Multipart POST with the raw file under the `file` field. Any
/// request-path failure maps to an [`AppError`]; no timeout is
/// configured and an in-flight request cannot be cancelled.
pub async fn upload_csv(file: File, backend_url: &str) -> AppResult<Summary> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Upload(format!("failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob("file", &file)
        .map_err(|e| AppError::Upload(format!("failed to append file: {:?}", e)))?;

    let url = format!("{}{}", backend_url, UPLOAD_PATH);
    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| AppError::Upload(format!("failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    if !response.ok() {
        return Err(AppError::Network(format!(
            "server returned status {}",
            response.status()
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| AppError::Network(format!("failed to read response body: {}", e)))?;

    decode_summary(&body)
}

/// Decode the upload response body into a typed [`Summary`].
///
/// The shape is validated here rather than trusted downstream: a 2xx
/// response without a well-formed `summary` object is a failure.
pub fn decode_summary(body: &str) -> AppResult<Summary> {
    let envelope: UploadResponse = serde_json::from_str(body)
        .map_err(|e| AppError::Decode(format!("unexpected response shape: {}", e)))?;
    Ok(envelope.summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SafetyStatus;

    #[test]
    fn decodes_backend_response() {
        let json = r#"{
            "id": 7,
            "summary": {
                "total_records": 8,
                "avg_flowrate": 11.5,
                "avg_pressure": 5.2,
                "avg_temperature": 77.0,
                "max_pressure": 8.2,
                "max_temperature": 120.5,
                "type_dist": {"Pump": 3, "Valve": 5}
            }
        }"#;

        let summary = decode_summary(json).unwrap();
        assert_eq!(summary.max_pressure, 8.2);
        assert_eq!(summary.status(), SafetyStatus::Critical);
        assert_eq!(summary.type_dist.labels(), vec!["Pump", "Valve"]);
        assert_eq!(summary.type_dist.counts(), vec![3, 5]);
        assert_eq!(summary.total_records, Some(8));
    }

    #[test]
    fn decodes_minimal_summary() {
        let json = r#"{"summary": {"max_pressure": 5.0, "type_dist": {"Tank": 2}}}"#;
        let summary = decode_summary(json).unwrap();
        assert_eq!(summary.status(), SafetyStatus::Operational);
        assert_eq!(summary.type_dist.labels(), vec!["Tank"]);
    }

    #[test]
    fn rejects_missing_summary() {
        let err = decode_summary(r#"{"id": 3}"#).unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
    }

    #[test]
    fn rejects_non_json_body() {
        let err = decode_summary("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
    }

    #[test]
    fn rejects_wrongly_typed_summary() {
        let err = decode_summary(r#"{"summary": {"max_pressure": "high", "type_dist": {}}}"#)
            .unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
    }
}
