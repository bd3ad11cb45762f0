//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Summary Types** - Typed view of the analysis service response
//! - **Classification** - Safety status derived from the summary
//! - **Error Types** - Frontend error handling

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::config::CRITICAL_PRESSURE_BAR;

// =============================================================================
// Summary Types
// =============================================================================

/// Safety summary computed by the analysis service for one uploaded CSV.
///
/// Only `max_pressure` and `type_dist` are required; the remaining
/// fields are present when the corresponding CSV columns exist and
/// default otherwise.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Peak pressure (bar) across all records.
    pub max_pressure: f64,
    /// Equipment units per equipment type, in the order the service
    /// reported them.
    pub type_dist: TypeDist,
    /// Number of CSV records analyzed.
    #[serde(default)]
    pub total_records: Option<u64>,
    /// Mean pressure (bar).
    #[serde(default)]
    pub avg_pressure: Option<f64>,
    /// Mean flowrate.
    #[serde(default)]
    pub avg_flowrate: Option<f64>,
    /// Mean temperature.
    #[serde(default)]
    pub avg_temperature: Option<f64>,
    /// Peak temperature.
    #[serde(default)]
    pub max_temperature: Option<f64>,
}

impl Summary {
    /// Classification derived from the peak pressure.
    pub fn status(&self) -> SafetyStatus {
        SafetyStatus::from_pressure(self.max_pressure)
    }
}

/// Equipment-type distribution: type name to unit count.
///
/// The chart renders categories in the order the service sent them,
/// so this keeps JSON document order instead of going through a
/// sorted or hashed map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeDist(Vec<(String, u64)>);

impl TypeDist {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in received order.
    pub fn iter(&self) -> impl Iterator<Item = &(String, u64)> {
        self.0.iter()
    }

    /// Category labels in received order.
    pub fn labels(&self) -> Vec<&str> {
        self.0.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Unit counts in received order.
    pub fn counts(&self) -> Vec<u64> {
        self.0.iter().map(|(_, count)| *count).collect()
    }

    /// Largest count, for chart y-axis scaling.
    pub fn max_count(&self) -> u64 {
        self.0.iter().map(|(_, count)| *count).max().unwrap_or(0)
    }
}

impl FromIterator<(String, u64)> for TypeDist {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        TypeDist(iter.into_iter().collect())
    }
}

impl Serialize for TypeDist {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, count) in &self.0 {
            map.serialize_entry(name, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TypeDist {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TypeDistVisitor;

        impl<'de> Visitor<'de> for TypeDistVisitor {
            type Value = TypeDist;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of equipment type names to unit counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, u64>()? {
                    entries.push(entry);
                }
                Ok(TypeDist(entries))
            }
        }

        deserializer.deserialize_map(TypeDistVisitor)
    }
}

// =============================================================================
// Classification
// =============================================================================

/// Binary safety classification derived from the peak pressure.
///
/// Never stored: always recomputed from [`Summary::max_pressure`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SafetyStatus {
    /// Peak pressure within the operational envelope.
    Operational,
    /// Peak pressure above [`CRITICAL_PRESSURE_BAR`].
    Critical,
}

impl SafetyStatus {
    /// Classify a peak pressure reading. Strictly greater-than: the
    /// threshold itself is operational.
    pub fn from_pressure(max_pressure: f64) -> Self {
        if max_pressure > CRITICAL_PRESSURE_BAR {
            SafetyStatus::Critical
        } else {
            SafetyStatus::Operational
        }
    }

    /// Status heading text.
    pub fn label(&self) -> &'static str {
        match self {
            SafetyStatus::Operational => "OPERATIONAL",
            SafetyStatus::Critical => "CRITICAL ALERT",
        }
    }

    /// CSS class for the status heading.
    pub fn css_class(&self) -> &'static str {
        match self {
            SafetyStatus::Operational => "status-operational",
            SafetyStatus::Critical => "status-critical",
        }
    }

    /// Bar fill color for the chart.
    pub fn bar_color(&self) -> &'static str {
        match self {
            SafetyStatus::Operational => "rgba(52, 152, 219, 0.6)",
            SafetyStatus::Critical => "rgba(231, 76, 60, 0.6)",
        }
    }
}

impl fmt::Display for SafetyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations. The user sees a
/// single fixed failure message; the variants exist so the console
/// log records what actually went wrong.
#[derive(Clone, Debug)]
pub enum AppError {
    /// Building the upload request failed.
    Upload(String),
    /// Network/HTTP error.
    Network(String),
    /// Response body did not decode to the expected shape.
    Decode(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Upload(msg) => write!(f, "Upload error: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_strictly_greater_than() {
        assert_eq!(SafetyStatus::from_pressure(8.2), SafetyStatus::Critical);
        assert_eq!(SafetyStatus::from_pressure(7.01), SafetyStatus::Critical);
        assert_eq!(SafetyStatus::from_pressure(7.0), SafetyStatus::Operational);
        assert_eq!(SafetyStatus::from_pressure(5.0), SafetyStatus::Operational);
        assert_eq!(SafetyStatus::from_pressure(0.0), SafetyStatus::Operational);
    }

    #[test]
    fn classification_labels_and_palette() {
        assert_eq!(SafetyStatus::Critical.label(), "CRITICAL ALERT");
        assert_eq!(SafetyStatus::Operational.label(), "OPERATIONAL");
        assert_ne!(
            SafetyStatus::Critical.bar_color(),
            SafetyStatus::Operational.bar_color()
        );
    }

    #[test]
    fn type_dist_keeps_document_order() {
        let json = r#"{"max_pressure": 8.2, "type_dist": {"Pump": 3, "Valve": 5}}"#;
        let summary: Summary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.type_dist.labels(), vec!["Pump", "Valve"]);
        assert_eq!(summary.type_dist.counts(), vec![3, 5]);

        // Reversed document order is preserved too, not sorted.
        let json = r#"{"max_pressure": 8.2, "type_dist": {"Valve": 5, "Pump": 3}}"#;
        let summary: Summary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.type_dist.labels(), vec!["Valve", "Pump"]);
    }

    #[test]
    fn summary_supplementary_fields_default() {
        let json = r#"{"max_pressure": 5.0, "type_dist": {"Tank": 2}}"#;
        let summary: Summary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.status(), SafetyStatus::Operational);
        assert_eq!(summary.total_records, None);
        assert_eq!(summary.avg_pressure, None);
        assert_eq!(summary.type_dist.max_count(), 2);
    }

    #[test]
    fn summary_full_shape_decodes() {
        let json = r#"{
            "total_records": 120,
            "avg_flowrate": 14.2,
            "avg_pressure": 4.8,
            "avg_temperature": 81.3,
            "max_pressure": 9.1,
            "max_temperature": 130.0,
            "type_dist": {"Pump": 40, "Valve": 55, "Tank": 25}
        }"#;
        let summary: Summary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_records, Some(120));
        assert_eq!(summary.avg_pressure, Some(4.8));
        assert_eq!(summary.type_dist.len(), 3);
        assert_eq!(summary.status(), SafetyStatus::Critical);
    }

    #[test]
    fn summary_requires_max_pressure() {
        let json = r#"{"type_dist": {"Pump": 1}}"#;
        assert!(serde_json::from_str::<Summary>(json).is_err());
    }

    #[test]
    fn type_dist_roundtrips_in_order() {
        let dist: TypeDist = vec![("Valve".to_string(), 5), ("Pump".to_string(), 3)]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&dist).unwrap();
        assert_eq!(json, r#"{"Valve":5,"Pump":3}"#);
    }
}
