//! The validated aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::sample::{HazardFlag, Sample};

/// A time series of samples with a parallel hazard flag per sample.
///
/// Only the validator constructs this type, so every instance satisfies
/// `steps().len() == hazard().len()`. Deserializing through serde runs the
/// same validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "serde_json::Value")]
pub struct TimeSeriesRecord {
    steps: Vec<Sample>,
    hazard: Vec<HazardFlag>,
    hazard_description: String,
    start_date: DateTime<Utc>,
}

impl TimeSeriesRecord {
    pub(crate) fn new(
        steps: Vec<Sample>,
        hazard: Vec<HazardFlag>,
        hazard_description: String,
        start_date: DateTime<Utc>,
    ) -> Self {
        debug_assert_eq!(steps.len(), hazard.len());
        Self { steps, hazard, hazard_description, start_date }
    }

    /// Samples in time order.
    #[must_use]
    pub fn steps(&self) -> &[Sample] {
        &self.steps
    }

    /// Hazard flags, index-aligned with [`Self::steps`].
    #[must_use]
    pub fn hazard(&self) -> &[HazardFlag] {
        &self.hazard
    }

    /// Free-text explanation of the hazard condition.
    #[must_use]
    pub fn hazard_description(&self) -> &str {
        &self.hazard_description
    }

    /// Origin of the series.
    #[must_use]
    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the series has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterates samples paired with their hazard flag.
    pub fn pairs(&self) -> impl Iterator<Item = (Sample, HazardFlag)> + '_ {
        self.steps.iter().copied().zip(self.hazard.iter().copied())
    }

    /// Number of positions flagged as hazardous.
    #[must_use]
    pub fn hazard_count(&self) -> usize {
        self.hazard.iter().filter(|flag| flag.is_hazard()).count()
    }
}

impl TryFrom<serde_json::Value> for TimeSeriesRecord {
    type Error = ValidationError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        crate::validate::validate(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn record() -> TimeSeriesRecord {
        TimeSeriesRecord::new(
            vec![Sample { y: 1.0 }, Sample { y: 2.5 }, Sample { y: -3.0 }],
            vec![HazardFlag(false), HazardFlag(true), HazardFlag(true)],
            "spike".to_string(),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn pairs_are_index_aligned() {
        let pairs: Vec<_> = record().pairs().collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[1], (Sample { y: 2.5 }, HazardFlag(true)));
    }

    #[test]
    fn counts_hazards() {
        assert_eq!(record().hazard_count(), 2);
        assert_eq!(record().len(), 3);
        assert!(!record().is_empty());
    }

    #[test]
    fn serializes_with_camel_case_names() {
        let value = serde_json::to_value(record()).unwrap();
        assert_eq!(value["hazardDescription"], json!("spike"));
        assert_eq!(value["startDate"], json!("2024-01-01T00:00:00Z"));
        assert_eq!(value["steps"][1], json!({"y": 2.5}));
        assert_eq!(value["hazard"], json!([false, true, true]));
    }

    #[test]
    fn deserialization_round_trips_through_validation() {
        let original = record();
        let text = serde_json::to_string(&original).unwrap();
        let parsed: TimeSeriesRecord = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn deserialization_rejects_invalid_records() {
        let text = r#"{"steps":[{"y":1}],"hazard":[],"hazardDescription":"","startDate":"2024-01-01"}"#;
        let err = serde_json::from_str::<TimeSeriesRecord>(text).unwrap_err();
        assert!(err.to_string().contains("hazard"));
    }
}
