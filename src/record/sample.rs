//! Per-position values of a series.

use serde::Serialize;

/// One observation in the `steps` sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    /// Observed value; always finite once validated.
    pub y: f64,
}

/// Whether the sample at the same index is flagged as hazardous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HazardFlag(pub bool);

impl HazardFlag {
    /// Returns `true` when the paired sample is hazardous.
    #[must_use]
    pub fn is_hazard(self) -> bool {
        self.0
    }
}

impl From<bool> for HazardFlag {
    fn from(value: bool) -> Self {
        Self(value)
    }
}
