use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound (inclusive) of the `low` band
pub const LOW_UTILIZATION_MAX: f64 = 0.33;

/// Lower bound (inclusive) of the `high` band
pub const HIGH_UTILIZATION_MIN: f64 = 0.66;

/// Bed utilization band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UtilizationLevel {
    Low,
    Medium,
    High,
}

impl UtilizationLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            UtilizationLevel::Low => "low",
            UtilizationLevel::Medium => "medium",
            UtilizationLevel::High => "high",
        }
    }
}

impl fmt::Display for UtilizationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Band a bed-utilization ratio.
///
/// `<= 0.33` is low, strictly between 0.33 and 0.66 is medium, everything
/// else is high. Exactly 0.66 and NaN land in high.
pub fn label_utilization(ratio: f64) -> UtilizationLevel {
    if ratio <= LOW_UTILIZATION_MAX {
        UtilizationLevel::Low
    } else if ratio > LOW_UTILIZATION_MAX && ratio < HIGH_UTILIZATION_MIN {
        UtilizationLevel::Medium
    } else {
        UtilizationLevel::High
    }
}
