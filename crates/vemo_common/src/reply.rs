//! Reply record produced by the classifier

use crate::actions::ActionButton;
use crate::intent::IntentCategory;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Classification output. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    pub category: IntentCategory,
    pub text: String,
    pub actions: Vec<ActionButton>,
    /// Cosmetic, in [0.80, 1.00). Never used for control flow.
    pub confidence: f64,
    /// Estimated time to "think" about this reply
    #[serde(with = "duration_ms")]
    pub processing_time: Duration,
    pub suggestions: Vec<String>,
    pub timestamp: DateTime<Local>,
}

impl Reply {
    pub fn is_fallback(&self) -> bool {
        self.category == IntentCategory::Fallback
    }

    /// Confidence as a whole percentage for display
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence * 100.0).floor() as u32
    }
}

/// Serialize `Duration` as integer milliseconds
pub mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_millis(u64::deserialize(d)?))
    }
}
