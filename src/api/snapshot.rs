use serde::{Deserialize, Serialize};

use crate::core::{Allocation, Orientation, Range, TickSpec};
use crate::error::{RulerError, RulerResult};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulerSnapshot {
    pub orientation: Orientation,
    pub range: Range,
    pub allocation: Allocation,
    pub interval: Option<i64>,
    pub major_tick_length: f64,
    pub min_major_tick_spacing: i32,
    pub ticks: Vec<TickSpec>,
}

impl RulerSnapshot {
    pub fn to_json_pretty(&self) -> RulerResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| RulerError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    /// Labels of the major ticks, in order.
    pub fn major_labels(&self) -> impl Iterator<Item = &str> {
        self.ticks
            .iter()
            .filter(|tick| tick.is_major)
            .filter_map(|tick| tick.label.as_deref())
    }
}
