use serde::{Deserialize, Serialize};

/// Side a label rounds toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoundingDirection {
    #[default]
    Down,
    Up,
}

/// Deterministic direction-biased rounding for axis labels.
///
/// Labels always round toward one side, never to nearest, so a tick label
/// cannot overstate the extent of the visible range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundingPolicy {
    /// Precision multiplier; `0` disables rounding entirely.
    pub multiplier: f64,
    pub direction: RoundingDirection,
}

impl Default for RoundingPolicy {
    fn default() -> Self {
        Self {
            multiplier: 0.0,
            direction: RoundingDirection::Down,
        }
    }
}

impl RoundingPolicy {
    /// Applies the policy to a raw price.
    #[must_use]
    pub fn apply(self, price: f64) -> f64 {
        if self.multiplier <= 0.0 {
            return price;
        }

        let scaled = price * self.multiplier;
        let snapped = match self.direction {
            RoundingDirection::Down => scaled.floor(),
            RoundingDirection::Up => scaled.ceil(),
        };
        snapped / self.multiplier
    }
}
