use serde::{Deserialize, Serialize};

use super::format::PriceFormat;
use super::rounding::RoundingPolicy;
use crate::error::{ChartError, ChartResult};

/// Immutable configuration injected into the price-axis renderer.
///
/// Kept explicit rather than ambient so a render pass depends only on the
/// snapshots it was handed and axes can be tested in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    /// Numeric layout of one label cell.
    pub format: PriceFormat,
    /// Rows between consecutive tick labels.
    pub tick_spacing: u32,
    /// Label rounding applied before formatting.
    pub rounding: RoundingPolicy,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            format: PriceFormat::default(),
            tick_spacing: 4,
            rounding: RoundingPolicy::default(),
        }
    }
}

impl AxisConfig {
    /// Validates option ranges before the axis is constructed.
    ///
    /// Render-path operations are total; malformed configuration is caught
    /// here, at the configuration boundary.
    pub fn validate(self) -> ChartResult<Self> {
        if self.tick_spacing == 0 {
            return Err(ChartError::InvalidData(
                "tick spacing must be >= 1".to_owned(),
            ));
        }

        if !self.rounding.multiplier.is_finite() || self.rounding.multiplier < 0.0 {
            return Err(ChartError::InvalidData(
                "rounding multiplier must be finite and >= 0".to_owned(),
            ));
        }

        Ok(self)
    }

    /// Loads and validates a configuration from its JSON form.
    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()
    }
}
