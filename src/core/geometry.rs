use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Side of the plot the price-axis column is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AxisPlacement {
    #[default]
    Left,
    Right,
}

/// Fixed cell-grid geometry for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartGeometry {
    height: u32,
    placement: AxisPlacement,
    margin_right: u32,
}

impl ChartGeometry {
    /// Builds a validated geometry; the plot needs at least one row.
    pub fn new(height: u32, placement: AxisPlacement, margin_right: u32) -> ChartResult<Self> {
        if height == 0 {
            return Err(ChartError::InvalidGeometry { height });
        }

        Ok(Self {
            height,
            placement,
            margin_right,
        })
    }

    /// Number of rows available for plotting.
    #[must_use]
    pub fn height(self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn placement(self) -> AxisPlacement {
        self.placement
    }

    /// Blank columns kept to the right of a left-side axis.
    #[must_use]
    pub fn margin_right(self) -> u32 {
        self.margin_right
    }
}
