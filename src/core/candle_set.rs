use serde::{Deserialize, Serialize};

use crate::core::Candle;
use crate::error::{ChartError, ChartResult};

/// Immutable snapshot of the currently visible candle window.
///
/// Which candles are visible is upstream windowing logic; this type only
/// freezes a window for one frame and answers extrema queries over it.
/// Price extrema are computed once at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibleCandleSet {
    candles: Vec<Candle>,
    min_price: f64,
    max_price: f64,
}

impl VisibleCandleSet {
    /// Snapshots a visible window and computes its price extrema.
    ///
    /// A flat window (every candle at the same price) is legal; the
    /// degenerate zero range is handled by the projection layer. An empty
    /// window is rejected because it has no extrema.
    pub fn new(candles: Vec<Candle>) -> ChartResult<Self> {
        if candles.is_empty() {
            return Err(ChartError::InvalidData(
                "visible window must contain at least one candle".to_owned(),
            ));
        }

        let mut min_price = f64::INFINITY;
        let mut max_price = f64::NEG_INFINITY;
        for candle in &candles {
            min_price = min_price.min(candle.low);
            max_price = max_price.max(candle.high);
        }

        Ok(Self {
            candles,
            min_price,
            max_price,
        })
    }

    /// Lowest low across the window.
    #[must_use]
    pub fn min_price(&self) -> f64 {
        self.min_price
    }

    /// Highest high across the window.
    #[must_use]
    pub fn max_price(&self) -> f64 {
        self.max_price
    }

    /// Price span of the window; zero for a flat market.
    #[must_use]
    pub fn price_range(&self) -> f64 {
        self.max_price - self.min_price
    }

    #[must_use]
    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }
}
