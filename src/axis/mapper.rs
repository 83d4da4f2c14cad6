use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{Candle, ChartGeometry, VisibleCandleSet};

/// Fractional row offsets for one candle within the visible height.
///
/// Offsets grow with price from the bottom of the plot; rounding to integer
/// rows is the plotting layer's concern, not ours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleOffsets {
    pub high: f64,
    pub low: f64,
    pub body_top: f64,
    pub body_bottom: f64,
}

/// Projects one candle's four significant prices onto fractional rows.
///
/// A flat window (zero price range) substitutes a range of 1 so the
/// projection stays finite and the market renders flat instead of failing.
/// Pure and side-effect free so it can back both rendering and regression
/// tests.
#[must_use]
pub fn project_candle(
    candle: Candle,
    candle_set: &VisibleCandleSet,
    geometry: ChartGeometry,
) -> CandleOffsets {
    let min_value = candle_set.min_price();
    let range = match candle_set.price_range() {
        range if range == 0.0 => 1.0,
        range => range,
    };
    let height = f64::from(geometry.height());
    let offset = |price: f64| (price - min_value) / range * height;

    CandleOffsets {
        high: offset(candle.high),
        low: offset(candle.low),
        body_top: offset(candle.body_top()),
        body_bottom: offset(candle.body_bottom()),
    }
}

/// Bulk projection used by the plotting layer.
#[must_use]
pub fn project_candles(
    candles: &[Candle],
    candle_set: &VisibleCandleSet,
    geometry: ChartGeometry,
) -> Vec<CandleOffsets> {
    #[cfg(feature = "parallel-projection")]
    {
        candles
            .par_iter()
            .map(|candle| project_candle(*candle, candle_set, geometry))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        candles
            .iter()
            .map(|candle| project_candle(*candle, candle_set, geometry))
            .collect()
    }
}
