//! termcandle: terminal candlestick charting core.
//!
//! The centerpiece is the vertical price axis: a deterministic mapping from
//! continuous price space onto a fixed grid of character cells, with
//! fixed-width labels and caller-supplied highlight overlays.

pub mod axis;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use axis::{AxisConfig, HighlightKey, HighlightSet, YAxis};
pub use error::{ChartError, ChartResult};
