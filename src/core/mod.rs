pub mod candle;
pub mod candle_set;
pub mod geometry;

pub use candle::Candle;
pub use candle_set::VisibleCandleSet;
pub use geometry::{AxisPlacement, ChartGeometry};
