pub mod config;
pub mod format;
pub mod highlight;
pub mod mapper;
pub mod renderer;
pub mod rounding;

pub use config::AxisConfig;
pub use format::PriceFormat;
pub use highlight::{HighlightKey, HighlightSet};
pub use mapper::{CandleOffsets, project_candle, project_candles};
pub use renderer::YAxis;
pub use rounding::{RoundingDirection, RoundingPolicy};
