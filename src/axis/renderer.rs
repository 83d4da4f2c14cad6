use serde::Serialize;
use tracing::debug;

use super::config::AxisConfig;
use super::highlight::HighlightSet;
use super::mapper::{CandleOffsets, project_candle};
use crate::core::{AxisPlacement, Candle, ChartGeometry, VisibleCandleSet};
use crate::error::ChartResult;
use crate::render::{ColorSpec, colorize};

/// Vertical price-axis renderer for one frame.
///
/// Holds immutable frame snapshots only; every query is a pure function of
/// the row index, so identical frame state renders byte-identical output.
#[derive(Debug, Clone, Copy)]
pub struct YAxis<'a> {
    candle_set: &'a VisibleCandleSet,
    geometry: ChartGeometry,
    config: AxisConfig,
}

impl<'a> YAxis<'a> {
    #[must_use]
    pub fn new(candle_set: &'a VisibleCandleSet, geometry: ChartGeometry, config: AxisConfig) -> Self {
        Self {
            candle_set,
            geometry,
            config,
        }
    }

    /// Price at the bottom edge of row `y` under the linear row mapping.
    ///
    /// Inverse of the candle projection. A flat window maps every row to the
    /// same price; tick labels then repeat, which is accepted behavior.
    #[must_use]
    pub fn price_at_row(&self, y: u32) -> f64 {
        let min_value = self.candle_set.min_price();
        let range = self.candle_set.price_range();
        min_value + f64::from(y) * range / f64::from(self.geometry.height())
    }

    /// Projects a candle through this frame's window and geometry.
    #[must_use]
    pub fn project(&self, candle: Candle) -> CandleOffsets {
        project_candle(candle, self.candle_set, self.geometry)
    }

    /// Renders the axis cell for row `y`.
    ///
    /// Rows at `tick_spacing` intervals carry a label; the rest carry only
    /// the rule, unless a highlight band promotes them.
    #[must_use]
    pub fn render_row(&self, y: u32, highlights: Option<&HighlightSet>) -> String {
        if y % self.config.tick_spacing == 0 {
            self.render_tick(y, highlights)
        } else {
            self.render_blank(y, highlights)
        }
    }

    /// Renders every axis row for the frame, bottom row first.
    #[must_use]
    pub fn render_column(&self, highlights: Option<&HighlightSet>) -> Vec<String> {
        debug!(
            height = self.geometry.height(),
            highlight_count = highlights.map_or(0, HighlightSet::len),
            "render axis column"
        );
        (0..self.geometry.height())
            .map(|y| self.render_row(y, highlights))
            .collect()
    }

    /// Serializes a diagnostic snapshot of this frame's axis column.
    pub fn snapshot_json(&self, highlights: Option<&HighlightSet>) -> ChartResult<String> {
        let snapshot = AxisSnapshot {
            geometry: self.geometry,
            config: self.config,
            min_price: self.candle_set.min_price(),
            max_price: self.candle_set.max_price(),
            rows: self.render_column(highlights),
        };
        Ok(serde_json::to_string_pretty(&snapshot)?)
    }

    fn rounded_price_at_row(&self, y: u32) -> f64 {
        self.config.rounding.apply(self.price_at_row(y))
    }

    fn render_tick(&self, y: u32, highlights: Option<&HighlightSet>) -> String {
        let token = self.config.format.format(self.rounded_price_at_row(y));

        let cell = match highlights.and_then(|set| set.match_token(&token, self.config.format)) {
            Some(color) => self.colorized_cell(&token, color),
            None => self.config.format.pad_cell(token),
        };

        self.decorate_label(&cell)
    }

    fn render_blank(&self, y: u32, highlights: Option<&HighlightSet>) -> String {
        // A blank row may be promoted to show a highlight whose price falls
        // strictly inside the half-open band this row covers.
        if let Some(set) = highlights.filter(|set| !set.is_empty()) {
            let lower = self.rounded_price_at_row(y);
            let upper = self.rounded_price_at_row(y + 1);
            if let Some((token, color)) = set.match_band(lower, upper, self.config.format) {
                return self.decorate_label(&self.colorized_cell(&token, color));
            }
        }

        match self.geometry.placement() {
            AxisPlacement::Right => " │".to_owned(),
            AxisPlacement::Left => {
                let cell = " ".repeat(self.config.format.cell_width() + 1);
                let margin = " ".repeat(self.geometry.margin_right() as usize + 1);
                format!("{cell}│{margin}")
            }
        }
    }

    /// Colorizes a token and re-pads it so the displayed width still equals
    /// the cell width; the escape bytes are zero-width on screen.
    fn colorized_cell(&self, token: &str, color: ColorSpec) -> String {
        let colorized = colorize(token, color);
        let width = self.config.format.cell_width() + (colorized.len() - token.len());
        format!("{colorized:<width$}")
    }

    /// Attaches the rule glyph and placement-dependent padding to a padded
    /// label cell.
    fn decorate_label(&self, cell: &str) -> String {
        match self.geometry.placement() {
            AxisPlacement::Right => format!(" │― {cell}"),
            AxisPlacement::Left => {
                let margin = " ".repeat(self.geometry.margin_right() as usize);
                format!("{cell} │―{margin}")
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct AxisSnapshot {
    geometry: ChartGeometry,
    config: AxisConfig,
    min_price: f64,
    max_price: f64,
    rows: Vec<String>,
}
