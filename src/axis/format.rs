use serde::{Deserialize, Serialize};

/// Fixed-width numeric layout for one axis label cell.
///
/// `int_width` integer columns plus `dec_precision` fractional digits plus
/// one separator define the canonical cell width. Tokens wider than the cell
/// keep all their digits; the configured widths are a minimum field width,
/// not a clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceFormat {
    pub int_width: u8,
    pub dec_precision: u8,
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self {
            int_width: 8,
            dec_precision: 2,
        }
    }
}

impl PriceFormat {
    /// Canonical width of one label cell, separator included.
    #[must_use]
    pub fn cell_width(self) -> usize {
        usize::from(self.int_width) + usize::from(self.dec_precision) + 1
    }

    /// Renders a finite price as its bare label token.
    ///
    /// The token is what highlight keys match against; alignment into the
    /// cell happens in [`Self::format_cell`].
    #[must_use]
    pub fn format(self, value: f64) -> String {
        let precision = usize::from(self.dec_precision);
        format!("{value:.precision$}")
    }

    /// Renders a finite price left-aligned into the canonical cell width.
    #[must_use]
    pub fn format_cell(self, value: f64) -> String {
        self.pad_cell(self.format(value))
    }

    /// Left-aligns an already-rendered token into the canonical cell width.
    #[must_use]
    pub fn pad_cell(self, token: String) -> String {
        let width = self.cell_width();
        format!("{token:<width$}")
    }
}
