use serde::{Deserialize, Serialize};

const RESET: &str = "\x1b[0m";

/// Named 4-bit terminal foreground colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnsiColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl AnsiColor {
    fn sgr_code(self) -> u8 {
        match self {
            Self::Black => 30,
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
            Self::White => 37,
        }
    }
}

/// Foreground color request for one rendered token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorSpec {
    Named(AnsiColor),
    Rgb { r: u8, g: u8, b: u8 },
}

/// Wraps `token` in SGR escape sequences.
///
/// The escape bytes are zero-width on screen, so the displayed width of the
/// result equals the displayed width of `token`.
#[must_use]
pub fn colorize(token: &str, spec: ColorSpec) -> String {
    match spec {
        ColorSpec::Named(color) => format!("\x1b[{}m{token}{RESET}", color.sgr_code()),
        ColorSpec::Rgb { r, g, b } => format!("\x1b[38;2;{r};{g};{b}m{token}{RESET}"),
    }
}
