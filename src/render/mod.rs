pub mod color;

pub use color::{AnsiColor, ColorSpec, colorize};
