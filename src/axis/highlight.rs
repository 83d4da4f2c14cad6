use indexmap::IndexMap;
use ordered_float::OrderedFloat;

use super::format::PriceFormat;
use crate::render::ColorSpec;

/// Key addressing one highlighted price level.
///
/// Both lookup modes are supported: a pre-formatted label token matched
/// verbatim against tick labels, or a numeric price matched against the
/// price band a row covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HighlightKey {
    Token(String),
    Price(OrderedFloat<f64>),
}

impl HighlightKey {
    /// Numeric value of the key, when it has one.
    ///
    /// Token keys join numeric band matching only when they parse as a
    /// number.
    #[must_use]
    pub fn price_value(&self) -> Option<f64> {
        match self {
            Self::Price(value) => Some(value.into_inner()),
            Self::Token(token) => token.trim().parse().ok(),
        }
    }

    fn token_for(&self, format: PriceFormat) -> String {
        match self {
            Self::Token(token) => token.clone(),
            Self::Price(value) => format.format(value.into_inner()),
        }
    }
}

impl From<&str> for HighlightKey {
    fn from(token: &str) -> Self {
        Self::Token(token.to_owned())
    }
}

impl From<String> for HighlightKey {
    fn from(token: String) -> Self {
        Self::Token(token)
    }
}

impl From<f64> for HighlightKey {
    fn from(price: f64) -> Self {
        Self::Price(OrderedFloat(price))
    }
}

/// Per-frame mapping from price level to display color.
///
/// `IndexMap` preserves insertion order, so "first match wins" resolves the
/// same way every frame.
#[derive(Debug, Clone, Default)]
pub struct HighlightSet {
    entries: IndexMap<HighlightKey, ColorSpec>,
}

impl HighlightSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a highlight; re-inserting a key keeps its original position
    /// and updates the color.
    pub fn insert(&mut self, key: impl Into<HighlightKey>, color: ColorSpec) {
        self.entries.insert(key.into(), color);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&HighlightKey, &ColorSpec)> {
        self.entries.iter()
    }

    /// Color for a tick label matching a key exactly.
    ///
    /// Numeric keys are compared through the same formatter that produced
    /// the tick label.
    #[must_use]
    pub(crate) fn match_token(&self, token: &str, format: PriceFormat) -> Option<ColorSpec> {
        self.entries
            .iter()
            .find(|(key, _)| match key {
                HighlightKey::Token(text) => text == token,
                HighlightKey::Price(value) => format.format(value.into_inner()) == token,
            })
            .map(|(_, color)| *color)
    }

    /// First key, in insertion order, whose price lies strictly inside
    /// `(lower, upper)`, together with its display token.
    ///
    /// Strict on both bounds: a target equal to a row boundary price falls
    /// through to no match.
    #[must_use]
    pub(crate) fn match_band(
        &self,
        lower: f64,
        upper: f64,
        format: PriceFormat,
    ) -> Option<(String, ColorSpec)> {
        self.entries.iter().find_map(|(key, color)| {
            let value = key.price_value()?;
            if lower < value && value < upper {
                Some((key.token_for(format), *color))
            } else {
                None
            }
        })
    }
}
