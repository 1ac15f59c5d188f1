use std::collections::BTreeMap;

use rand::RngCore;
use rand::seq::SliceRandom;

use crate::foundation::core::Rgb8;
use crate::foundation::error::{TaskError, TaskResult};
use crate::task::symbols::Symbol;

/// Fixed symbol palette. Every color is distinct and readable on white.
pub const PALETTE: [Rgb8; 10] = [
    Rgb8::new(220, 60, 60),   // red
    Rgb8::new(60, 60, 220),   // blue
    Rgb8::new(60, 180, 60),   // green
    Rgb8::new(220, 160, 60),  // orange
    Rgb8::new(160, 60, 220),  // purple
    Rgb8::new(60, 180, 180),  // cyan
    Rgb8::new(220, 60, 160),  // pink
    Rgb8::new(100, 150, 60),  // olive
    Rgb8::new(220, 120, 60),  // coral
    Rgb8::new(80, 80, 200),   // indigo
];

/// Injective mapping from the symbols of one task to palette colors.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(
    try_from = "BTreeMap<Symbol, Rgb8>",
    into = "BTreeMap<Symbol, Rgb8>"
)]
pub struct ColorAssignment {
    colors: BTreeMap<Symbol, Rgb8>,
}

impl ColorAssignment {
    /// Draw colors without replacement from [`PALETTE`], one per symbol in `symbols` order.
    ///
    /// Consumes exactly one shuffle of the palette from `rng`.
    pub fn draw(symbols: &[Symbol], rng: &mut dyn RngCore) -> TaskResult<Self> {
        if symbols.len() > PALETTE.len() {
            return Err(TaskError::PaletteExhausted {
                requested: symbols.len(),
                available: PALETTE.len(),
            });
        }
        let mut order = PALETTE;
        order.shuffle(rng);
        Self::from_pairs(symbols.iter().cloned().zip(order))
    }

    /// Build an assignment from explicit pairs, rejecting repeated symbols or colors.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Symbol, Rgb8)>) -> TaskResult<Self> {
        let mut colors = BTreeMap::new();
        for (symbol, color) in pairs {
            if colors.values().any(|c| *c == color) {
                return Err(TaskError::invalid_config(format!(
                    "color {color:?} assigned to more than one symbol"
                )));
            }
            if colors.insert(symbol.clone(), color).is_some() {
                return Err(TaskError::invalid_config(format!(
                    "symbol {symbol} assigned more than one color"
                )));
            }
        }
        Ok(Self { colors })
    }

    /// Color of `symbol`, if it belongs to the task.
    pub fn color_of(&self, symbol: &Symbol) -> Option<Rgb8> {
        self.colors.get(symbol).copied()
    }

    /// Number of assigned symbols.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Return `true` when nothing is assigned.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterate `(symbol, color)` pairs in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, Rgb8)> {
        self.colors.iter().map(|(s, c)| (s, *c))
    }
}

impl TryFrom<BTreeMap<Symbol, Rgb8>> for ColorAssignment {
    type Error = TaskError;

    fn try_from(colors: BTreeMap<Symbol, Rgb8>) -> TaskResult<Self> {
        Self::from_pairs(colors)
    }
}

impl From<ColorAssignment> for BTreeMap<Symbol, Rgb8> {
    fn from(assignment: ColorAssignment) -> Self {
        assignment.colors
    }
}

#[cfg(test)]
#[path = "../../tests/unit/task/palette.rs"]
mod tests;
