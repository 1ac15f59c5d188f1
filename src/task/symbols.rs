use std::fmt;

const SHAPES: &[&str] = &[
    "●", "▲", "■", "★", "◆", "♥", "◯", "△", "□", "☆", "◇", "♦", "▼", "▶", "◀",
];
const LETTERS: &[&str] = &[
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S",
    "T", "U", "V", "W", "X", "Y", "Z",
];
const NUMBERS: &[&str] = &["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
const MIXED: &[&str] = &[
    "●", "▲", "■", "★", "A", "B", "C", "1", "2", "3", "X", "Y", "Z",
];

/// Opaque glyph identifier drawn from a [`SymbolSet`].
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Wrap a glyph string.
    pub fn new(glyph: impl Into<String>) -> Self {
        Self(glyph.into())
    }

    /// The glyph text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Vector outline used to draw this symbol, or `None` when it is drawn from a font.
    pub fn shape(&self) -> Option<ShapeKind> {
        ShapeKind::from_glyph(&self.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Built-in symbol families.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum SymbolSet {
    /// Geometric shapes (15 symbols).
    #[default]
    Shapes,
    /// Upper-case Latin letters (26 symbols).
    Letters,
    /// Decimal digits (10 symbols).
    Numbers,
    /// Shapes, letters and digits (13 symbols).
    Mixed,
}

impl SymbolSet {
    fn glyphs(self) -> &'static [&'static str] {
        match self {
            Self::Shapes => SHAPES,
            Self::Letters => LETTERS,
            Self::Numbers => NUMBERS,
            Self::Mixed => MIXED,
        }
    }

    /// Members of the set in their canonical order.
    pub fn symbols(self) -> Vec<Symbol> {
        self.glyphs().iter().map(|g| Symbol::new(*g)).collect()
    }

    /// Number of distinct members.
    pub fn len(self) -> usize {
        self.glyphs().len()
    }

    /// Always `false`; every built-in set has members.
    pub fn is_empty(self) -> bool {
        self.glyphs().is_empty()
    }

    /// Return `true` when some member has no vector outline and needs a font.
    pub fn needs_font(self) -> bool {
        self.glyphs().iter().any(|g| ShapeKind::from_glyph(g).is_none())
    }
}

/// Vector outlines for the geometric symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// ●
    Circle,
    /// ◯
    CircleOutline,
    /// ▲
    TriangleUp,
    /// △
    TriangleUpOutline,
    /// ▼
    TriangleDown,
    /// ▶
    TriangleRight,
    /// ◀
    TriangleLeft,
    /// ■
    Square,
    /// □
    SquareOutline,
    /// ★
    Star,
    /// ☆
    StarOutline,
    /// ◆
    Diamond,
    /// ◇
    DiamondOutline,
    /// ♦ (narrower than ◆)
    Suit,
    /// ♥
    Heart,
}

impl ShapeKind {
    /// Classify a glyph string.
    pub fn from_glyph(glyph: &str) -> Option<Self> {
        Some(match glyph {
            "●" => Self::Circle,
            "◯" => Self::CircleOutline,
            "▲" => Self::TriangleUp,
            "△" => Self::TriangleUpOutline,
            "▼" => Self::TriangleDown,
            "▶" => Self::TriangleRight,
            "◀" => Self::TriangleLeft,
            "■" => Self::Square,
            "□" => Self::SquareOutline,
            "★" => Self::Star,
            "☆" => Self::StarOutline,
            "◆" => Self::Diamond,
            "◇" => Self::DiamondOutline,
            "♦" => Self::Suit,
            "♥" => Self::Heart,
            _ => return None,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/task/symbols.rs"]
mod tests;
