use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::foundation::core::{BezPath, Point};
use crate::foundation::error::{TaskError, TaskResult};
use crate::task::symbols::{ShapeKind, Symbol};

/// Shape outlines cover this fraction of the symbol box.
pub(crate) const SHAPE_EXTENT: f64 = 0.8;

const KAPPA: f64 = 0.552_284_749_830_793_4;
const OUTLINE_INSET: f64 = 0.62;

/// Fonts tried, in order, when no explicit font path is configured.
pub const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Font bytes used to draw letter and digit symbols.
#[derive(Clone, Debug)]
pub struct GlyphFont {
    source: PathBuf,
    bytes: Arc<Vec<u8>>,
}

impl GlyphFont {
    /// Read a font file.
    pub fn from_path(path: impl AsRef<Path>) -> TaskResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| TaskError::font(format!("failed to read font '{}': {e}", path.display())))?;
        Ok(Self {
            source: path.to_path_buf(),
            bytes: Arc::new(bytes),
        })
    }

    /// Use `explicit` when given, otherwise the first readable [`SYSTEM_FONT_CANDIDATES`] entry.
    pub fn locate(explicit: Option<&Path>) -> TaskResult<Self> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }
        SYSTEM_FONT_CANDIDATES
            .iter()
            .map(Path::new)
            .find(|p| p.is_file())
            .ok_or_else(|| {
                TaskError::font(
                    "no usable system font found for letter/number symbols; set font_path",
                )
            })
            .and_then(|p| Self::from_path(p))
    }

    /// File the font was read from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub(crate) fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// A symbol shaped with Parley, ready to be drawn as a glyph run.
pub(crate) struct TextGlyph {
    pub(crate) layout: parley::Layout<()>,
    pub(crate) font: vello_cpu::peniko::FontData,
    pub(crate) width: f64,
    pub(crate) height: f64,
}

/// How one symbol is drawn.
pub(crate) enum GlyphArt {
    /// Outline in unit space `[-1, 1]²`, scaled to the symbol box at draw time.
    Shape(BezPath),
    /// Font glyphs laid out at the symbol size.
    Text(TextGlyph),
}

/// Prepared art for every symbol of one task.
pub(crate) struct GlyphBook {
    art: HashMap<Symbol, GlyphArt>,
}

impl GlyphBook {
    /// Prepare art for `symbols`. Text symbols require `font`.
    pub(crate) fn prepare<'a>(
        symbols: impl IntoIterator<Item = &'a Symbol>,
        font: Option<&GlyphFont>,
        symbol_size: f64,
    ) -> TaskResult<Self> {
        let mut engine = None::<TextLayoutEngine>;
        let mut art = HashMap::new();
        for symbol in symbols {
            if art.contains_key(symbol) {
                continue;
            }
            let prepared = match symbol.shape() {
                Some(kind) => GlyphArt::Shape(shape_outline(kind)),
                None => {
                    let font = font.ok_or_else(|| {
                        TaskError::font(format!("symbol {symbol} needs a font but none is loaded"))
                    })?;
                    let engine = engine.get_or_insert_with(TextLayoutEngine::new);
                    GlyphArt::Text(engine.shape_symbol(symbol.as_str(), font, symbol_size)?)
                }
            };
            art.insert(symbol.clone(), prepared);
        }
        Ok(Self { art })
    }

    pub(crate) fn len(&self) -> usize {
        self.art.len()
    }

    pub(crate) fn into_entries(self) -> impl Iterator<Item = (Symbol, GlyphArt)> {
        self.art.into_iter()
    }
}

/// Stateful helper for building Parley text layouts from raw font bytes.
struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    family: Option<String>,
}

impl TextLayoutEngine {
    fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            family: None,
        }
    }

    fn family_name(&mut self, font: &GlyphFont) -> TaskResult<String> {
        if let Some(name) = &self.family {
            return Ok(name.clone());
        }
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font.bytes().to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            TaskError::font(format!(
                "no font families registered from '{}'",
                font.source().display()
            ))
        })?;
        let name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| TaskError::font("registered font family has no name"))?
            .to_string();
        self.family = Some(name.clone());
        Ok(name)
    }

    fn shape_symbol(
        &mut self,
        text: &str,
        font: &GlyphFont,
        size_px: f64,
    ) -> TaskResult<TextGlyph> {
        let family_name = self.family_name(font)?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px as f32));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);

        let font_data =
            vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font.bytes().to_vec()), 0);
        Ok(TextGlyph {
            width: f64::from(layout.width()),
            height: f64::from(layout.height()),
            layout,
            font: font_data,
        })
    }
}

fn shape_outline(kind: ShapeKind) -> BezPath {
    let mut path = BezPath::new();
    match kind {
        ShapeKind::Circle => push_circle(&mut path, 1.0, false),
        ShapeKind::CircleOutline => {
            push_circle(&mut path, 1.0, false);
            push_circle(&mut path, OUTLINE_INSET + 0.1, true);
        }
        ShapeKind::TriangleUp => push_polygon(&mut path, &triangle_up(), 1.0, false),
        ShapeKind::TriangleUpOutline => {
            let pts = triangle_up();
            push_polygon(&mut path, &pts, 1.0, false);
            push_polygon(&mut path, &pts, OUTLINE_INSET - 0.12, true);
        }
        ShapeKind::TriangleDown => {
            let pts = triangle_up().map(|p| Point::new(p.x, -p.y));
            push_polygon(&mut path, &pts, 1.0, false);
        }
        ShapeKind::TriangleRight => {
            let pts = triangle_up().map(|p| Point::new(-p.y, p.x));
            push_polygon(&mut path, &pts, 1.0, false);
        }
        ShapeKind::TriangleLeft => {
            let pts = triangle_up().map(|p| Point::new(p.y, p.x));
            push_polygon(&mut path, &pts, 1.0, false);
        }
        ShapeKind::Square => push_polygon(&mut path, &square(), 1.0, false),
        ShapeKind::SquareOutline => {
            push_polygon(&mut path, &square(), 1.0, false);
            push_polygon(&mut path, &square(), OUTLINE_INSET + 0.12, true);
        }
        ShapeKind::Star => push_polygon(&mut path, &star(), 1.0, false),
        ShapeKind::StarOutline => {
            push_polygon(&mut path, &star(), 1.0, false);
            push_polygon(&mut path, &star(), OUTLINE_INSET - 0.05, true);
        }
        ShapeKind::Diamond => push_polygon(&mut path, &diamond(0.8), 1.0, false),
        ShapeKind::DiamondOutline => {
            push_polygon(&mut path, &diamond(0.8), 1.0, false);
            push_polygon(&mut path, &diamond(0.8), OUTLINE_INSET, true);
        }
        ShapeKind::Suit => push_polygon(&mut path, &diamond(0.6), 1.0, false),
        ShapeKind::Heart => push_heart(&mut path),
    }
    path
}

fn triangle_up() -> [Point; 3] {
    [
        Point::new(0.0, -0.95),
        Point::new(1.0, 0.8),
        Point::new(-1.0, 0.8),
    ]
}

fn square() -> [Point; 4] {
    [
        Point::new(-0.8, -0.8),
        Point::new(0.8, -0.8),
        Point::new(0.8, 0.8),
        Point::new(-0.8, 0.8),
    ]
}

fn diamond(half_width: f64) -> [Point; 4] {
    [
        Point::new(0.0, -1.0),
        Point::new(half_width, 0.0),
        Point::new(0.0, 1.0),
        Point::new(-half_width, 0.0),
    ]
}

fn star() -> [Point; 10] {
    std::array::from_fn(|i| {
        let r = if i % 2 == 0 { 1.0 } else { 0.42 };
        let a = -std::f64::consts::FRAC_PI_2 + (i as f64) * std::f64::consts::PI / 5.0;
        Point::new(r * a.cos(), r * a.sin() + 0.05)
    })
}

/// Append `pts` as a closed subpath scaled by `scale` about the polygon centroid.
///
/// `reverse` flips the winding so the subpath cuts a hole under the non-zero fill rule.
fn push_polygon(path: &mut BezPath, pts: &[Point], scale: f64, reverse: bool) {
    let n = pts.len() as f64;
    let c = pts
        .iter()
        .fold(Point::ZERO, |acc, p| Point::new(acc.x + p.x / n, acc.y + p.y / n));
    let at = |p: Point| c + (p - c) * scale;

    let mut ordered: Vec<Point> = pts.iter().map(|p| at(*p)).collect();
    if reverse {
        ordered.reverse();
    }
    let Some((first, rest)) = ordered.split_first() else {
        return;
    };
    path.move_to(*first);
    for p in rest {
        path.line_to(*p);
    }
    path.close_path();
}

fn push_circle(path: &mut BezPath, r: f64, reverse: bool) {
    let k = KAPPA * r;
    path.move_to((r, 0.0));
    if reverse {
        path.curve_to((r, -k), (k, -r), (0.0, -r));
        path.curve_to((-k, -r), (-r, -k), (-r, 0.0));
        path.curve_to((-r, k), (-k, r), (0.0, r));
        path.curve_to((k, r), (r, k), (r, 0.0));
    } else {
        path.curve_to((r, k), (k, r), (0.0, r));
        path.curve_to((-k, r), (-r, k), (-r, 0.0));
        path.curve_to((-r, -k), (-k, -r), (0.0, -r));
        path.curve_to((k, -r), (r, -k), (r, 0.0));
    }
    path.close_path();
}

fn push_heart(path: &mut BezPath) {
    path.move_to((0.0, 0.95));
    path.curve_to((-0.55, 0.55), (-1.0, 0.15), (-1.0, -0.35));
    path.curve_to((-1.0, -0.75), (-0.7, -0.95), (-0.45, -0.95));
    path.curve_to((-0.2, -0.95), (-0.05, -0.8), (0.0, -0.6));
    path.curve_to((0.05, -0.8), (0.2, -0.95), (0.45, -0.95));
    path.curve_to((0.7, -0.95), (1.0, -0.75), (1.0, -0.35));
    path.curve_to((1.0, 0.15), (0.55, 0.55), (0.0, 0.95));
    path.close_path();
}

#[cfg(test)]
#[path = "../../tests/unit/render/glyph.rs"]
mod tests;
