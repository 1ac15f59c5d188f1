use super::*;
use crate::task::symbols::SymbolSet;
use kurbo::{PathEl, Shape};

fn subpaths(path: &BezPath) -> usize {
    path.elements()
        .iter()
        .filter(|el| matches!(el, PathEl::MoveTo(_)))
        .count()
}

#[test]
fn shape_outlines_fit_the_unit_box() {
    for symbol in SymbolSet::Shapes.symbols() {
        let kind = symbol.shape().unwrap();
        let path = shape_outline(kind);
        let bb = path.bounding_box();
        assert!(bb.width() > 0.5 && bb.height() > 0.5, "{symbol} too small");
        assert!(
            bb.x0 >= -1.0 - 1e-9 && bb.x1 <= 1.0 + 1e-9,
            "{symbol} x bounds {bb:?}"
        );
        assert!(
            bb.y0 >= -1.0 - 1e-9 && bb.y1 <= 1.0 + 1e-9,
            "{symbol} y bounds {bb:?}"
        );
    }
}

#[test]
fn outline_shapes_carry_an_inner_hole() {
    for kind in [
        ShapeKind::CircleOutline,
        ShapeKind::TriangleUpOutline,
        ShapeKind::SquareOutline,
        ShapeKind::StarOutline,
        ShapeKind::DiamondOutline,
    ] {
        assert_eq!(subpaths(&shape_outline(kind)), 2, "{kind:?}");
    }
    assert_eq!(subpaths(&shape_outline(ShapeKind::Square)), 1);
}

#[test]
fn filled_circle_has_positive_area_and_ring_less() {
    let disc = shape_outline(ShapeKind::Circle).area().abs();
    let ring = shape_outline(ShapeKind::CircleOutline).area().abs();
    assert!((disc - std::f64::consts::PI).abs() < 0.01);
    assert!(ring < disc && ring > 0.1);
}

#[test]
fn shapes_prepare_without_a_font() {
    let symbols = SymbolSet::Shapes.symbols();
    let book = GlyphBook::prepare(&symbols, None, 60.0).unwrap();
    assert_eq!(book.len(), symbols.len());
}

#[test]
fn text_symbols_require_a_font() {
    let symbols = [Symbol::new("●"), Symbol::new("A")];
    let err = GlyphBook::prepare(&symbols, None, 60.0)
        .err()
        .expect("letters cannot be prepared without a font");
    assert!(matches!(err, TaskError::Font(_)));
}

#[test]
fn missing_font_file_is_a_font_error() {
    let err = GlyphFont::from_path("target/definitely/missing/font.ttf").unwrap_err();
    assert!(matches!(err, TaskError::Font(_)));
}

#[test]
fn letters_shape_with_a_system_font_when_available() {
    let Ok(font) = GlyphFont::locate(None) else {
        return;
    };
    let symbols = SymbolSet::Numbers.symbols();
    let book = GlyphBook::prepare(&symbols, Some(&font), 60.0).unwrap();
    for (symbol, art) in book.into_entries() {
        let GlyphArt::Text(t) = art else {
            panic!("{symbol} should be text");
        };
        assert!(t.width > 0.0 && t.height > 0.0, "{symbol}");
    }
}
