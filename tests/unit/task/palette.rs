use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeSet;

fn syms(glyphs: &[&str]) -> Vec<Symbol> {
    glyphs.iter().map(|g| Symbol::new(*g)).collect()
}

#[test]
fn palette_colors_are_distinct() {
    let unique: BTreeSet<Rgb8> = PALETTE.iter().copied().collect();
    assert_eq!(unique.len(), PALETTE.len());
    assert!(!unique.contains(&Rgb8::WHITE));
}

#[test]
fn draw_is_injective_and_covers_all_symbols() {
    let symbols = syms(&["●", "▲", "■", "★", "◆"]);
    let mut rng = StdRng::seed_from_u64(3);
    let colors = ColorAssignment::draw(&symbols, &mut rng).unwrap();
    assert_eq!(colors.len(), 5);
    let used: BTreeSet<Rgb8> = symbols.iter().map(|s| colors.color_of(s).unwrap()).collect();
    assert_eq!(used.len(), 5);
    assert!(used.iter().all(|c| PALETTE.contains(c)));
}

#[test]
fn draw_is_deterministic_per_seed() {
    let symbols = syms(&["A", "B", "C"]);
    let a = ColorAssignment::draw(&symbols, &mut StdRng::seed_from_u64(11)).unwrap();
    let b = ColorAssignment::draw(&symbols, &mut StdRng::seed_from_u64(11)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn draw_fails_when_palette_is_too_small() {
    let symbols = crate::task::symbols::SymbolSet::Letters.symbols();
    let err = ColorAssignment::draw(&symbols[..11], &mut StdRng::seed_from_u64(0)).unwrap_err();
    assert!(matches!(
        err,
        TaskError::PaletteExhausted {
            requested: 11,
            available: 10
        }
    ));
}

#[test]
fn from_pairs_rejects_shared_colors() {
    let red = PALETTE[0];
    let err = ColorAssignment::from_pairs([(Symbol::new("A"), red), (Symbol::new("B"), red)])
        .unwrap_err();
    assert!(matches!(err, TaskError::InvalidConfiguration(_)));
}
