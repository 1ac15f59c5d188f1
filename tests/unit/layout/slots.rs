use super::*;

fn geom() -> RowGeometry {
    RowGeometry::new(
        Canvas {
            width: 800,
            height: 200,
        },
        60,
        20,
    )
    .unwrap()
}

#[test]
fn row_width_counts_gaps_between_symbols() {
    let g = geom();
    assert_eq!(g.row_width(0), 0.0);
    assert_eq!(g.row_width(1), 60.0);
    assert_eq!(g.row_width(4), 4.0 * 60.0 + 3.0 * 20.0);
    assert_eq!(g.pitch(), 80.0);
}

#[test]
fn four_slots_follow_closed_form() {
    let pts = geom().slot_centers(4);
    // row width 300 => x0 = 250
    let xs: Vec<f64> = pts.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![280.0, 360.0, 440.0, 520.0]);
    assert!(pts.iter().all(|p| p.y == 100.0));
}

#[test]
fn slots_are_symmetric_and_strictly_increasing() {
    let g = geom();
    for count in 1..=12 {
        let pts = g.slot_centers(count);
        assert_eq!(pts.len(), count);
        for w in pts.windows(2) {
            assert!(w[1].x > w[0].x);
            assert!((w[1].x - w[0].x - g.pitch()).abs() < 1e-9);
        }
        for i in 0..count {
            let mirrored = pts[count - 1 - i].x;
            assert!((pts[i].x + mirrored - 800.0).abs() < 1e-9, "count={count} i={i}");
        }
    }
}

#[test]
fn empty_row_has_no_slots() {
    assert!(geom().slot_centers(0).is_empty());
}

#[test]
fn overflowing_rows_are_not_clipped() {
    let g = geom();
    assert!(!g.fits(11));
    let pts = g.slot_centers(11);
    assert!(pts[0].x < 30.0);
    assert!(pts[10].x > 770.0);
    assert!((pts[0].x + pts[10].x - 800.0).abs() < 1e-9);
}

#[test]
fn geometry_rejects_zero_sizes() {
    let canvas = Canvas {
        width: 800,
        height: 200,
    };
    assert!(RowGeometry::new(canvas, 0, 20).is_err());
    assert!(
        RowGeometry::new(
            Canvas {
                width: 0,
                height: 200
            },
            60,
            20
        )
        .is_err()
    );
}
