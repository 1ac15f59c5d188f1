use super::*;

#[test]
fn lerp_hits_endpoints_exactly() {
    let a = 123.456_f64;
    let b = -7.25_f64;
    assert_eq!(lerp(a, b, 0.0), a);
    assert_eq!(lerp(a, b, 1.0), b);
    assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
}

#[test]
fn lerp_point_interpolates_both_axes() {
    let p = lerp_point(Point::new(0.0, 100.0), Point::new(40.0, 60.0), 0.25);
    assert_eq!(p, Point::new(10.0, 90.0));
}

#[test]
fn unit_progress_spans_run() {
    assert_eq!(unit_progress(0, 8), 0.0);
    assert_eq!(unit_progress(7, 8), 1.0);
    assert_eq!(unit_progress(2, 5), 0.5);
}

#[test]
fn unit_progress_single_frame_is_zero() {
    assert_eq!(unit_progress(0, 1), 0.0);
    assert_eq!(unit_progress(0, 0), 0.0);
}
