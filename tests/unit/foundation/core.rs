use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.len_frames(), 3);
    assert_eq!(
        r.iter().collect::<Vec<_>>(),
        vec![FrameIndex(2), FrameIndex(3), FrameIndex(4)]
    );
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(3), FrameIndex(2)).is_err());
    assert!(FrameRange::new(FrameIndex(3), FrameIndex(3)).unwrap().is_empty());
}

#[test]
fn default_animation_lasts_two_point_eight_seconds() {
    let fps = Fps::new(10, 1).unwrap();
    assert!((fps.frames_to_secs(28) - 2.8).abs() < 1e-12);
    assert!((fps.frame_duration_secs() - 0.1).abs() < 1e-12);
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(10, 0).is_err());
}

#[test]
fn canvas_center_is_half_extent() {
    let c = Canvas {
        width: 800,
        height: 200,
    };
    assert_eq!(c.center(), Point::new(400.0, 100.0));
}
