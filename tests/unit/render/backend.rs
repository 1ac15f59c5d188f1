use super::*;

fn frame() -> FrameRgb {
    FrameRgb::from_opaque_rgba8(
        2,
        1,
        &[10, 20, 30, 255, 40, 50, 60, 255],
    )
}

#[test]
fn alpha_is_dropped_in_order() {
    let f = frame();
    assert_eq!(f.data, vec![10, 20, 30, 40, 50, 60]);
    assert_eq!(f.pixel(1, 0), Some([40, 50, 60]));
    assert_eq!(f.pixel(2, 0), None);
    assert_eq!(f.pixel(0, 1), None);
}

#[test]
fn digest_tracks_content() {
    let a = frame();
    let mut b = frame();
    assert_eq!(a.digest(), b.digest());
    b.data[0] = 11;
    assert_ne!(a.digest(), b.digest());
}

#[test]
fn image_view_has_frame_dimensions() {
    let img = frame().to_image().unwrap();
    assert_eq!(img.dimensions(), (2, 1));
    assert_eq!(img.get_pixel(0, 0).0, [10, 20, 30]);
}
