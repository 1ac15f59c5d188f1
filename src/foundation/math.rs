use crate::foundation::core::Point;

/// Linear interpolation that returns `a` exactly at `t == 0` and `b` exactly at `t == 1`.
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

pub(crate) fn lerp_point(a: Point, b: Point, t: f64) -> Point {
    Point::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}

/// Linear position of `offset` within a run of `len` frames, in `[0, 1]`.
///
/// Single-frame (and empty) runs report 0.
pub(crate) fn unit_progress(offset: u64, len: u64) -> f64 {
    if len <= 1 {
        return 0.0;
    }
    (offset.min(len - 1) as f64) / ((len - 1) as f64)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
