use crate::foundation::core::{Canvas, Point};
use crate::foundation::error::{TaskError, TaskResult};

/// Geometry of a single horizontal row of equally sized symbols.
///
/// Slot centers depend only on the slot count and this geometry, never on which symbol occupies
/// a slot, so any frame can recompute them from scratch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowGeometry {
    canvas: Canvas,
    symbol_size: f64,
    spacing: f64,
}

impl RowGeometry {
    /// Validate and build a row geometry. `spacing` is the gap between neighbouring symbols.
    pub fn new(canvas: Canvas, symbol_size: u32, spacing: u32) -> TaskResult<Self> {
        if canvas.width == 0 || canvas.height == 0 {
            return Err(TaskError::invalid_config("canvas width/height must be > 0"));
        }
        if symbol_size == 0 {
            return Err(TaskError::invalid_config("symbol_size must be > 0"));
        }
        Ok(Self {
            canvas,
            symbol_size: f64::from(symbol_size),
            spacing: f64::from(spacing),
        })
    }

    /// Canvas the row is centered in.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Symbol edge length in pixels.
    pub fn symbol_size(&self) -> f64 {
        self.symbol_size
    }

    /// Distance between neighbouring slot centers.
    pub fn pitch(&self) -> f64 {
        self.symbol_size + self.spacing
    }

    /// Width of a row of `count` symbols.
    pub fn row_width(&self, count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }
        (count as f64) * self.symbol_size + ((count - 1) as f64) * self.spacing
    }

    /// Center of slot `slot` (0-based) in a row of `count` symbols.
    ///
    /// Rows wider than the canvas are not clipped or scaled; slots simply overflow.
    pub fn slot_center(&self, count: usize, slot: usize) -> Point {
        let canvas_w = f64::from(self.canvas.width);
        let x0 = (canvas_w - self.row_width(count)) / 2.0;
        Point::new(
            x0 + (slot as f64) * self.pitch() + self.symbol_size / 2.0,
            f64::from(self.canvas.height) / 2.0,
        )
    }

    /// All slot centers of a row of `count` symbols, left to right.
    pub fn slot_centers(&self, count: usize) -> Vec<Point> {
        (0..count).map(|slot| self.slot_center(count, slot)).collect()
    }

    /// Return `true` when a row of `count` symbols fits inside the canvas.
    pub fn fits(&self, count: usize) -> bool {
        self.row_width(count) <= f64::from(self.canvas.width)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/slots.rs"]
mod tests;
