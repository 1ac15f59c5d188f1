use crate::animation::phase::AnimationPhase;
use crate::foundation::error::TaskResult;
use crate::layout::slots::RowGeometry;
use crate::render::backend::FrameRgb;
use crate::render::cpu::CpuPainter;
use crate::render::glyph::{GlyphBook, GlyphFont};
use crate::render::scene::{SymbolPlacement, compose_scene};
use crate::task::instance::TaskInstance;

/// Produces the pixel frame for any `(phase, progress)` of one task.
///
/// Frames are recomputed from the task and geometry alone, with no state carried between calls,
/// so frames may be rendered in any order or in parallel.
pub struct FrameSynthesizer {
    task: TaskInstance,
    geometry: RowGeometry,
    lift_px: f64,
    painter: CpuPainter,
}

impl FrameSynthesizer {
    /// Prepare glyph art for every symbol of `task`.
    ///
    /// `font` is only consulted for symbols that are not vector shapes; a missing font for such a
    /// symbol is a [`TaskError::Font`](crate::TaskError::Font).
    pub fn new(
        task: TaskInstance,
        geometry: RowGeometry,
        lift_px: f64,
        font: Option<&GlyphFont>,
    ) -> TaskResult<Self> {
        let book = GlyphBook::prepare(
            task.initial().iter().chain(std::iter::once(task.inserted())),
            font,
            geometry.symbol_size(),
        )?;
        tracing::debug!(glyphs = book.len(), "prepared glyph book");
        let painter = CpuPainter::new(geometry.canvas(), geometry.symbol_size(), book)?;
        Ok(Self {
            task,
            geometry,
            lift_px,
            painter,
        })
    }

    /// Task being animated.
    pub fn task(&self) -> &TaskInstance {
        &self.task
    }

    /// Row geometry shared by every frame.
    pub fn geometry(&self) -> &RowGeometry {
        &self.geometry
    }

    /// Placements drawn for `(phase, progress)`.
    pub fn scene(&self, phase: AnimationPhase, progress: f64) -> Vec<SymbolPlacement> {
        compose_scene(&self.task, &self.geometry, self.lift_px, phase, progress)
    }

    /// Render the frame for `(phase, progress)`.
    pub fn render(&self, phase: AnimationPhase, progress: f64) -> FrameRgb {
        self.painter.paint(&self.scene(phase, progress))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/synth.rs"]
mod tests;
