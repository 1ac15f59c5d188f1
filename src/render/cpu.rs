use std::collections::HashMap;

use crate::foundation::core::{Affine, BezPath, Canvas, Rgb8, Vec2};
use crate::foundation::error::{TaskError, TaskResult};
use crate::render::backend::FrameRgb;
use crate::render::glyph::{GlyphArt, GlyphBook, SHAPE_EXTENT, TextGlyph};
use crate::render::scene::SymbolPlacement;
use crate::task::symbols::Symbol;

enum PaintGlyph {
    Shape(vello_cpu::kurbo::BezPath),
    Text(TextGlyph),
}

/// CPU painter powered by `vello_cpu`.
///
/// Holds prepared art for one task's symbols and rasterizes placements onto a fresh white canvas
/// per call. Painting has no failure modes once the painter is built.
pub(crate) struct CpuPainter {
    width: u16,
    height: u16,
    symbol_size: f64,
    glyphs: HashMap<Symbol, PaintGlyph>,
}

impl CpuPainter {
    pub(crate) fn new(canvas: Canvas, symbol_size: f64, book: GlyphBook) -> TaskResult<Self> {
        let width = u16::try_from(canvas.width).map_err(|_| {
            TaskError::invalid_config(format!("canvas width {} exceeds u16", canvas.width))
        })?;
        let height = u16::try_from(canvas.height).map_err(|_| {
            TaskError::invalid_config(format!("canvas height {} exceeds u16", canvas.height))
        })?;
        if width == 0 || height == 0 {
            return Err(TaskError::invalid_config("canvas width/height must be > 0"));
        }

        let glyphs = book
            .into_entries()
            .map(|(symbol, art)| {
                let paint = match art {
                    GlyphArt::Shape(path) => PaintGlyph::Shape(bezpath_to_cpu(&path)),
                    GlyphArt::Text(text) => PaintGlyph::Text(text),
                };
                (symbol, paint)
            })
            .collect();

        Ok(Self {
            width,
            height,
            symbol_size,
            glyphs,
        })
    }

    /// Rasterize `placements` in order over an opaque white background.
    pub(crate) fn paint(&self, placements: &[SymbolPlacement]) -> FrameRgb {
        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);

        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(to_cpu_color(Rgb8::WHITE));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));

        for placement in placements {
            self.draw_symbol(placement, &mut ctx);
        }

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        ctx.render_to_pixmap(&mut pixmap);
        FrameRgb::from_opaque_rgba8(
            u32::from(self.width),
            u32::from(self.height),
            pixmap.data_as_u8_slice(),
        )
    }

    fn draw_symbol(&self, placement: &SymbolPlacement, ctx: &mut vello_cpu::RenderContext) {
        let opacity = placement.opacity.clamp(0.0, 1.0);
        if opacity <= 0.0 {
            return;
        }
        let Some(glyph) = self.glyphs.get(&placement.symbol) else {
            tracing::warn!(symbol = %placement.symbol, "no prepared glyph; skipping");
            return;
        };

        ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(to_cpu_color(placement.color));

        match glyph {
            PaintGlyph::Shape(path) => {
                let half = self.symbol_size * SHAPE_EXTENT / 2.0;
                let tr = Affine::translate(placement.center.to_vec2()) * Affine::scale(half);
                ctx.set_transform(affine_to_cpu(tr));
                if opacity < 1.0 {
                    ctx.push_opacity_layer(opacity);
                }
                ctx.fill_path(path);
                if opacity < 1.0 {
                    ctx.pop_layer();
                }
            }
            PaintGlyph::Text(t) => {
                let origin = placement.center.to_vec2() - Vec2::new(t.width / 2.0, t.height / 2.0);
                ctx.set_transform(affine_to_cpu(Affine::translate(origin)));
                if opacity < 1.0 {
                    ctx.push_opacity_layer(opacity);
                }
                for line in t.layout.lines() {
                    for item in line.items() {
                        let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                            continue;
                        };
                        let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                            id: g.id,
                            x: g.x,
                            y: g.y,
                        });
                        ctx.glyph_run(&t.font)
                            .font_size(run.run().font_size())
                            .fill_glyphs(glyphs);
                    }
                }
                if opacity < 1.0 {
                    ctx.pop_layer();
                }
            }
        }
    }
}

fn to_cpu_color(c: Rgb8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, 255)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
