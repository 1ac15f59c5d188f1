use crate::animation::phase::AnimationPhase;
use crate::foundation::core::{Point, Rgb8, Vec2};
use crate::foundation::math::lerp_point;
use crate::layout::slots::RowGeometry;
use crate::task::instance::TaskInstance;
use crate::task::symbols::Symbol;

/// One symbol as drawn in one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct SymbolPlacement {
    /// Symbol to draw.
    pub symbol: Symbol,
    /// Center of the glyph box in canvas pixels.
    pub center: Point,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
    /// Fill color.
    pub color: Rgb8,
}

/// Compute every visible symbol's placement for `(phase, progress)`.
///
/// Original symbols come first in sequence order, the inserted symbol (when visible) last, so
/// draw order is the same in every phase. `lift_px` is how far above the row the inserted symbol
/// appears before it drops in.
pub fn compose_scene(
    task: &TaskInstance,
    geometry: &RowGeometry,
    lift_px: f64,
    phase: AnimationPhase,
    progress: f64,
) -> Vec<SymbolPlacement> {
    let t = progress.clamp(0.0, 1.0);
    let n = task.len();
    let before = geometry.slot_centers(n);
    let after = geometry.slot_centers(n + 1);

    let target = after[task.insertion_slot()];
    let lifted = target - Vec2::new(0.0, lift_px);

    let mut out = Vec::with_capacity(n + 1);
    for (i, symbol) in task.initial().iter().enumerate() {
        let from = before[i];
        let to = after[task.final_slot_of(i)];
        let center = match phase {
            AnimationPhase::HoldInitial | AnimationPhase::FadeIn => from,
            AnimationPhase::SlideShift => lerp_point(from, to, t),
            AnimationPhase::HoldFinal => to,
        };
        out.push(placement(task, symbol, center, 1.0));
    }

    let inserted = match phase {
        AnimationPhase::HoldInitial => None,
        AnimationPhase::FadeIn => Some((lifted, t as f32)),
        AnimationPhase::SlideShift => Some((lerp_point(lifted, target, t), 1.0)),
        AnimationPhase::HoldFinal => Some((target, 1.0)),
    };
    if let Some((center, opacity)) = inserted {
        out.push(placement(task, task.inserted(), center, opacity));
    }
    out
}

fn placement(task: &TaskInstance, symbol: &Symbol, center: Point, opacity: f32) -> SymbolPlacement {
    SymbolPlacement {
        symbol: symbol.clone(),
        center,
        opacity,
        // `TaskInstance::new` guarantees every task symbol has a color.
        color: task.colors().color_of(symbol).unwrap_or(Rgb8::new(0, 0, 0)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
