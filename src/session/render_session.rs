use crate::animation::phase::{AnimationPhase, PhaseSchedule};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{TaskError, TaskResult};
use crate::render::backend::FrameRgb;
use crate::render::synth::FrameSynthesizer;

/// Options controlling [`AnimationSession`] rendering.
#[derive(Clone, Copy, Debug)]
pub struct AnimationSessionOpts {
    /// Re-emit the previous raster for repeated frames of static phases.
    pub static_frame_elision: bool,
}

impl Default for AnimationSessionOpts {
    fn default() -> Self {
        Self {
            static_frame_elision: true,
        }
    }
}

/// Animation render statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct RenderStats {
    /// Frames in the animation.
    pub frames_total: u64,
    /// Frames actually rasterized.
    pub frames_rendered: u64,
    /// Frames re-emitted from the previous raster.
    pub frames_elided: u64,
}

/// Endpoints captured while streaming an animation.
#[derive(Clone, Debug)]
pub struct AnimationArtifacts {
    /// Frame 0.
    pub first_frame: FrameRgb,
    /// Last frame.
    pub final_frame: FrameRgb,
    /// Render statistics.
    pub stats: RenderStats,
}

/// Drives a [`PhaseSchedule`] through a [`FrameSynthesizer`] for one task.
pub struct AnimationSession {
    synth: FrameSynthesizer,
    schedule: PhaseSchedule,
    fps: Fps,
    opts: AnimationSessionOpts,
}

impl AnimationSession {
    /// Create a session.
    pub fn new(
        synth: FrameSynthesizer,
        schedule: PhaseSchedule,
        fps: Fps,
        opts: AnimationSessionOpts,
    ) -> Self {
        Self {
            synth,
            schedule,
            fps,
            opts,
        }
    }

    /// Synthesizer used for every frame.
    pub fn synth(&self) -> &FrameSynthesizer {
        &self.synth
    }

    /// Phase schedule of the animation.
    pub fn schedule(&self) -> &PhaseSchedule {
        &self.schedule
    }

    /// Render a single frame.
    pub fn render_frame(&self, frame: FrameIndex) -> TaskResult<FrameRgb> {
        let sample = self.schedule.sample(frame).ok_or_else(|| {
            TaskError::invalid_config(format!(
                "frame {} is outside the animation (0..{})",
                frame.0,
                self.schedule.total_frames()
            ))
        })?;
        Ok(self.synth.render(sample.phase, sample.progress))
    }

    /// Render every frame in order into `sink` and return the endpoints.
    ///
    /// The sink sees `begin`, one `push_frame` per index `0..total` and `end`, in that order.
    #[tracing::instrument(skip(self, sink), fields(frames = self.schedule.total_frames()))]
    pub fn render_animation(&self, sink: &mut dyn FrameSink) -> TaskResult<AnimationArtifacts> {
        let canvas = self.synth.geometry().canvas();
        sink.begin(SinkConfig {
            width: canvas.width,
            height: canvas.height,
            fps: self.fps,
        })?;

        let mut stats = RenderStats {
            frames_total: self.schedule.total_frames(),
            ..RenderStats::default()
        };
        let mut first: Option<FrameRgb> = None;
        let mut prev: Option<(AnimationPhase, FrameRgb)> = None;

        for sample in self.schedule.samples() {
            let reuse = self.opts.static_frame_elision
                && sample.phase.is_static()
                && prev.as_ref().is_some_and(|(phase, _)| *phase == sample.phase);

            if reuse {
                stats.frames_elided += 1;
            } else {
                if prev.as_ref().is_none_or(|(phase, _)| *phase != sample.phase) {
                    tracing::debug!(
                        phase = ?sample.phase,
                        start = sample.frame.0,
                        "entering phase"
                    );
                }
                let frame = self.synth.render(sample.phase, sample.progress);
                stats.frames_rendered += 1;
                prev = Some((sample.phase, frame));
            }

            let Some((_, frame)) = prev.as_ref() else {
                continue;
            };
            sink.push_frame(sample.frame, frame)?;
            if first.is_none() {
                first = Some(frame.clone());
            }
        }

        sink.end()?;

        let first_frame = first.ok_or_else(|| TaskError::invalid_config("animation has no frames"))?;
        let final_frame = prev
            .map(|(_, f)| f)
            .ok_or_else(|| TaskError::invalid_config("animation has no frames"))?;
        Ok(AnimationArtifacts {
            first_frame,
            final_frame,
            stats,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/render_session.rs"]
mod tests;
