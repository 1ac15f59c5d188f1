use crate::foundation::core::{Fps, FrameIndex, FrameRange};
use crate::foundation::error::{TaskError, TaskResult};
use crate::foundation::math::unit_progress;

/// Named animation segment, in playback order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AnimationPhase {
    /// Initial sequence at rest.
    HoldInitial,
    /// Inserted symbol fades in above its target slot.
    FadeIn,
    /// Inserted symbol drops into the row while later symbols shift right.
    SlideShift,
    /// Final sequence at rest.
    HoldFinal,
}

impl AnimationPhase {
    /// All phases in playback order.
    pub const ALL: [AnimationPhase; 4] = [
        AnimationPhase::HoldInitial,
        AnimationPhase::FadeIn,
        AnimationPhase::SlideShift,
        AnimationPhase::HoldFinal,
    ];

    /// Return `true` for the phases whose frames do not change with progress.
    pub fn is_static(self) -> bool {
        matches!(self, Self::HoldInitial | Self::HoldFinal)
    }
}

/// Frame budget per phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhaseFrames {
    /// Frames showing the initial sequence.
    pub hold_initial: u32,
    /// Frames fading the inserted symbol in.
    pub fade_in: u32,
    /// Frames sliding the inserted symbol into place.
    pub slide_shift: u32,
    /// Frames showing the final sequence.
    pub hold_final: u32,
}

impl Default for PhaseFrames {
    fn default() -> Self {
        Self {
            hold_initial: 5,
            fade_in: 8,
            slide_shift: 10,
            hold_final: 5,
        }
    }
}

impl PhaseFrames {
    /// Frame budget of `phase`.
    pub fn frames_for(&self, phase: AnimationPhase) -> u32 {
        match phase {
            AnimationPhase::HoldInitial => self.hold_initial,
            AnimationPhase::FadeIn => self.fade_in,
            AnimationPhase::SlideShift => self.slide_shift,
            AnimationPhase::HoldFinal => self.hold_final,
        }
    }

    /// Sum of all phase budgets.
    pub fn total(&self) -> u64 {
        AnimationPhase::ALL
            .iter()
            .map(|p| u64::from(self.frames_for(*p)))
            .sum()
    }
}

/// Phase and in-phase progress of one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseSample {
    /// Absolute frame index.
    pub frame: FrameIndex,
    /// Phase the frame belongs to.
    pub phase: AnimationPhase,
    /// Linear progress within the phase, in `[0, 1]`.
    pub progress: f64,
}

/// Maps frame indices to `(phase, progress)` from cumulative phase budgets.
///
/// A pure function of the index: any frame can be sampled without visiting earlier ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseSchedule {
    frames: PhaseFrames,
    total: u64,
}

impl PhaseSchedule {
    /// Build a schedule. At least one phase must have frames.
    pub fn new(frames: PhaseFrames) -> TaskResult<Self> {
        let total = frames.total();
        if total == 0 {
            return Err(TaskError::invalid_config(
                "animation phases must contain at least one frame",
            ));
        }
        Ok(Self { frames, total })
    }

    /// Per-phase budgets.
    pub fn frames(&self) -> PhaseFrames {
        self.frames
    }

    /// Total frame count (sum of phase budgets).
    pub fn total_frames(&self) -> u64 {
        self.total
    }

    /// Playback duration at `fps`.
    pub fn duration_secs(&self, fps: Fps) -> f64 {
        fps.frames_to_secs(self.total)
    }

    /// Full animation range `[0, total)`.
    pub fn range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(self.total),
        }
    }

    /// Frames covered by `phase` (empty when the phase has no budget).
    pub fn phase_range(&self, phase: AnimationPhase) -> FrameRange {
        let start: u64 = AnimationPhase::ALL
            .iter()
            .take_while(|p| **p != phase)
            .map(|p| u64::from(self.frames.frames_for(*p)))
            .sum();
        let len = u64::from(self.frames.frames_for(phase));
        FrameRange {
            start: FrameIndex(start),
            end: FrameIndex(start + len),
        }
    }

    /// Phase and progress of `frame`, or `None` past the end.
    pub fn sample(&self, frame: FrameIndex) -> Option<PhaseSample> {
        let mut start = 0u64;
        for phase in AnimationPhase::ALL {
            let len = u64::from(self.frames.frames_for(phase));
            if frame.0 < start + len {
                return Some(PhaseSample {
                    frame,
                    phase,
                    progress: unit_progress(frame.0 - start, len),
                });
            }
            start += len;
        }
        None
    }

    /// Samples of every frame in order. Restartable: each call yields a fresh iterator.
    pub fn samples(&self) -> impl Iterator<Item = PhaseSample> + '_ {
        self.range().iter().filter_map(|f| self.sample(f))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/phase.rs"]
mod tests;
