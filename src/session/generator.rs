use rand::RngCore;

use crate::animation::phase::PhaseSchedule;
use crate::config::GeneratorConfig;
use crate::encode::sink::FrameSink;
use crate::foundation::core::Fps;
use crate::foundation::error::TaskResult;
use crate::layout::slots::RowGeometry;
use crate::render::glyph::GlyphFont;
use crate::render::synth::FrameSynthesizer;
use crate::session::render_session::{AnimationArtifacts, AnimationSession, AnimationSessionOpts};
use crate::task::instance::{TaskBuilder, TaskInstance};
use crate::task::prompt::insertion_prompt;

/// Contract shared by task families that produce an animated ground truth.
pub trait TaskGenerator {
    /// Task value produced per sample.
    type Instance;

    /// Task family name.
    fn domain(&self) -> &str;

    /// Sample one task from `rng`.
    fn build_instance(&self, rng: &mut dyn RngCore) -> TaskResult<Self::Instance>;

    /// Frames in every animation.
    fn frame_count(&self) -> u64;

    /// Stream the animation of `instance` into `sink`.
    fn render_frame_sequence(
        &self,
        instance: &Self::Instance,
        sink: &mut dyn FrameSink,
    ) -> TaskResult<AnimationArtifacts>;

    /// Natural-language instruction for `instance`.
    fn build_prompt(&self, instance: &Self::Instance) -> String;
}

/// [`TaskGenerator`] for the symbol-insertion task.
///
/// Validates the configuration and loads the glyph font once; each sample then only pays for
/// instance sampling and rasterization.
#[derive(Clone, Debug)]
pub struct SymbolInsertGenerator {
    config: GeneratorConfig,
    builder: TaskBuilder,
    geometry: RowGeometry,
    schedule: PhaseSchedule,
    fps: Fps,
    font: Option<GlyphFont>,
}

impl SymbolInsertGenerator {
    /// Validate `config` and prepare shared resources.
    pub fn new(config: GeneratorConfig) -> TaskResult<Self> {
        config.validate()?;
        let font = if config.symbol_set.needs_font() {
            let font = GlyphFont::locate(config.font_path.as_deref())?;
            tracing::debug!(font = %font.source().display(), "loaded glyph font");
            Some(font)
        } else {
            None
        };
        Ok(Self {
            builder: config.builder()?,
            geometry: config.geometry()?,
            schedule: config.schedule()?,
            fps: config.fps()?,
            font,
            config,
        })
    }

    /// Configuration the generator was built from.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Video frame rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Phase schedule shared by every sample.
    pub fn schedule(&self) -> &PhaseSchedule {
        &self.schedule
    }

    /// Build the render session of one task.
    pub fn session(&self, task: TaskInstance) -> TaskResult<AnimationSession> {
        let synth = FrameSynthesizer::new(
            task,
            self.geometry,
            self.config.lift_px(),
            self.font.as_ref(),
        )?;
        Ok(AnimationSession::new(
            synth,
            self.schedule,
            self.fps,
            AnimationSessionOpts {
                static_frame_elision: self.config.static_frame_elision,
            },
        ))
    }
}

impl TaskGenerator for SymbolInsertGenerator {
    type Instance = TaskInstance;

    fn domain(&self) -> &str {
        &self.config.domain
    }

    fn build_instance(&self, rng: &mut dyn RngCore) -> TaskResult<TaskInstance> {
        self.builder.build(rng)
    }

    fn frame_count(&self) -> u64 {
        self.schedule.total_frames()
    }

    fn render_frame_sequence(
        &self,
        instance: &TaskInstance,
        sink: &mut dyn FrameSink,
    ) -> TaskResult<AnimationArtifacts> {
        self.session(instance.clone())?.render_animation(sink)
    }

    fn build_prompt(&self, instance: &TaskInstance) -> String {
        insertion_prompt(instance)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/generator.rs"]
mod tests;
