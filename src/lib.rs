//! Symbol-insert generates visual-reasoning tasks about inserting a symbol into a sequence.
//!
//! Each sample is a row of distinct colored symbols, one new symbol and a 1-based insertion
//! position. The crate renders the task's first and final frames, a phased ground-truth
//! animation and a text prompt:
//!
//! - Configure a [`GeneratorConfig`] (JSON or code) and build a [`SymbolInsertGenerator`]
//! - Sample a [`TaskInstance`] and stream its animation into a [`FrameSink`]
//! - Or write a whole dataset with [`generate_dataset`]
//!
//! Everything is deterministic given a seed: the same seed yields the same instance and the same
//! frame bytes.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod foundation;

pub(crate) mod animation;
/// Generator configuration.
pub mod config;
/// Frame sinks.
pub mod encode;
pub(crate) mod layout;
/// Scene composition and CPU rasterization.
pub mod render;
/// Animation sessions, generators and dataset output.
pub mod session;
pub(crate) mod task;

pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Fps, FrameIndex, FrameRange, Point, Rgb8, Vec2,
};
pub use crate::foundation::error::{TaskError, TaskResult};

pub use crate::animation::phase::{AnimationPhase, PhaseFrames, PhaseSample, PhaseSchedule};
pub use crate::config::GeneratorConfig;
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, ensure_parent_dir, is_ffmpeg_on_path};
pub use crate::encode::sink::{FrameSink, InMemorySink, NullSink, SinkConfig};
pub use crate::layout::slots::RowGeometry;
pub use crate::render::backend::FrameRgb;
pub use crate::render::glyph::{GlyphFont, SYSTEM_FONT_CANDIDATES};
pub use crate::render::scene::{SymbolPlacement, compose_scene};
pub use crate::render::synth::FrameSynthesizer;
pub use crate::session::batch::{derive_seed, generate_dataset};
pub use crate::session::generator::{SymbolInsertGenerator, TaskGenerator};
pub use crate::session::output::{
    FINAL_FRAME_FILE, FIRST_FRAME_FILE, METADATA_FILE, PROMPT_FILE, SampleMetadata,
    SampleSummary, VIDEO_FILE, sample_dir, task_id, write_png, write_sample,
};
pub use crate::session::render_session::{
    AnimationArtifacts, AnimationSession, AnimationSessionOpts, RenderStats,
};
pub use crate::task::instance::{TaskBuilder, TaskInstance};
pub use crate::task::palette::{ColorAssignment, PALETTE};
pub use crate::task::prompt::{ANIMATION_SUFFIX, insertion_prompt};
pub use crate::task::symbols::{ShapeKind, Symbol, SymbolSet};
