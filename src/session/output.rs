use std::path::{Path, PathBuf};

use anyhow::Context as _;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
use crate::encode::sink::{FrameSink, NullSink};
use crate::foundation::core::Fps;
use crate::foundation::error::TaskResult;
use crate::render::backend::FrameRgb;
use crate::session::generator::{SymbolInsertGenerator, TaskGenerator};
use crate::session::render_session::RenderStats;
use crate::task::instance::TaskInstance;
use crate::task::symbols::Symbol;

/// First-frame image file name.
pub const FIRST_FRAME_FILE: &str = "first_frame.png";
/// Final-frame image file name.
pub const FINAL_FRAME_FILE: &str = "final_frame.png";
/// Prompt file name.
pub const PROMPT_FILE: &str = "prompt.txt";
/// Ground-truth video file name.
pub const VIDEO_FILE: &str = "ground_truth.mp4";
/// Metadata file name.
pub const METADATA_FILE: &str = "metadata.json";

/// Stable id of sample `index`, e.g. `symbol_insert_00007`.
pub fn task_id(domain: &str, index: usize) -> String {
    format!("{domain}_{index:05}")
}

/// Directory of one sample: `{output_dir}/{domain}_task/{task_id}`.
pub fn sample_dir(output_dir: &Path, domain: &str, task_id: &str) -> PathBuf {
    output_dir.join(format!("{domain}_task")).join(task_id)
}

/// Contents of `metadata.json`.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SampleMetadata {
    /// Sample id.
    pub task_id: String,
    /// Task family.
    pub domain: String,
    /// Seed the sample's RNG was created from.
    pub seed: u64,
    /// The task.
    pub task: TaskInstance,
    /// Sequence after insertion.
    pub final_sequence: Vec<Symbol>,
    /// Prompt text.
    pub prompt: String,
    /// Frames in the animation.
    pub frame_count: u64,
    /// Video frame rate.
    pub fps: Fps,
    /// Animation duration in seconds.
    pub duration_secs: f64,
    /// Hex xxh3-64 of frame 0.
    pub first_frame_xxh3: String,
    /// Hex xxh3-64 of the last frame.
    pub final_frame_xxh3: String,
    /// Video file name when a video was written.
    pub video: Option<String>,
    /// Render statistics.
    pub stats: RenderStats,
}

/// Outcome of writing one sample.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleSummary {
    /// Sample position in the dataset.
    pub index: usize,
    /// Sample id.
    pub task_id: String,
    /// Sample directory.
    pub dir: PathBuf,
    /// `true` when `ground_truth.mp4` was written.
    pub video_written: bool,
    /// Hex xxh3-64 of the last frame.
    pub final_frame_xxh3: String,
}

/// Build, render and write sample `index` from `seed`.
///
/// `encode_video` selects the ffmpeg sink; otherwise frames are discarded after the endpoints are
/// captured. On failure the sample directory is removed, so no half-written sample remains.
pub fn write_sample(
    generator: &SymbolInsertGenerator,
    index: usize,
    seed: u64,
    encode_video: bool,
) -> TaskResult<SampleSummary> {
    let id = task_id(generator.domain(), index);
    let dir = sample_dir(&generator.config().output_dir, generator.domain(), &id);
    let sink: Box<dyn FrameSink> = if encode_video {
        Box::new(FfmpegSink::new(FfmpegSinkOpts::new(dir.join(VIDEO_FILE))))
    } else {
        Box::new(NullSink::new())
    };
    write_sample_with_sink(generator, index, seed, sink, encode_video)
}

#[tracing::instrument(skip(generator, sink), fields(domain = generator.domain()))]
pub(crate) fn write_sample_with_sink(
    generator: &SymbolInsertGenerator,
    index: usize,
    seed: u64,
    mut sink: Box<dyn FrameSink>,
    video_written: bool,
) -> TaskResult<SampleSummary> {
    let id = task_id(generator.domain(), index);
    let dir = sample_dir(&generator.config().output_dir, generator.domain(), &id);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("create sample dir '{}'", dir.display()))?;

    let result = fill_sample_dir(generator, &id, &dir, seed, sink.as_mut(), video_written);
    // Stops a still-running encoder before its directory goes away.
    drop(sink);

    match result {
        Ok(final_frame_xxh3) => {
            tracing::info!(task_id = %id, dir = %dir.display(), "wrote sample");
            Ok(SampleSummary {
                index,
                task_id: id,
                dir,
                video_written,
                final_frame_xxh3,
            })
        }
        Err(err) => {
            if let Err(rm) = std::fs::remove_dir_all(&dir) {
                tracing::warn!(dir = %dir.display(), error = %rm, "failed to remove partial sample");
            }
            Err(err)
        }
    }
}

/// Render into `sink` and write every sample file; returns the final-frame digest.
fn fill_sample_dir(
    generator: &SymbolInsertGenerator,
    id: &str,
    dir: &Path,
    seed: u64,
    sink: &mut dyn FrameSink,
    video_written: bool,
) -> TaskResult<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let task = generator.build_instance(&mut rng)?;
    let prompt = generator.build_prompt(&task);

    let artifacts = generator.render_frame_sequence(&task, sink)?;

    write_png(&dir.join(FIRST_FRAME_FILE), &artifacts.first_frame)?;
    write_png(&dir.join(FINAL_FRAME_FILE), &artifacts.final_frame)?;
    std::fs::write(dir.join(PROMPT_FILE), &prompt)
        .with_context(|| format!("write prompt in '{}'", dir.display()))?;

    let meta = SampleMetadata {
        task_id: id.to_owned(),
        domain: generator.domain().to_owned(),
        seed,
        final_sequence: task.final_sequence(),
        prompt,
        frame_count: generator.frame_count(),
        fps: generator.fps(),
        duration_secs: generator.schedule().duration_secs(generator.fps()),
        first_frame_xxh3: format!("{:016x}", artifacts.first_frame.digest()),
        final_frame_xxh3: format!("{:016x}", artifacts.final_frame.digest()),
        video: video_written.then(|| VIDEO_FILE.to_owned()),
        stats: artifacts.stats,
        task,
    };
    let json = serde_json::to_vec_pretty(&meta).context("serialize sample metadata")?;
    std::fs::write(dir.join(METADATA_FILE), json)
        .with_context(|| format!("write metadata in '{}'", dir.display()))?;
    Ok(meta.final_frame_xxh3)
}

/// Write `frame` as an RGB8 PNG, creating parent directories.
pub fn write_png(path: &Path, frame: &FrameRgb) -> TaskResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/session/output.rs"]
mod tests;
