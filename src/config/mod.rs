//! Generator configuration.
//!
//! [`GeneratorConfig`] is the JSON-facing boundary object. Every field has a default, so an empty
//! object `{}` is a complete configuration; callers then override single fields (the CLI does so
//! from flags) and call [`GeneratorConfig::validate`] before generating anything.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::animation::phase::{PhaseFrames, PhaseSchedule};
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{TaskError, TaskResult};
use crate::layout::slots::RowGeometry;
use crate::task::instance::TaskBuilder;
use crate::task::palette::PALETTE;
use crate::task::symbols::SymbolSet;

/// Settings for generating a symbol-insertion dataset.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Task family name used in directory names and task ids.
    pub domain: String,
    /// Number of samples to generate.
    pub num_samples: usize,
    /// Base seed. `None` draws one from entropy.
    pub random_seed: Option<u64>,
    /// Root directory for generated samples.
    pub output_dir: PathBuf,
    /// Output frame size.
    pub canvas: Canvas,
    /// Encode `ground_truth.mp4` per sample.
    pub generate_videos: bool,
    /// Video frame rate (frames per second).
    pub video_fps: u32,
    /// Shortest initial sequence.
    pub min_sequence_length: usize,
    /// Longest initial sequence.
    pub max_sequence_length: usize,
    /// Symbol family to draw from.
    pub symbol_set: SymbolSet,
    /// Symbol box edge in pixels.
    pub symbol_size: u32,
    /// Gap between neighbouring symbols in pixels.
    pub spacing: u32,
    /// Height above the row where the inserted symbol appears. Defaults to `symbol_size`.
    pub lift_px: Option<u32>,
    /// Frames per animation phase.
    pub phases: PhaseFrames,
    /// Font used for letter and digit symbols.
    pub font_path: Option<PathBuf>,
    /// Worker threads for batch generation. `None` uses the global rayon pool.
    pub threads: Option<usize>,
    /// Reuse the previous raster for repeated frames of hold phases.
    pub static_frame_elision: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            domain: "symbol_insert".to_owned(),
            num_samples: 10,
            random_seed: None,
            output_dir: PathBuf::from("data/questions"),
            canvas: Canvas {
                width: 800,
                height: 200,
            },
            generate_videos: true,
            video_fps: 10,
            min_sequence_length: 4,
            max_sequence_length: 8,
            symbol_set: SymbolSet::Shapes,
            symbol_size: 60,
            spacing: 20,
            lift_px: None,
            phases: PhaseFrames::default(),
            font_path: None,
            threads: None,
            static_frame_elision: true,
        }
    }
}

impl GeneratorConfig {
    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> TaskResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| TaskError::invalid_config(format!("parse generator config JSON: {e}")))
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> TaskResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            TaskError::invalid_config(format!("open generator config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check every setting before anything is generated.
    pub fn validate(&self) -> TaskResult<()> {
        if self.domain.trim().is_empty() {
            return Err(TaskError::invalid_config("domain must not be empty"));
        }
        if self.min_sequence_length == 0 {
            return Err(TaskError::invalid_config("min_sequence_length must be >= 1"));
        }
        if self.min_sequence_length > self.max_sequence_length {
            return Err(TaskError::invalid_config(format!(
                "min_sequence_length ({}) must be <= max_sequence_length ({})",
                self.min_sequence_length, self.max_sequence_length
            )));
        }
        let max_raster = u32::from(u16::MAX);
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(TaskError::invalid_config("canvas width/height must be > 0"));
        }
        if self.canvas.width > max_raster || self.canvas.height > max_raster {
            return Err(TaskError::invalid_config(format!(
                "canvas {}x{} exceeds the {max_raster}px raster limit",
                self.canvas.width, self.canvas.height
            )));
        }
        if self.generate_videos
            && (!self.canvas.width.is_multiple_of(2) || !self.canvas.height.is_multiple_of(2))
        {
            return Err(TaskError::invalid_config(format!(
                "canvas {}x{} must have even dimensions when generate_videos is set",
                self.canvas.width, self.canvas.height
            )));
        }
        if self.video_fps == 0 {
            return Err(TaskError::invalid_config("video_fps must be > 0"));
        }
        if self.threads == Some(0) {
            return Err(TaskError::invalid_config("threads must be > 0 when set"));
        }

        let geometry = self.geometry()?;
        self.schedule()?;

        let needed = self.max_sequence_length + 1;
        if self.symbol_set.len() < needed {
            return Err(TaskError::InsufficientSymbols {
                requested: needed,
                available: self.symbol_set.len(),
            });
        }
        if needed > PALETTE.len() {
            return Err(TaskError::PaletteExhausted {
                requested: needed,
                available: PALETTE.len(),
            });
        }

        if !geometry.fits(needed) {
            tracing::warn!(
                symbols = needed,
                row_width = geometry.row_width(needed),
                canvas_width = self.canvas.width,
                "longest row overflows the canvas; edge symbols will be clipped"
            );
        }
        Ok(())
    }

    /// Phase schedule for every sample.
    pub fn schedule(&self) -> TaskResult<PhaseSchedule> {
        PhaseSchedule::new(self.phases)
    }

    /// Row geometry for every sample.
    pub fn geometry(&self) -> TaskResult<RowGeometry> {
        RowGeometry::new(self.canvas, self.symbol_size, self.spacing)
    }

    /// Video frame rate.
    pub fn fps(&self) -> TaskResult<Fps> {
        Fps::new(self.video_fps, 1)
    }

    /// Effective lift of the inserted symbol in pixels.
    pub fn lift_px(&self) -> f64 {
        f64::from(self.lift_px.unwrap_or(self.symbol_size))
    }

    /// Instance builder for the configured set and length bounds.
    pub fn builder(&self) -> TaskResult<TaskBuilder> {
        TaskBuilder::for_set(
            self.symbol_set,
            self.min_sequence_length,
            self.max_sequence_length,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/mod.rs"]
mod tests;
