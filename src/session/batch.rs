use rayon::prelude::*;

use crate::config::GeneratorConfig;
use crate::encode::ffmpeg::is_ffmpeg_on_path;
use crate::foundation::error::{TaskError, TaskResult};
use crate::session::generator::SymbolInsertGenerator;
use crate::session::output::{SampleSummary, write_sample};

/// Seed of sample `index` derived from the dataset's base seed (one splitmix64 step).
///
/// Each sample owns an independent RNG, so the dataset does not depend on scheduling order.
pub fn derive_seed(base_seed: u64, index: usize) -> u64 {
    let mut z = base_seed.wrapping_add((index as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Generate `config.num_samples` samples under `config.output_dir`.
///
/// Samples render in parallel; summaries are returned in index order.
#[tracing::instrument(skip(config), fields(samples = config.num_samples))]
pub fn generate_dataset(config: &GeneratorConfig) -> TaskResult<Vec<SampleSummary>> {
    let generator = SymbolInsertGenerator::new(config.clone())?;

    let base_seed = config.random_seed.unwrap_or_else(rand::random::<u64>);
    tracing::info!(base_seed, out = %config.output_dir.display(), "generating dataset");

    let encode_video = config.generate_videos && {
        let found = is_ffmpeg_on_path();
        if !found {
            tracing::warn!("ffmpeg not found on PATH; skipping ground_truth.mp4 output");
        }
        found
    };

    let run = || {
        (0..config.num_samples)
            .into_par_iter()
            .map(|i| write_sample(&generator, i, derive_seed(base_seed, i), encode_video))
            .collect::<TaskResult<Vec<_>>>()
    };

    let summaries = match config.threads {
        Some(n) => rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build()
            .map_err(|e| TaskError::invalid_config(format!("build rayon thread pool: {e}")))?
            .install(run)?,
        None => run()?,
    };

    tracing::info!(written = summaries.len(), "dataset complete");
    Ok(summaries)
}

#[cfg(test)]
#[path = "../../tests/unit/session/batch.rs"]
mod tests;
