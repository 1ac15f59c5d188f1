use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use symbol_insert::{
    FrameIndex, GeneratorConfig, SymbolInsertGenerator, SymbolSet, TaskGenerator, derive_seed,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "symbol-insert", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a dataset of symbol-insertion samples.
    Generate(GenerateArgs),
    /// Render a single animation frame of one sample as a PNG.
    Frame(FrameArgs),
    /// Print the prompt of one sample.
    Prompt(PromptArgs),
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Generator config JSON. Unset fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base random seed.
    #[arg(long)]
    seed: Option<u64>,
}

impl ConfigArgs {
    fn load(&self) -> anyhow::Result<GeneratorConfig> {
        let mut cfg = match &self.config {
            Some(path) => GeneratorConfig::from_path(path)
                .with_context(|| format!("load config '{}'", path.display()))?,
            None => GeneratorConfig::default(),
        };
        if let Some(seed) = self.seed {
            cfg.random_seed = Some(seed);
        }
        Ok(cfg)
    }
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    #[command(flatten)]
    base: ConfigArgs,

    /// Number of samples.
    #[arg(long)]
    num_samples: Option<usize>,

    /// Output root directory.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Symbol family.
    #[arg(long, value_enum)]
    symbol_set: Option<SymbolSet>,

    /// Shortest initial sequence.
    #[arg(long)]
    min_length: Option<usize>,

    /// Longest initial sequence.
    #[arg(long)]
    max_length: Option<usize>,

    /// Skip `ground_truth.mp4`.
    #[arg(long, default_value_t = false)]
    no_videos: bool,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    base: ConfigArgs,

    /// Sample index within the dataset.
    #[arg(long, default_value_t = 0)]
    sample: usize,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PromptArgs {
    #[command(flatten)]
    base: ConfigArgs,

    /// Sample index within the dataset.
    #[arg(long, default_value_t = 0)]
    sample: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Prompt(args) => cmd_prompt(args),
    }
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let mut cfg = args.base.load()?;
    if let Some(n) = args.num_samples {
        cfg.num_samples = n;
    }
    if let Some(out) = args.out {
        cfg.output_dir = out;
    }
    if let Some(set) = args.symbol_set {
        cfg.symbol_set = set;
    }
    if let Some(n) = args.min_length {
        cfg.min_sequence_length = n;
    }
    if let Some(n) = args.max_length {
        cfg.max_sequence_length = n;
    }
    if args.no_videos {
        cfg.generate_videos = false;
    }
    if args.threads.is_some() {
        cfg.threads = args.threads;
    }

    let summaries = symbol_insert::generate_dataset(&cfg)?;
    let videos = summaries.iter().filter(|s| s.video_written).count();
    eprintln!(
        "wrote {} samples ({videos} videos) under {}",
        summaries.len(),
        cfg.output_dir.display()
    );
    Ok(())
}

/// Seed the sample's RNG exactly as `generate` would, so `frame`/`prompt` describe the same task.
fn sample_seed(cfg: &GeneratorConfig, sample: usize) -> anyhow::Result<u64> {
    let base = cfg
        .random_seed
        .context("--seed (or random_seed in --config) is required to address a sample")?;
    Ok(derive_seed(base, sample))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = args.base.load()?;
    let seed = sample_seed(&cfg, args.sample)?;
    let generator = SymbolInsertGenerator::new(cfg)?;

    let mut rng = StdRng::seed_from_u64(seed);
    let task = generator.build_instance(&mut rng)?;
    let frame = generator
        .session(task)?
        .render_frame(FrameIndex(args.frame))?;

    symbol_insert::write_png(&args.out, &frame)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_prompt(args: PromptArgs) -> anyhow::Result<()> {
    let cfg = args.base.load()?;
    let seed = sample_seed(&cfg, args.sample)?;
    let generator = SymbolInsertGenerator::new(cfg)?;

    let mut rng = StdRng::seed_from_u64(seed);
    let task = generator.build_instance(&mut rng)?;
    println!("{}", generator.build_prompt(&task));
    Ok(())
}
