use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use serde::de::DeserializeOwned;
use tracing::info;

use facepaint::{
    ApplicationOrder, EffectOverride, FixedDetector, LandmarkSet, MakeupPipeline, MakeupProduct,
    OutputFormat, PipelineOpts,
};

#[derive(Parser, Debug)]
#[command(name = "facepaint", version)]
struct Cli {
    /// Log at DEBUG instead of INFO.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Composite products onto a photo using precomputed landmarks.
    Apply(ApplyArgs),
    /// Print the padded face rectangle for a landmark file as JSON.
    Crop(CropArgs),
}

#[derive(Parser, Debug)]
struct ApplyArgs {
    /// Source image (any format the decoder recognises).
    #[arg(long)]
    image: PathBuf,

    /// Landmark JSON: an array of 468 `{x, y, z}` points, or `null` for "no face".
    #[arg(long)]
    landmarks: PathBuf,

    /// Product list JSON.
    #[arg(long)]
    products: PathBuf,

    /// Optional override list JSON.
    #[arg(long)]
    overrides: Option<PathBuf>,

    /// Output path; `.jpg`/`.jpeg` selects JPEG, anything else PNG.
    #[arg(long)]
    out: PathBuf,

    /// Application order (defaults to FACEPAINT_ORDER or canonical).
    #[arg(long, value_enum)]
    order: Option<OrderChoice>,

    /// Brow hair seed (defaults to FACEPAINT_BROW_SEED or the built-in seed).
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct CropArgs {
    /// Landmark JSON (must describe a face).
    #[arg(long)]
    landmarks: PathBuf,

    /// Image width in pixels.
    #[arg(long)]
    width: u32,

    /// Image height in pixels.
    #[arg(long)]
    height: u32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OrderChoice {
    Canonical,
    AsListed,
}

impl From<OrderChoice> for ApplicationOrder {
    fn from(c: OrderChoice) -> Self {
        match c {
            OrderChoice::Canonical => ApplicationOrder::Canonical,
            OrderChoice::AsListed => ApplicationOrder::AsListed,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Apply(args) => cmd_apply(args),
        Command::Crop(args) => cmd_crop(args),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> anyhow::Result<T> {
    let f = File::open(path)
        .with_context(|| format!("open {what} '{}'", path.display()))?;
    serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse {what} JSON '{}'", path.display()))
}

fn output_format_for(path: &Path, env_default: OutputFormat) -> OutputFormat {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg" | "jpeg") => match env_default {
            OutputFormat::Jpeg { .. } => env_default,
            OutputFormat::Png => OutputFormat::Jpeg {
                quality: OutputFormat::DEFAULT_JPEG_QUALITY,
            },
        },
        _ => OutputFormat::Png,
    }
}

fn cmd_apply(args: ApplyArgs) -> anyhow::Result<()> {
    let source = std::fs::read(&args.image)
        .with_context(|| format!("read '{}'", args.image.display()))?;
    let landmarks: Option<LandmarkSet> = read_json(&args.landmarks, "landmarks")?;
    let products: Vec<MakeupProduct> = read_json(&args.products, "products")?;
    let overrides: Vec<EffectOverride> = match &args.overrides {
        Some(p) => read_json(p, "overrides")?,
        None => Vec::new(),
    };

    let mut opts = PipelineOpts::from_env();
    opts.output = output_format_for(&args.out, opts.output);
    if let Some(order) = args.order {
        opts.order = order.into();
    }
    if let Some(seed) = args.seed {
        opts.brow_seed = seed;
    }

    let mut pipeline = MakeupPipeline::new(FixedDetector::from_option(landmarks), opts);
    let result = pipeline
        .apply_effects(&source, &products, &overrides)
        .context("apply effects")?;
    pipeline.shutdown();

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &result.image_data)
        .with_context(|| format!("write '{}'", args.out.display()))?;

    info!(
        face_detected = result.face_detected,
        crop = ?result.face_crop,
        "wrote {}",
        args.out.display()
    );
    Ok(())
}

fn cmd_crop(args: CropArgs) -> anyhow::Result<()> {
    let landmarks: Option<LandmarkSet> = read_json(&args.landmarks, "landmarks")?;
    let landmarks = landmarks.context("landmark file describes no face")?;
    let crop = facepaint::face_crop(&landmarks, args.width, args.height);
    println!("{}", serde_json::to_string_pretty(&crop)?);
    Ok(())
}
