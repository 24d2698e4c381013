use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "chartreel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one frame of a chart as PNG or SVG.
    Frame(FrameArgs),
    /// Play a chart and write every frame as a numbered PNG.
    Play(PlayArgs),
    /// Print a summary of a dataset file.
    Inspect(InspectArgs),
}

#[derive(Args, Debug)]
struct Inputs {
    /// Chart to mount.
    #[arg(long, value_enum, default_value_t = ViewChoice::Transition)]
    view: ViewChoice,

    /// Scatterplot dataset JSON (defaults to the built-in demo data).
    #[arg(long)]
    data: Option<PathBuf>,

    /// Line series JSON (defaults to the built-in demo series).
    #[arg(long)]
    series: Option<PathBuf>,

    /// Config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Viewport width override.
    #[arg(long)]
    width: Option<u32>,

    /// Viewport height override.
    #[arg(long)]
    height: Option<u32>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    inputs: Inputs,

    /// Scrub a scatterplot to this step before rendering.
    #[arg(long)]
    step: Option<usize>,

    /// Virtual time to render at, after the scrub.
    #[arg(long, default_value_t = 2000)]
    at_ms: u64,

    /// Output path; `.svg` writes the scene as SVG, anything else as PNG.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    #[command(flatten)]
    inputs: Inputs,

    /// Frames per second of virtual time.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Directory for `frame_00000.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Stop after this much virtual time even if still playing.
    #[arg(long, default_value_t = 120_000)]
    max_ms: u64,

    /// Worker threads for rasterization.
    #[arg(long)]
    threads: Option<usize>,

    /// Rasterize on the calling thread.
    #[arg(long)]
    serial: bool,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Scatterplot dataset JSON (defaults to the built-in demo data).
    #[arg(long)]
    data: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ViewChoice {
    Line,
    Animated,
    Transition,
}

impl From<ViewChoice> for chartreel::ChartKind {
    fn from(v: ViewChoice) -> Self {
        match v {
            ViewChoice::Line => Self::AnnotatedLine,
            ViewChoice::Animated => Self::AnimatedScatter,
            ViewChoice::Transition => Self::TransitionScatter,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Play(args) => cmd_play(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn load_app(inputs: &Inputs) -> anyhow::Result<chartreel::App> {
    let mut config = match &inputs.config {
        Some(path) => chartreel::ChartConfig::from_json_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => chartreel::ChartConfig::default(),
    };
    if let Some(w) = inputs.width {
        config.viewport.width = w;
    }
    if let Some(h) = inputs.height {
        config.viewport.height = h;
    }

    let dataset = match &inputs.data {
        Some(path) => chartreel::Dataset::from_json_path(path)
            .with_context(|| format!("load dataset '{}'", path.display()))?,
        None => chartreel::demo_dataset(),
    };
    let series = match &inputs.series {
        Some(path) => chartreel::LineSeries::from_json_path(path)
            .with_context(|| format!("load series '{}'", path.display()))?,
        None => chartreel::demo_series(),
    };

    Ok(chartreel::App::with_view(
        config,
        dataset,
        series,
        inputs.view.into(),
    )?)
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut app = load_app(&args.inputs)?;
    if let Some(step) = args.step {
        app.dispatch(chartreel::UiEvent::Slider(step))?;
    }
    app.advance(chartreel::Millis(args.at_ms))?;
    let scene = app.frame()?;

    ensure_parent_dir(&args.out)?;
    let is_svg = args
        .out
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    if is_svg {
        std::fs::write(&args.out, scene.to_svg())
            .with_context(|| format!("write svg '{}'", args.out.display()))?;
    } else {
        let frame = chartreel::Rasterizer::new().rasterize(&scene)?;
        frame.save_png(&args.out)?;
    }
    tracing::info!(out = %args.out.display(), nodes = scene.nodes.len(), "frame written");
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let mut app = load_app(&args.inputs)?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output directory '{}'", args.out_dir.display()))?;

    let opts = chartreel::RecordOpts {
        fps: args.fps,
        max_duration: chartreel::Millis(args.max_ms),
        parallel: !args.serial,
        threads: args.threads,
        ..chartreel::RecordOpts::default()
    };
    let mut sink = chartreel::PngDirSink::new(&args.out_dir);
    let stats =
        chartreel::record_playback(&mut app, &opts, &chartreel::Rasterizer::new(), &mut sink)?;

    println!(
        "frames={} duration_ms={} steps={}",
        stats.frames, stats.duration.0, stats.steps
    );
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let dataset = match &args.data {
        Some(path) => chartreel::Dataset::from_json_path(path)
            .with_context(|| format!("load dataset '{}'", path.display()))?,
        None => chartreel::demo_dataset(),
    };
    let extent = dataset.extent();

    println!("steps={}", dataset.len());
    for (i, key) in dataset.keys().enumerate() {
        let points = dataset.points(i)?.len();
        println!("  {i}: {key} ({}) points={points}", chartreel::display_date(key));
    }
    println!(
        "max_x={} max_y={} max_intensity={}",
        extent.max_x, extent.max_y, extent.max_intensity
    );

    let scales = chartreel::ScaleSet::derive(
        &extent,
        chartreel::Canvas::default(),
        &chartreel::Padding::default(),
        chartreel::Palette::BLUE_RED,
    );
    let [x0, x1] = scales.x.domain();
    let [y0, y1] = scales.y.domain();
    println!("x_domain=[{x0}, {x1}] y_domain=[{y0}, {y1}]");
    Ok(())
}
