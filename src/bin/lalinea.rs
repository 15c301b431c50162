use std::{
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "lalinea", version)]
struct Cli {
    /// Viewer config JSON (all fields optional).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More logging: -v for debug, -vv for trace.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate up to a point in time and write that frame as a PNG.
    Frame(FrameArgs),
    /// Write every frame of a fixed-rate run as numbered PNGs.
    Frames(FramesArgs),
    /// Re-read the control file and rewrite a PNG every frame until interrupted.
    Watch(WatchArgs),
    /// Parse the control file once and print the scene as JSON.
    Check(CheckArgs),
}

#[derive(Args, Debug)]
struct ViewArgs {
    /// Control file; overrides the config.
    #[arg(long)]
    control: Option<PathBuf>,

    /// Output width in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Output height in pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Simulated frames per second.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    view: ViewArgs,

    /// Seconds since the first frame.
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct FramesArgs {
    #[command(flatten)]
    view: ViewArgs,

    /// Length of the run in seconds.
    #[arg(long)]
    seconds: f64,

    /// Directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Args, Debug)]
struct WatchArgs {
    #[command(flatten)]
    view: ViewArgs,

    /// PNG rewritten every frame.
    #[arg(long)]
    out: PathBuf,

    /// Stop after this many frames.
    #[arg(long)]
    max_frames: Option<u64>,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Control file; overrides the config.
    #[arg(long)]
    control: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = load_config(cli.config.as_deref())?;
    match cli.cmd {
        Command::Frame(args) => cmd_frame(cfg, args),
        Command::Frames(args) => cmd_frames(cfg, args),
        Command::Watch(args) => cmd_watch(cfg, args),
        Command::Check(args) => cmd_check(cfg, args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<lalinea::ViewerConfig> {
    match path {
        Some(p) => lalinea::ViewerConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display())),
        None => Ok(lalinea::ViewerConfig::default()),
    }
}

fn make_platform(
    mut cfg: lalinea::ViewerConfig,
    view: &ViewArgs,
) -> anyhow::Result<lalinea::HeadlessPlatform<lalinea::LaLinea<lalinea::ControlFile>>> {
    anyhow::ensure!(
        view.fps.is_finite() && view.fps > 0.0,
        "--fps must be a positive number"
    );
    if let Some(control) = &view.control {
        cfg.control_path = control.clone();
    }
    if !cfg.control_path.is_file() {
        tracing::warn!(
            path = %cfg.control_path.display(),
            "control file not found yet; rendering defaults until it appears"
        );
    }
    let viewport = lalinea::Viewport::new(view.width, view.height)?;
    let client = lalinea::LaLinea::from_config(&cfg);
    Ok(lalinea::HeadlessPlatform::new(client, viewport)?)
}

/// Upper bound on simulated steps for `frame` and `frames`.
const MAX_STEPS: f64 = 1_000_000.0;

fn frame_count(seconds: f64, fps: f64) -> anyhow::Result<u64> {
    anyhow::ensure!(
        seconds.is_finite() && seconds >= 0.0,
        "duration must be a non-negative number of seconds"
    );
    let steps = (seconds * fps).round();
    anyhow::ensure!(
        steps <= MAX_STEPS,
        "{seconds} s at {fps} fps is {steps} frames; at most {MAX_STEPS} are allowed"
    );
    Ok(steps as u64)
}

fn cmd_frame(cfg: lalinea::ViewerConfig, args: FrameArgs) -> anyhow::Result<()> {
    let mut platform = make_platform(cfg, &args.view)?;
    let steps = frame_count(args.time, args.view.fps)?;
    let dt = 1.0 / args.view.fps;

    let mut frame = platform.step(0.0)?;
    for _ in 0..steps {
        frame = platform.step(dt)?;
    }

    frame
        .write_png(&args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(cfg: lalinea::ViewerConfig, args: FramesArgs) -> anyhow::Result<()> {
    let mut platform = make_platform(cfg, &args.view)?;
    let steps = frame_count(args.seconds, args.view.fps)?;
    let dt = 1.0 / args.view.fps;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    for i in 0..=steps {
        let frame = platform.step(if i == 0 { 0.0 } else { dt })?;
        let path = args.out_dir.join(format!("frame_{i:05}.png"));
        frame
            .write_png(&path)
            .with_context(|| format!("write png '{}'", path.display()))?;
    }

    eprintln!("wrote {} frames to {}", steps + 1, args.out_dir.display());
    Ok(())
}

fn cmd_watch(cfg: lalinea::ViewerConfig, args: WatchArgs) -> anyhow::Result<()> {
    let mut platform = make_platform(cfg, &args.view)?;
    let period = Duration::from_secs_f64(1.0 / args.view.fps);
    let mut last = Instant::now();
    let mut elapsed = 0.0;

    loop {
        if args.max_frames.is_some_and(|max| platform.frames() >= max) {
            break;
        }
        let frame = platform.step(elapsed)?;
        frame
            .write_png(&args.out)
            .with_context(|| format!("write png '{}'", args.out.display()))?;

        let spent = last.elapsed();
        if spent < period {
            std::thread::sleep(period - spent);
        }
        let now = Instant::now();
        elapsed = now.duration_since(last).as_secs_f64();
        last = now;
    }

    eprintln!("rendered {} frames", platform.frames());
    Ok(())
}

fn cmd_check(cfg: lalinea::ViewerConfig, args: CheckArgs) -> anyhow::Result<()> {
    let path = args.control.unwrap_or(cfg.control_path);
    let bytes =
        std::fs::read(&path).with_context(|| format!("read control file '{}'", path.display()))?;
    let scene = lalinea::parse(&String::from_utf8_lossy(&bytes));

    let report = serde_json::json!({
        "transform": scene.transform.map(|m| m.to_rows3()),
        "points": scene.points.iter().map(|p| [p.x, p.y]).collect::<Vec<_>>(),
        "skipped_tokens": scene.skipped,
        "error": scene.error.as_ref().map(|e| e.to_string()),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    if let Some(err) = scene.error {
        return Err(lalinea::LaLineaError::from(err))
            .with_context(|| format!("check '{}'", path.display()));
    }
    Ok(())
}
