use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use folio::{
    BootReport, FileLoadFlag, FolioConfig, FsAssetLoader, LoadOutcome, LoadedAsset,
    Manifest, MenuCircles, SimplexNoise2D, heartbeat_scale, polygon_to_svg_path,
};

#[derive(Parser, Debug)]
#[command(name = "folio", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Preload every asset of a manifest and report progress.
    Preload(PreloadArgs),
    /// Print the menu button ring outlines after a number of frames.
    Circles(CirclesArgs),
    /// Print the heartbeat scale sampled at a fixed frame rate.
    Heartbeat(HeartbeatArgs),
}

#[derive(Parser, Debug)]
struct PreloadArgs {
    /// Directory asset locators are resolved against.
    #[arg(long)]
    root: PathBuf,

    /// Manifest JSON (`[{"kind": ..., "locator": ...}]`).
    #[arg(long)]
    manifest: PathBuf,

    /// Font directory (defaults to `<root>/fonts`).
    #[arg(long)]
    fonts: Option<PathBuf>,

    /// JSON file holding the "loaded before" flag; enables skip-on-repeat.
    #[arg(long)]
    flag: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct CirclesArgs {
    /// Frames to advance at 60 fps before printing.
    #[arg(long, default_value_t = 1)]
    frames: u32,

    /// Hover the button before advancing.
    #[arg(long, default_value_t = false)]
    hovered: bool,

    /// Noise field seed.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct HeartbeatArgs {
    /// Seconds to sample.
    #[arg(long, default_value_t = 1.0)]
    duration: f64,

    /// Samples per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Preload(args) => cmd_preload(args),
        Command::Circles(args) => cmd_circles(args),
        Command::Heartbeat(args) => cmd_heartbeat(args),
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<FolioConfig> {
    match path {
        Some(p) => Ok(FolioConfig::from_path(p)?),
        None => Ok(FolioConfig::default()),
    }
}

fn cmd_preload(args: PreloadArgs) -> anyhow::Result<()> {
    let manifest = Manifest::from_json_path(&args.manifest)?;
    let loader = match args.fonts {
        Some(fonts) => FsAssetLoader::with_fonts_dir(&args.root, fonts),
        None => FsAssetLoader::new(&args.root),
    };
    let on_progress = |pct: u8| eprintln!("progress {pct}%");

    let outcomes = match args.flag {
        Some(flag_path) => {
            let flag = FileLoadFlag::new(flag_path, "@folio");
            match pollster::block_on(folio::boot(
                &flag,
                manifest.entries(),
                &loader,
                on_progress,
            )) {
                BootReport::Skipped => {
                    println!("skipped: assets loaded on a previous run");
                    return Ok(());
                }
                BootReport::Loaded { outcomes, .. } => outcomes,
                BootReport::Degraded { reason } => anyhow::bail!("preload abandoned: {reason}"),
            }
        }
        None => pollster::block_on(folio::preload(manifest.entries(), &loader, on_progress))?,
    };

    print_outcomes(&manifest, &outcomes);
    Ok(())
}

fn print_outcomes(manifest: &Manifest, outcomes: &[LoadOutcome]) {
    for (asset, outcome) in manifest.entries().iter().zip(outcomes) {
        let detail = match outcome {
            LoadOutcome::Success(LoadedAsset::Image(img)) => {
                format!("ok {}x{}", img.width, img.height)
            }
            LoadOutcome::Success(LoadedAsset::Svg(svg)) => {
                format!("ok svg {}x{}", svg.width, svg.height)
            }
            LoadOutcome::Success(LoadedAsset::Model(m)) => format!(
                "ok glTF {} meshes={} draco={}",
                m.version, m.mesh_count, m.draco
            ),
            LoadOutcome::Success(LoadedAsset::Font(f)) => format!("ok {} face(s)", f.faces),
            LoadOutcome::Failure(reason) => format!("FAILED {reason}"),
            LoadOutcome::Cancelled => "cancelled".to_string(),
        };
        println!("{:<5} {:<40} {detail}", asset.kind(), asset.locator());
    }
    let failed = outcomes.iter().filter(|o| o.is_failure()).count();
    println!("{} loaded, {failed} failed", outcomes.len() - failed);
}

fn cmd_circles(args: CirclesArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_ref())?;
    let mut circles = MenuCircles::new(cfg.circles, cfg.presets, SimplexNoise2D::new(args.seed))?;
    if args.hovered {
        circles.set_hovered(true);
    }

    let mut frame = circles.render()?;
    for _ in 0..args.frames {
        frame = circles.advance(1.0 / 60.0)?;
    }

    println!("ring_1 {}", polygon_to_svg_path(&frame.ring_1));
    println!("ring_2 {}", polygon_to_svg_path(&frame.ring_2));
    println!("lines {:.2} {:.2}", frame.line_x2[0], frame.line_x2[1]);
    Ok(())
}

fn cmd_heartbeat(args: HeartbeatArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_ref())?;
    if args.fps == 0 || !(args.duration.is_finite() && args.duration >= 0.0) {
        anyhow::bail!("--fps must be > 0 and --duration must be >= 0");
    }

    let samples = (args.duration * args.fps as f64).floor() as u64;
    let mut out = String::new();
    for i in 0..=samples {
        let t = i as f64 / args.fps as f64;
        let s = heartbeat_scale(t, &cfg.heartbeat);
        out.push_str(&format!("{t:.4} {s:.6}\n"));
    }
    std::io::Write::write_all(&mut std::io::stdout().lock(), out.as_bytes())
        .context("write heartbeat samples")?;
    Ok(())
}
