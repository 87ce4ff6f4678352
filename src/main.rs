use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use faceselect::source::{self, LocalSource};
use faceselect::{config, storage::Store, OverlayScene, Point};
use log::info;

#[derive(Parser)]
#[command(name = "faceselect")]
#[command(version, about = "Face overlay selection over detection results")]
struct Cli {
    /// Face detection JSON (defaults to the configured source)
    #[arg(long, global = true)]
    faces: Option<PathBuf>,
    /// Photo the detections refer to (defaults to the configured source)
    #[arg(long, global = true)]
    image: Option<PathBuf>,
    /// Viewport width the photo is fitted to
    #[arg(long, global = true)]
    viewport: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load both resources and cache them
    Fetch,
    /// Print every face region in display space
    Regions,
    /// Apply taps in order and print the resulting selection
    Tap {
        /// Display-space point, e.g. `--at 120,88`
        #[arg(long = "at", value_parser = parse_point, required = true)]
        points: Vec<Point>,
    },
    /// Print the summary for one face
    Show { index: usize },
    /// Remove cached resources
    Purge,
    /// Open config file in editor
    Config,
}

fn parse_point(raw: &str) -> Result<Point, String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {raw:?}"))?;
    let parse = |v: &str| v.trim().parse::<f64>().map_err(|e| format!("{v:?}: {e}"));
    Ok(Point::new(parse(x)?, parse(y)?))
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config(None)?;

    match cli.command {
        Commands::Purge => purge(),
        Commands::Config => open_config(),
        command => {
            let source = LocalSource::new(
                cli.faces.unwrap_or(cfg.faces_source),
                cli.image.unwrap_or(cfg.image_source),
            )
            .with_store(Store::default());
            let width = cli.viewport.unwrap_or(cfg.viewport_width);
            run(command, &source, width)
        }
    }
}

fn run(command: Commands, source: &LocalSource, viewport_width: f64) -> Result<()> {
    let mut scene =
        OverlayScene::with_viewport_width(viewport_width).context("invalid viewport width")?;
    source::deliver(source, &mut scene).context("Failed to load detection data")?;

    match command {
        Commands::Regions => print_regions(&scene),
        Commands::Tap { points } => tap(&mut scene, &points),
        Commands::Show { index } => {
            scene.select(index)?;
            print_selection(&scene)
        }
        _ => {
            info!("✓ {} face(s) ready", scene.faces().len());
            Ok(())
        }
    }
}

fn print_regions(scene: &OverlayScene) -> Result<()> {
    if let Some(size) = scene.rendered_size() {
        println!("image {}x{}", size.width, size.height);
    }
    for styled in scene.regions() {
        let r = styled.region;
        let face = &scene.faces()[styled.index];
        println!(
            "#{} {} x={:.1} y={:.1} w={:.1} h={:.1} color={:?} border={}",
            styled.index,
            face.id,
            r.x,
            r.y,
            r.width,
            r.height,
            styled.style.color,
            styled.style.border_width
        );
    }
    Ok(())
}

fn tap(scene: &mut OverlayScene, points: &[Point]) -> Result<()> {
    for p in points {
        let selected = scene.tap(*p)?;
        info!("tap ({}, {}) -> {:?}", p.x, p.y, selected);
    }
    print_selection(scene)
}

fn print_selection(scene: &OverlayScene) -> Result<()> {
    let Some(summary) = scene.summary()? else {
        println!("no face selected");
        return Ok(());
    };
    println!("{summary}");
    for p in scene.landmarks() {
        println!("  landmark ({:.1}, {:.1})", p.x, p.y);
    }
    Ok(())
}

fn purge() -> Result<()> {
    let store = Store::default();
    info!("Purging cache at {}", store.root().display());
    store.purge().context("Failed to purge cache")?;
    info!("✓ Cache purged");
    Ok(())
}

fn open_config() -> Result<()> {
    let config_path = config::CONFIG_PATH.as_os_str();
    let editor = env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    info!("Opening config file: {:?}", config_path);

    let status = std::process::Command::new(editor)
        .arg(config_path)
        .status()
        .context("Failed to open editor")?;

    if !status.success() {
        anyhow::bail!("Editor exited with non-zero status");
    }

    Ok(())
}
