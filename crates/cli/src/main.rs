mod preview;
mod report;
mod scene;

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

use videocrop_core::crop::crop_content::CropContent;
use videocrop_core::crop::domain::frame_source::FrameSource;

use crate::scene::{SceneFile, SceneSource};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Computes the draw commands for a cropped video scene.
#[derive(Parser)]
#[command(name = "videocrop")]
struct Cli {
    /// Scene description (JSON).
    scene: PathBuf,

    /// Output format for the draw command list.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Rasterise the draw commands to this PNG file.
    #[arg(long)]
    preview: Option<PathBuf>,

    /// Image to use as the video frame in the preview (default: checker).
    #[arg(long, requires = "preview")]
    frame_image: Option<PathBuf>,

    /// Override the scene's paint_borders setting.
    #[arg(long)]
    paint_borders: Option<bool>,

    /// Override the scene's paint_frame setting.
    #[arg(long)]
    paint_frame: Option<bool>,

    /// Override the scene's paint_overlays setting.
    #[arg(long)]
    paint_overlays: Option<bool>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let scene = SceneFile::load(&cli.scene)?;
    let source = SceneSource::from_scene(&scene, cli.frame_image.as_deref())?;

    let mut content = CropContent::new(scene.crop_config());
    apply_overrides(&cli, &mut content);

    if let Some((w, h)) = content.preferred_size(&source) {
        log::info!("Frame resolution: {w}x{h}");
    } else {
        log::info!("No frame in scene, painting idle state");
    }

    let allocation = scene.allocation();
    let commands = content.paint(&source, allocation, &scene.appearance());

    match cli.format {
        OutputFormat::Text => print!("{}", report::to_text(&commands)),
        OutputFormat::Json => println!("{}", report::to_json(&commands)?),
    }

    if let Some(path) = &cli.preview {
        let frame = source.frame();
        let overlays = source.overlays();
        let canvas = preview::render(&commands, &allocation, frame.as_ref(), &overlays)?;
        preview::save(&canvas, path)?;
        log::info!("Preview written to {}", path.display());
    }

    Ok(())
}

fn apply_overrides(cli: &Cli, content: &mut CropContent) {
    let config = content.config_mut();
    if let Some(enabled) = cli.paint_borders {
        config.set_paint_borders(enabled);
    }
    if let Some(enabled) = cli.paint_frame {
        config.set_paint_frame(enabled);
    }
    if let Some(enabled) = cli.paint_overlays {
        config.set_paint_overlays(enabled);
    }
}
