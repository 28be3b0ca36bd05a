use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use regionseek_core::config::FrontendConfig;
use regionseek_core::selection::{ImageFile, LoadState, Point, RegionSelector};

use super::parse_point;
use crate::summary::print_selection_summary;

#[derive(Args)]
pub struct SelectArgs {
    /// Image to select on
    pub image: PathBuf,

    /// Press position (x,y in image pixels)
    #[arg(long, value_parser = parse_point)]
    pub from: Point,

    /// Release position (x,y in image pixels)
    #[arg(long, value_parser = parse_point)]
    pub to: Point,

    /// Intermediate pointer positions, in order
    #[arg(long, value_parser = parse_point)]
    pub via: Vec<Point>,

    /// Write the rendered canvas (image plus outline) to this PNG
    #[arg(long)]
    pub preview: Option<PathBuf>,

    /// Write the selected pixels to this file
    #[arg(long)]
    pub crop_out: Option<PathBuf>,

    /// Print the crop as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &SelectArgs, config: &FrontendConfig) -> Result<()> {
    let file = ImageFile::open(&args.image)
        .with_context(|| format!("Failed to read {}", args.image.display()))?;

    let mut selector = RegionSelector::from_config(&config.selector);
    selector.load_file(Some(file));
    if selector.wait_decode() != LoadState::Ready {
        bail!("Could not decode {}", args.image.display());
    }

    selector.on_pointer_down(args.from.x, args.from.y);
    for p in &args.via {
        selector.on_pointer_move(p.x, p.y);
    }
    selector.on_pointer_up(args.to.x, args.to.y);

    let crop = selector.get_crop();

    if args.json {
        println!("{}", serde_json::to_string(&crop)?);
    } else {
        print_selection_summary(&args.image, selector.surface(), &crop);
    }

    if let Some(ref path) = args.preview {
        selector
            .canvas()
            .pixels()
            .save(path)
            .with_context(|| format!("Failed to write preview to {}", path.display()))?;
        println!("Preview saved to {}", path.display());
    }

    if let Some(ref path) = args.crop_out {
        let pixels = selector.extract_crop()?;
        pixels
            .save(path)
            .with_context(|| format!("Failed to write crop to {}", path.display()))?;
        println!("Crop saved to {}", path.display());
    }

    Ok(())
}
