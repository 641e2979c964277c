use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Args;
use depthgrab_core::convert::DepthConverter;
use depthgrab_core::frame::{FrameDescription, ReliableRange};
use depthgrab_core::io::image::save_grayscale_png;
use depthgrab_core::io::raw::load_raw;

#[derive(Args)]
pub struct ConvertArgs {
    /// Input raw depth capture
    pub file: PathBuf,

    /// Frame width in pixels
    #[arg(long)]
    pub width: u32,

    /// Frame height in pixels
    #[arg(long)]
    pub height: u32,

    /// Minimum reliable depth, sensor units
    #[arg(long, default_value = "0")]
    pub min_depth: u16,

    /// Maximum reliable depth; omitted means the full representable range
    #[arg(long)]
    pub max_depth: Option<u16>,

    /// Output PNG path
    #[arg(short, long, default_value = "depth.png")]
    pub output: PathBuf,
}

pub fn run(args: &ConvertArgs) -> Result<()> {
    let desc = FrameDescription::new(args.width, args.height);
    let range = match args.max_depth {
        Some(max) => ReliableRange::new(args.min_depth, max),
        None => ReliableRange::widened(args.min_depth),
    };
    let frame = load_raw(&args.file, desc, range)?;

    let mut converter = DepthConverter::new(desc);
    if !converter.process_depth_frame(&frame) {
        return Err(anyhow!("frame geometry mismatch, nothing converted"));
    }

    save_grayscale_png(converter.pixels(), &desc, &args.output)?;
    println!("Saved to {}", args.output.display());
    Ok(())
}
