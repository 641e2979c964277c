use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use depthgrab_core::frame::{FrameDescription, ReliableRange};
use depthgrab_core::io::raw::load_raw;

#[derive(Args)]
pub struct InfoArgs {
    /// Input raw depth capture (little-endian u16 samples, no header)
    pub file: PathBuf,

    /// Frame width in pixels
    #[arg(long)]
    pub width: u32,

    /// Frame height in pixels
    #[arg(long)]
    pub height: u32,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let desc = FrameDescription::new(args.width, args.height);
    let frame = load_raw(&args.file, desc, ReliableRange::widened(0))?;

    let total = desc.pixel_count();
    let unreliable = frame.unreliable_count();
    let min = frame
        .samples
        .iter()
        .filter(|&&s| s != 0)
        .min()
        .copied()
        .unwrap_or(0);
    let max = frame.samples.iter().max().copied().unwrap_or(0);

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", desc.width, desc.height);
    println!("Data size:   {} bytes", desc.byte_size());
    println!(
        "Unreliable:  {} / {} ({:.2}%)",
        unreliable,
        total,
        unreliable as f64 / total as f64 * 100.0
    );
    println!("Depth range: [{}, {}] (nonzero min)", min, max);

    Ok(())
}
