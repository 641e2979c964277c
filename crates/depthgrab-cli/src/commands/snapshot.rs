use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Args;
use depthgrab_core::config::CaptureConfig;
use depthgrab_core::convert::DepthConverter;
use depthgrab_core::frame::{FrameDescription, ReliableRange};
use depthgrab_core::io::raw::load_raw;
use depthgrab_core::snapshot::SnapshotExporter;

use crate::summary::print_snapshot_summary;

#[derive(Args)]
pub struct SnapshotArgs {
    /// Input raw depth capture
    pub file: PathBuf,

    /// Frame width in pixels
    #[arg(long)]
    pub width: u32,

    /// Frame height in pixels
    #[arg(long)]
    pub height: u32,

    /// Capture config (TOML); flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output directory for the three artifacts
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Minimum reliable depth, sensor units
    #[arg(long)]
    pub min_depth: Option<u16>,

    /// Maximum reliable depth; omitted means the full representable range
    #[arg(long)]
    pub max_depth: Option<u16>,
}

pub fn run(args: &SnapshotArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => CaptureConfig::from_toml(path)?,
        None => CaptureConfig::default(),
    };

    let range = match (args.min_depth, args.max_depth) {
        (None, None) => config.reliable_range(),
        (min, Some(max)) => ReliableRange::new(min.unwrap_or(0), max),
        (min, None) => ReliableRange::widened(min.unwrap_or(0)),
    };
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| config.output.directory.clone());

    let desc = FrameDescription::new(args.width, args.height);
    let frame = load_raw(&args.file, desc, range)?;

    let mut converter = DepthConverter::new(desc);
    if !converter.process_depth_frame(&frame) {
        return Err(anyhow!("frame geometry mismatch, nothing converted"));
    }

    std::fs::create_dir_all(&output_dir)?;
    let mut exporter =
        SnapshotExporter::new(output_dir).with_prefix(config.output.prefix.clone());
    let outcome = exporter.export(&frame, converter.pixels());

    print_snapshot_summary(&outcome, exporter.unreliable_total(), desc.pixel_count() as u64);

    // Data-stage failures are suppressed by design; only the image stage
    // is surfaced through the status text.
    println!("{}", outcome.status());
    Ok(())
}
