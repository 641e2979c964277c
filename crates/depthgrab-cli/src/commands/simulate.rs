use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::Args;
use depthgrab_core::convert::DepthConverter;
use depthgrab_core::frame::{DepthFrame, FrameDescription, ReliableRange};
use depthgrab_core::mailbox::FrameMailbox;
use depthgrab_core::snapshot::SnapshotExporter;
use depthgrab_core::status::SensorStatus;
use tracing::debug;

use crate::summary::print_snapshot_summary;

#[derive(Args)]
pub struct SimulateArgs {
    /// Number of synthetic frames to deliver
    #[arg(long, default_value = "60")]
    pub frames: u32,

    /// Frame width in pixels
    #[arg(long, default_value = "512")]
    pub width: u32,

    /// Frame height in pixels
    #[arg(long, default_value = "424")]
    pub height: u32,

    /// Delay between frame deliveries in milliseconds
    #[arg(long, default_value = "33")]
    pub interval_ms: u64,

    /// Output directory for the final snapshot
    #[arg(short, long, default_value = "KinectData")]
    pub output_dir: PathBuf,
}

pub fn run(args: &SimulateArgs) -> Result<()> {
    let desc = FrameDescription::new(args.width, args.height);
    let mailbox = Arc::new(FrameMailbox::new());
    println!("{}", SensorStatus::Running);

    let producer = {
        let mailbox = Arc::clone(&mailbox);
        let total = args.frames;
        let interval = Duration::from_millis(args.interval_ms);
        thread::spawn(move || {
            let mut dropped = 0u32;
            for index in 0..total {
                let frame = synthetic_frame(desc, index);
                if mailbox.publish(frame).is_some() {
                    dropped += 1;
                }
                thread::sleep(interval);
            }
            mailbox.close();
            dropped
        })
    };

    let mut converter = DepthConverter::new(desc);
    let mut last_frame: Option<DepthFrame> = None;
    let mut converted = 0u32;
    loop {
        match mailbox.take_timeout(Duration::from_millis(500)) {
            Some(frame) => {
                if converter.process_depth_frame(&frame) {
                    converted += 1;
                }
                last_frame = Some(frame);
            }
            None if mailbox.is_closed() => break,
            None => {}
        }
    }

    let dropped = producer.join().expect("producer thread panicked");
    debug!(converted, dropped, "simulation finished");
    println!("Converted {} frames ({} displaced in the mailbox)", converted, dropped);

    let Some(frame) = last_frame else {
        println!("{}", SensorStatus::NoSensor);
        return Err(anyhow!("no frames delivered"));
    };
    std::fs::create_dir_all(&args.output_dir)?;
    let mut exporter = SnapshotExporter::new(args.output_dir.clone());
    let outcome = exporter.export(&frame, converter.pixels());

    print_snapshot_summary(&outcome, exporter.unreliable_total(), desc.pixel_count() as u64);
    println!("{}", outcome.status());
    Ok(())
}

/// Diagonal gradient drifting with the frame index, with a sprinkling of
/// no-reading pixels so the summary has something to count.
fn synthetic_frame(desc: FrameDescription, index: u32) -> DepthFrame {
    let mut samples = Vec::with_capacity(desc.pixel_count());
    for y in 0..desc.height {
        for x in 0..desc.width {
            let flat = (y * desc.width + x) as usize;
            let sample = if flat % 97 == 0 {
                0
            } else {
                (500 + (x + y + index * 4) % 1500) as u16
            };
            samples.push(sample);
        }
    }
    DepthFrame::from_samples(desc, samples, ReliableRange::widened(0))
        .expect("synthetic frame matches its description")
}
