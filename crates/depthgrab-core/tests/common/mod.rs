#![allow(dead_code)]

use depthgrab_core::frame::{DepthFrame, FrameDescription, ReliableRange};

pub fn desc(width: u32, height: u32) -> FrameDescription {
    FrameDescription::new(width, height)
}

/// Frame where every sample holds the same depth value.
pub fn uniform_frame(width: u32, height: u32, value: u16) -> DepthFrame {
    let d = desc(width, height);
    DepthFrame::from_samples(d, vec![value; d.pixel_count()], ReliableRange::widened(0))
        .expect("sample count matches description")
}

/// Frame built from explicit row-major samples, widened reliable range.
pub fn frame_from(width: u32, height: u32, samples: Vec<u16>) -> DepthFrame {
    DepthFrame::from_samples(desc(width, height), samples, ReliableRange::widened(0))
        .expect("sample count matches description")
}
